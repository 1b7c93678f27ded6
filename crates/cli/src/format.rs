//! Output rendering.
//!
//! Human mode prints compact tables and key/value lines. JSON mode prints
//! the payload of each output with the same field names the engine
//! serializes (`{data, total, page, limit}` for a page).

use courier_core::{Error, Tracking, TrackingPage, TrackingSummary, Vote};
use courier_executor::Output;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => json!({ "error": err.code(), "message": err.to_string() }).to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &Output) -> String {
    match output {
        Output::Pong { status, version } => to_json(&json!({ "status": status, "version": version })),
        Output::Page(page) => to_json(page),
        Output::Statuses(statuses) => to_json(statuses),
        Output::Tracking(t) => to_json(t),
        Output::Vote(v) => to_json(v),
        Output::Summary(s) => to_json(s),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| json!({ "error": "Unavailable", "message": e.to_string() }).to_string())
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Pong { status, version } => format!("PONG {} (v{})", status, version),
        Output::Page(page) => format_page(page),
        Output::Statuses(statuses) => {
            if statuses.is_empty() {
                return "(empty)".to_string();
            }
            statuses
                .iter()
                .enumerate()
                .map(|(i, s)| format!("{}) {}", i + 1, s))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Output::Tracking(t) => format_tracking(t),
        Output::Vote(v) => format_vote(v),
        Output::Summary(s) => format_summary(s),
    }
}

fn format_page(page: &TrackingPage) -> String {
    let mut lines = Vec::with_capacity(page.data.len() + 2);
    if page.data.is_empty() {
        lines.push("(empty)".to_string());
    } else {
        lines.push(format!(
            "{:<8} {:<10} {:<24} {:<11} {:>10} {:>6}",
            "ID", "USER", "NAME", "STATUS", "FEE", "RATING"
        ));
        for view in &page.data {
            let t = &view.tracking;
            lines.push(format!(
                "{:<8} {:<10} {:<24} {:<11} {:>10.2} {:>6}",
                t.id.as_str(),
                t.user_id.as_str(),
                t.name,
                t.status.as_str(),
                t.service_fee,
                view.rating
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string())
            ));
        }
    }
    lines.push(format!(
        "(page {} of {}, {} per page, {} total)",
        page.page,
        page.page_count().max(1),
        page.limit,
        page.total
    ));
    lines.join("\n")
}

fn format_tracking(t: &Tracking) -> String {
    let completed = t
        .completed_time
        .map(|c| c.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());
    let mut out = format!(
        "id: {}\nuser: {}\nname: {}\nstatus: {}\norder time: {}\ncompleted time: {}\nservice fee: {:.2}",
        t.id,
        t.user_id,
        t.name,
        t.status,
        t.order_time.to_rfc3339(),
        completed,
        t.service_fee
    );
    if let Some(d) = t.duration() {
        out.push_str(&format!("\nduration: {}h {}m", d.num_hours(), d.num_minutes() % 60));
    }
    out
}

fn format_vote(v: &Vote) -> String {
    format!(
        "OK {} rated {} ({}) {}/5",
        v.user_id, v.tracking_id, v.tracking_name, v.rating
    )
}

fn format_summary(s: &TrackingSummary) -> String {
    let mut lines = vec![format!("total trackings: {}", s.total_trackings)];
    for (status, count) in &s.status_summary {
        lines.push(format!("  {}: {}", status, count));
    }
    lines.push(format!("total service fee: {:.2}", s.total_service_fee));
    lines.push(format!("average rating: {:.1}", s.average_rating));
    lines.join("\n")
}
