//! Walkthrough Tests
//!
//! Multi-step flows through the handles, the session and the executor.

use crate::*;
use courier::prelude::*;
use courier::{Command, Output};
use serde_json::json;

#[test]
fn test_create_on_empty_store_wire_shape() {
    let db = create_db();
    let created = db.trackings.create(&user("u1"), "Pkg A", 50.0).unwrap();

    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["userId"], "u1");
    assert_eq!(json["name"], "Pkg A");
    assert_eq!(json["status"], "Created");
    assert_eq!(json["serviceFee"], 50.0);
    assert_eq!(json["completedTime"], "");
    assert!(json["orderTime"].is_string());
}

#[test]
fn test_listing_wire_shape() {
    let db = seeded_db(
        vec![
            tracking("1", "u1", "A", TrackingStatus::Delivered, 5.0),
            tracking("2", "u1", "B", TrackingStatus::Created, 5.0),
        ],
        vec![vote("u2", "1", 4)],
    );
    let page = db.trackings.list(TrackingQuery::new().limit(5)).unwrap();
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["total"], 2);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 5);
    // Tracking fields are flattened next to the rating
    assert_eq!(json["data"][0]["id"], "1");
    assert_eq!(json["data"][0]["rating"], 4);
    assert_eq!(json["data"][1]["rating"], serde_json::Value::Null);
}

#[test]
fn test_delivery_lifecycle() {
    let db = create_db();
    let alice = user("alice");
    let bob = user("bob");

    let pkg = db.trackings.create(&alice, "Camera", 80.0).unwrap();
    db.trackings
        .update(&alice, &pkg.id, TrackingPatch::new().service_fee(85.0))
        .unwrap();
    db.trackings
        .update(&alice, &pkg.id, TrackingPatch::new().status(TrackingStatus::InTransit))
        .unwrap();

    // Locked once it leaves Created
    assert!(db
        .trackings
        .update(&alice, &pkg.id, TrackingPatch::new().status(TrackingStatus::Delivered))
        .unwrap_err()
        .is_conflict());

    db.votes.cast(&bob, &pkg.id, 5).unwrap();
    db.votes.cast(&alice, &pkg.id, "3").unwrap();

    let page = db
        .trackings
        .list(TrackingQuery::new().status(TrackingStatus::InTransit))
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].tracking.service_fee, 85.0);
    assert_eq!(page.data[0].rating.map(|r| r.value()), Some(5));

    let summary = db.dashboard.summary().unwrap();
    assert_eq!(summary.average_rating, 4.0);
    assert_eq!(summary.total_service_fee, 85.0);
}

#[test]
fn test_sessions_share_the_engine() {
    let db = create_db();
    let mut session = db.session("u1");

    let created = session.create_tracking("Pkg", 10.0).unwrap();
    session.switch_user(user("u2"));
    session.vote_tracking(&created.id, 2).unwrap();

    assert_eq!(db.votes.all().unwrap().len(), 1);
    assert_eq!(db.session("u9").summary().unwrap().average_rating, 2.0);
}

#[test]
fn test_executor_accepts_json_commands() {
    let db = create_db();
    let executor = db.executor();

    let commands: Vec<Command> = serde_json::from_value(json!([
        {"CreateTracking": {"user": "u1", "request": {"name": "Pkg", "serviceFee": 12}}},
        {"VoteTracking": {"user": "u2", "tracking_id": "1", "request": {"rating": 4}}},
        {"VoteTracking": {"user": "u2", "tracking_id": "1", "request": {"rating": 5}}},
        "Summary"
    ]))
    .unwrap();

    let results = executor.execute_many(commands);
    assert!(matches!(results[0], Ok(Output::Tracking(_))));
    assert!(matches!(results[1], Ok(Output::Vote(_))));
    assert!(results[2].as_ref().unwrap_err().is_conflict());
    match &results[3] {
        Ok(Output::Summary(s)) => {
            assert_eq!(s.total_trackings, 1);
            assert_eq!(s.average_rating, 4.0);
        }
        other => panic!("Expected Summary, got {:?}", other),
    }
}
