//! Dashboard Summary Tests

use crate::*;
use courier::prelude::*;

#[test]
fn test_summary_of_empty_store() {
    let summary = create_db().dashboard.summary().unwrap();
    assert_eq!(summary.total_trackings, 0);
    assert!(summary.status_summary.is_empty());
    assert_eq!(summary.total_service_fee, 0.0);
    assert_eq!(summary.average_rating, 0.0);
}

#[test]
fn test_summary_fees_and_ratings() {
    let db = seeded_db(
        vec![
            tracking("1", "u1", "A", TrackingStatus::Delivered, 50.0),
            tracking("2", "u2", "B", TrackingStatus::Created, 100.0),
        ],
        vec![vote("u2", "1", 4), vote("u3", "1", 5)],
    );
    let summary = db.dashboard.summary().unwrap();
    assert_eq!(summary.total_trackings, 2);
    assert_eq!(summary.total_service_fee, 150.0);
    assert_eq!(summary.average_rating, 4.5);
}

#[test]
fn test_summary_is_global_and_tracks_writes() {
    let db = create_db();
    let a = db.trackings.create(&user("u1"), "A", 10.0).unwrap();
    let b = db.trackings.create(&user("u2"), "B", 5.5).unwrap();
    db.trackings.create(&user("u3"), "C", 0.0).unwrap();
    db.trackings
        .update(&user("u2"), &b.id, TrackingPatch::new().status(TrackingStatus::InTransit))
        .unwrap();
    db.votes.cast(&user("u1"), &a.id, 5).unwrap();
    db.votes.cast(&user("u2"), &a.id, 4).unwrap();
    db.votes.cast(&user("u3"), &b.id, 4).unwrap();

    let summary = db.dashboard.summary().unwrap();
    assert_eq!(summary.total_trackings, 3);
    assert_eq!(summary.count(TrackingStatus::Created), 2);
    assert_eq!(summary.count(TrackingStatus::InTransit), 1);
    assert_eq!(summary.count(TrackingStatus::Delivered), 0);
    assert_eq!(summary.total_service_fee, 15.5);
    // 13 / 3 = 4.333...
    assert_eq!(summary.average_rating, 4.3);
}

#[test]
fn test_summary_wire_shape() {
    let db = seeded_db(
        vec![
            tracking("1", "u1", "A", TrackingStatus::InTransit, 20.0),
            tracking("2", "u1", "B", TrackingStatus::Created, 30.0),
        ],
        vec![vote("u2", "1", 3)],
    );
    let json = serde_json::to_value(db.dashboard.summary().unwrap()).unwrap();
    assert_eq!(json["totalTrackings"], 2);
    assert_eq!(json["statusSummary"]["In Transit"], 1);
    assert_eq!(json["statusSummary"]["Created"], 1);
    assert_eq!(json["totalServiceFee"], 50.0);
    assert_eq!(json["averageRating"], 3.0);
}
