//! Listing Tests
//!
//! - Search matches id OR name, case-insensitively
//! - Status filter runs after search
//! - Sorting is stable and reversed for desc
//! - Pagination reports the pre-slice total
//! - Rating is the first vote for the tracking, whoever asks

use crate::*;
use courier::prelude::*;

fn sample() -> Courier {
    seeded_db(
        vec![
            tracking("1", "u1", "Laptop", TrackingStatus::Delivered, 50.0),
            tracking("2", "u2", "Books", TrackingStatus::InTransit, 100.0),
            tracking("3", "u1", "Phone", TrackingStatus::Created, 25.0),
            tracking("10", "u3", "Lamp", TrackingStatus::Delivered, 100.0),
            tracking("11", "u2", "Bike", TrackingStatus::Canceled, 0.0),
        ],
        vec![vote("u2", "1", 4), vote("u3", "1", 2), vote("u1", "10", 5)],
    )
}

#[test]
fn test_list_without_parameters_keeps_store_order() {
    let db = sample();
    let page = db.trackings.list(TrackingQuery::new()).unwrap();
    assert_eq!(ids(&page), vec!["1", "2", "3", "10", "11"]);
    assert_eq!((page.page, page.limit, page.total), (1, 10, 5));
}

#[test]
fn test_search_id_or_name() {
    let db = sample();

    // "1" is in ids 1, 10, 11; no name contains it
    let page = db.trackings.list(TrackingQuery::new().search("1")).unwrap();
    assert_eq!(ids(&page), vec!["1", "10", "11"]);

    // "la" hits Laptop and Lamp by name, case-insensitively
    let page = db.trackings.list(TrackingQuery::new().search("LA")).unwrap();
    assert_eq!(ids(&page), vec!["1", "10"]);

    let page = db.trackings.list(TrackingQuery::new().search("zzz")).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_search_then_status() {
    let db = sample();
    let page = db
        .trackings
        .list(
            TrackingQuery::new()
                .search("1")
                .status(TrackingStatus::Delivered),
        )
        .unwrap();
    assert_eq!(ids(&page), vec!["1", "10"]);
    assert_eq!(page.total, 2);
}

#[test]
fn test_sort_by_fee_both_directions() {
    let db = sample();

    let asc = db
        .trackings
        .list(TrackingQuery::new().sort_by(SortField::ServiceFee, SortOrder::Asc))
        .unwrap();
    assert_eq!(ids(&asc), vec!["11", "3", "1", "2", "10"]);

    // Ties (2 and 10 at 100.0) keep store order in both directions
    let desc = db
        .trackings
        .list(TrackingQuery::new().sort_by(SortField::ServiceFee, SortOrder::Desc))
        .unwrap();
    assert_eq!(ids(&desc), vec!["2", "10", "1", "3", "11"]);
}

#[test]
fn test_sort_by_name_and_status() {
    let db = sample();

    let page = db
        .trackings
        .list(TrackingQuery::new().sort_by(SortField::Name, SortOrder::Asc))
        .unwrap();
    assert_eq!(ids(&page), vec!["11", "2", "10", "1", "3"]);

    let page = db
        .trackings
        .list(TrackingQuery::new().sort_by(SortField::Status, SortOrder::Asc))
        .unwrap();
    // Canceled, Created, Delivered, Delivered, In Transit
    assert_eq!(ids(&page), vec!["11", "3", "1", "10", "2"]);
}

#[test]
fn test_sort_by_id_compares_text() {
    let db = sample();
    let page = db
        .trackings
        .list(TrackingQuery::new().sort_by(SortField::Id, SortOrder::Desc))
        .unwrap();
    assert_eq!(ids(&page), vec!["3", "2", "11", "10", "1"]);

    let created = create_db();
    for n in 1..=10 {
        created
            .trackings
            .create(&user("u1"), &format!("Parcel {}", n), 1.0)
            .unwrap();
    }
    let page = created
        .trackings
        .list(TrackingQuery::new().sort_by(SortField::Id, SortOrder::Asc))
        .unwrap();
    assert_eq!(
        ids(&page),
        vec!["1", "10", "2", "3", "4", "5", "6", "7", "8", "9"]
    );
}

#[test]
fn test_pagination_slices_after_sort() {
    let db = sample();
    let query = TrackingQuery::new()
        .sort_by(SortField::Id, SortOrder::Asc)
        .limit(2);

    let p1 = db.trackings.list(query.clone().page(1)).unwrap();
    let p2 = db.trackings.list(query.clone().page(2)).unwrap();
    let p3 = db.trackings.list(query.clone().page(3)).unwrap();
    let p4 = db.trackings.list(query.page(4)).unwrap();

    assert_eq!(ids(&p1), vec!["1", "10"]);
    assert_eq!(ids(&p2), vec!["11", "2"]);
    assert_eq!(ids(&p3), vec!["3"]);
    assert!(p4.data.is_empty());
    for p in [&p1, &p2, &p3, &p4] {
        assert_eq!(p.total, 5);
        assert_eq!(p.limit, 2);
    }
    assert_eq!(p1.page_count(), 3);
}

#[test]
fn test_rating_join_uses_first_vote() {
    let db = sample();
    let page = db.trackings.list(TrackingQuery::new()).unwrap();
    let ratings: Vec<Option<u8>> = page
        .data
        .iter()
        .map(|v| v.rating.map(|r| r.value()))
        .collect();
    assert_eq!(ratings, vec![Some(4), None, None, Some(5), None]);
}

#[test]
fn test_statuses_in_first_seen_order() {
    let db = sample();
    assert_eq!(
        db.trackings.statuses().unwrap(),
        vec![
            TrackingStatus::Delivered,
            TrackingStatus::InTransit,
            TrackingStatus::Created,
            TrackingStatus::Canceled,
        ]
    );
    assert!(create_db().trackings.statuses().unwrap().is_empty());
}

#[test]
fn test_query_from_wire_json() {
    let db = sample();
    let query: TrackingQuery = serde_json::from_str(
        r#"{"search": "l", "status": "Delivered", "sortBy": "serviceFee", "order": "desc", "page": 1, "limit": 1}"#,
    )
    .unwrap();
    let page = db.trackings.list(query).unwrap();
    assert_eq!(ids(&page), vec!["10"]);
    assert_eq!(page.total, 2);

    let bad = serde_json::from_str::<TrackingQuery>(r#"{"status": "Lost"}"#);
    assert!(bad.is_err());
    let bad = serde_json::from_str::<TrackingQuery>(r#"{"sortBy": "weight"}"#);
    assert!(bad.is_err());
}
