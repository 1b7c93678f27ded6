//! Property Tests
//!
//! Invariants checked over random stores and queries:
//! - `data.len() <= limit` and `total` is the pre-slice filtered count
//! - Search is case-insensitive OR over id and name
//! - Sorting keeps ties in store order
//! - Ids keep counting from the largest numeric id

use crate::*;
use courier::prelude::*;
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = TrackingStatus> {
    prop::sample::select(TrackingStatus::ALL.to_vec())
}

fn field_strategy() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

/// Up to 30 trackings with small fee and name alphabets so ties are common
fn store_strategy() -> impl Strategy<Value = Vec<Tracking>> {
    prop::collection::vec(
        ("[a-cA-C]{0,4}", status_strategy(), 0u8..4, "u[1-3]"),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, status, fee, owner))| {
                tracking(&(i + 1).to_string(), &owner, &name, status, f64::from(fee) * 10.0)
            })
            .collect()
    })
}

fn expected_matches(trackings: &[Tracking], search: Option<&str>, status: Option<TrackingStatus>) -> Vec<Tracking> {
    trackings
        .iter()
        .filter(|t| match search {
            Some(s) => {
                let s = s.to_lowercase();
                t.id.as_str().to_lowercase().contains(&s) || t.name.to_lowercase().contains(&s)
            }
            None => true,
        })
        .filter(|t| status.map_or(true, |st| t.status == st))
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pagination_consistency(
        trackings in store_strategy(),
        search in proptest::option::of("[a-cA-C1-3]{1,2}"),
        status in proptest::option::of(status_strategy()),
        page in 1u32..6,
        limit in 1u32..8,
    ) {
        let expected = expected_matches(&trackings, search.as_deref(), status);
        let db = seeded_db(trackings, vec![]);

        let mut query = TrackingQuery::new().page(page).limit(limit);
        if let Some(s) = &search {
            query = query.search(s.as_str());
        }
        if let Some(st) = status {
            query = query.status(st);
        }
        let result = db.trackings.list(query).unwrap();

        prop_assert!(result.data.len() <= limit as usize);
        prop_assert_eq!(result.total, expected.len());

        let start = ((page - 1) * limit) as usize;
        let want: Vec<_> = expected.iter().skip(start).take(limit as usize).map(|t| t.id.clone()).collect();
        let got: Vec<_> = result.data.iter().map(|v| v.tracking.id.clone()).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn prop_search_is_or_over_id_and_name(
        trackings in store_strategy(),
        search in "[a-cA-C1-3]{1,2}",
    ) {
        let db = seeded_db(trackings.clone(), vec![]);
        let limit = trackings.len().max(1) as u32;
        let result = db.trackings.list(TrackingQuery::new().search(search.as_str()).limit(limit)).unwrap();

        let needle = search.to_lowercase();
        let hit: Vec<_> = result.data.iter().map(|v| v.tracking.id.clone()).collect();
        for t in &trackings {
            let matches = t.id.as_str().to_lowercase().contains(&needle)
                || t.name.to_lowercase().contains(&needle);
            prop_assert_eq!(hit.contains(&t.id), matches, "tracking {} / {:?}", t.id, t.name);
        }
    }

    #[test]
    fn prop_sort_is_stable(
        trackings in store_strategy(),
        field in field_strategy(),
        desc in any::<bool>(),
    ) {
        let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
        let db = seeded_db(trackings.clone(), vec![]);
        let limit = trackings.len().max(1) as u32;
        let result = db.trackings.list(TrackingQuery::new().sort_by(field, order).limit(limit)).unwrap();
        let sorted: Vec<&Tracking> = result.data.iter().map(|v| &v.tracking).collect();
        prop_assert_eq!(sorted.len(), trackings.len());

        let position = |t: &Tracking| trackings.iter().position(|x| x.id == t.id).unwrap();
        for pair in sorted.windows(2) {
            let ord = courier_engine::compare_by(field, pair[0], pair[1]);
            let ord = if desc { ord.reverse() } else { ord };
            prop_assert_ne!(ord, std::cmp::Ordering::Greater);
            if ord == std::cmp::Ordering::Equal {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    #[test]
    fn prop_ids_continue_after_max(
        existing in prop::collection::btree_set(1u64..500, 0..10),
        creates in 1usize..5,
    ) {
        let trackings = existing
            .iter()
            .map(|n| tracking(&n.to_string(), "u1", "T", TrackingStatus::Created, 1.0))
            .collect();
        let db = seeded_db(trackings, vec![]);
        let max = existing.iter().max().copied().unwrap_or(0);

        for k in 1..=creates {
            let created = db.trackings.create(&user("u1"), "New", 1.0).unwrap();
            prop_assert_eq!(created.id.numeric(), Some(max + k as u64));
        }
    }
}
