//! Concurrency Tests
//!
//! Racing writers must not break the vote uniqueness or the Created-only
//! edit rule:
//! - Same user voting the same tracking from many threads: one wins
//! - Many users voting the same tracking: all win
//! - Status change racing with edits: no edit lands after the lock
//! - Concurrent creates get distinct ids

use crate::*;
use courier::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;

fn race<T, F>(db: &Arc<Courier>, f: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(&Courier, usize) -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(THREADS));
    let f = Arc::new(f);
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let db = Arc::clone(db);
            let barrier = Arc::clone(&barrier);
            let f = Arc::clone(&f);
            thread::spawn(move || {
                barrier.wait();
                f(&db, i)
            })
        })
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_duplicate_votes_race_one_winner() {
    let db = Arc::new(seeded_db(
        vec![tracking("1", "u1", "A", TrackingStatus::Delivered, 1.0)],
        vec![],
    ));

    let results = race(&db, |db, i| {
        db.votes
            .cast(&user("u2"), &tid("1"), (i % 5 + 1) as i32)
    });

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| e.is_conflict()));
    assert_eq!(db.votes.all().unwrap().len(), 1);
}

#[test]
fn test_distinct_voters_all_recorded() {
    let db = Arc::new(seeded_db(
        vec![tracking("1", "u1", "A", TrackingStatus::Delivered, 1.0)],
        vec![],
    ));

    let results = race(&db, |db, i| {
        db.votes.cast(&user(&format!("voter-{}", i)), &tid("1"), 5)
    });

    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(db.votes.all().unwrap().len(), THREADS);
    assert_eq!(db.dashboard.summary().unwrap().average_rating, 5.0);
}

#[test]
fn test_edits_racing_status_change() {
    let db = Arc::new(seeded_db(
        vec![tracking("1", "u1", "A", TrackingStatus::Created, 1.0)],
        vec![],
    ));

    // Thread 0 ships the tracking; everyone else renames it
    let results = race(&db, |db, i| {
        let patch = if i == 0 {
            TrackingPatch::new().status(TrackingStatus::InTransit)
        } else {
            TrackingPatch::new().name(format!("edit-{}", i))
        };
        db.trackings.update(&user("u1"), &tid("1"), patch)
    });

    assert!(results[0].is_ok());
    let final_state = db.trackings.get(&tid("1")).unwrap().unwrap();
    assert_eq!(final_state.status, TrackingStatus::InTransit);

    // Every successful rename saw Created, so it applied before the ship
    let shipped_name = results[0].as_ref().unwrap().name.clone();
    assert_eq!(final_state.name, shipped_name);
    for r in &results[1..] {
        match r {
            Ok(t) => assert_eq!(t.status, TrackingStatus::Created),
            Err(e) => assert!(e.is_conflict()),
        }
    }
}

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let db = Arc::new(create_db());

    let results = race(&db, |db, i| {
        db.trackings
            .create(&user("u1"), &format!("pkg-{}", i), 1.0)
            .unwrap()
            .id
    });

    let unique: HashSet<_> = results.iter().map(|id| id.numeric().unwrap()).collect();
    assert_eq!(unique.len(), THREADS);
    assert_eq!(unique.iter().max(), Some(&(THREADS as u64)));
    assert_eq!(db.trackings.all().unwrap().len(), THREADS);
}
