//! Builders shared by the engine unit tests.

use chrono::{Duration, TimeZone, Utc};
use courier_core::{
    Rating, Tracking, TrackingId, TrackingStatus, UserId, Vote, VoteId,
};
use courier_storage::{InMemoryStore, RecordStore};
use std::sync::Arc;

pub fn tracking(id: &str, user: &str, status: TrackingStatus, fee: f64) -> Tracking {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    Tracking {
        id: TrackingId::from(id),
        user_id: UserId::from(user),
        name: format!("Parcel {}", id),
        status,
        order_time: base + Duration::minutes(id.parse::<i64>().unwrap_or(0)),
        completed_time: None,
        service_fee: fee,
    }
}

pub fn vote(user: &str, tracking: &str, rating: u8) -> Vote {
    Vote {
        id: VoteId::generate(),
        user_id: UserId::from(user),
        tracking_id: TrackingId::from(tracking),
        tracking_name: format!("Parcel {}", tracking),
        rating: Rating::new(rating).unwrap(),
        created_at: Utc::now(),
    }
}

pub fn store_with(trackings: Vec<Tracking>, votes: Vec<Vote>) -> Arc<dyn RecordStore> {
    Arc::new(InMemoryStore::with_records(trackings, votes).unwrap())
}
