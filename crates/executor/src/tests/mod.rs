
use std::sync::Arc;

use courier_engine::{Engine, EngineConfig};
use courier_storage::Fixture;

const FIXTURE: &str = r#"{
  "trackings": [
    {"id": "1", "userId": "u1", "name": "Laptop", "status": "Delivered",
     "orderTime": "2025-01-01T08:00:00Z", "completedTime": "2025-01-03T10:00:00Z", "serviceFee": 50},
    {"id": "2", "userId": "u2", "name": "Books", "status": "In Transit",
     "orderTime": "2025-01-02T08:00:00Z", "completedTime": "", "serviceFee": 100},
    {"id": "3", "userId": "u1", "name": "Phone", "status": "Created",
     "orderTime": "2025-01-03T08:00:00Z", "completedTime": "", "serviceFee": 25}
  ],
  "votes": [
    {"id": "v1", "userId": "u2", "trackingId": "1", "trackingName": "Laptop",
     "rating": 4, "createdAt": "2025-01-04T09:00:00Z"}
  ]
}"#;

/// Engine seeded with three trackings and one vote
fn seeded_engine() -> Arc<Engine> {
    let store = Fixture::from_json(FIXTURE).unwrap().into_store().unwrap();
    Arc::new(Engine::open(Arc::new(store), EngineConfig::default()).unwrap())
}
