//! Shared fixtures for integration tests

#![allow(dead_code)]

use serde_json::json;
use strata_value::Value;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness; `RUST_LOG=trace` shows misses
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A person record as it might arrive from a decoded payload
pub fn person() -> Value {
    Value::from(json!({
        "name": "John",
        "age": 32,
        "contacts": {
            "home": 12345,
            "email": "johndoe@gmail.com",
            "address": {
                "post_code": "SW1A",
                "geo_location": ["51.529011463529635", "-0.1098365614770662"]
            }
        }
    }))
}

/// Updates for [`person`], overlapping at several depths
pub fn person_update() -> Value {
    Value::from(json!({
        "age": 30,
        "male": true,
        "contacts": {
            "office": 12345,
            "fax": { "uk": "+44-208-1234567" },
            "address": {
                "post_code": "SW3",
                "street": "10 Downing Street",
                "geo_location": ["51.529011463529636", "-0.1098365614770662"]
            }
        }
    }))
}
