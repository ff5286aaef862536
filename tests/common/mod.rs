//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use catfacts::api::CatFactsClient;
use catfacts::config::ApiConfig;
use catfacts::store::FactStore;
use std::net::TcpListener;
use std::sync::Arc;

/// A port nothing is listening on (bound, then released).
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: Some(base_url.to_string()),
        connect_timeout_seconds: 2,
        request_timeout_seconds: Some(5),
        ..ApiConfig::default()
    }
}

pub fn client(base_url: &str) -> CatFactsClient {
    CatFactsClient::new(&api_config(base_url)).expect("Failed to build client")
}

pub fn store(base_url: &str) -> FactStore {
    FactStore::new(Arc::new(client(base_url)))
}

pub const TWO_FACTS: &str = r#"[
    {"id": 2, "fact": "Cats sleep a lot.", "created_at": "2024-07-13T10:00:00"},
    {"id": 1, "fact": "Cats purr.", "created_at": "2024-07-12T09:30:00"}
]"#;
