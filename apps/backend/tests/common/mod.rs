//! Common test utilities and fixtures for integration tests.
//!
//! The converter keeps no state, so tests run fully in memory: fixtures
//! assemble real docx containers and the server is built straight from
//! the application router.

pub mod fixtures;

use axum_test::TestServer;

use cbt_converter_backend::app;

/// Spin up a test server over the application router.
pub fn test_server() -> TestServer {
    TestServer::new(app()).expect("failed to start test server")
}
