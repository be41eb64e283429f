//! spec2scenario - API E2E test scenario generator
//!
//! Transforms an OpenAPI specification into a declarative end-to-end test
//! scenario document, optionally capturing expected response bodies by
//! issuing live requests against a running API.

pub mod cli;
pub mod common;
pub mod overrides;
pub mod probe;
pub mod route;
pub mod scenario;
pub mod spec;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use overrides::OverrideStore;
pub use scenario::Scenario;
pub use spec::ApiSpec;
