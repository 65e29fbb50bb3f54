//! Value objects

pub mod default_policy;
pub mod request_context;

pub use default_policy::DefaultPolicy;
pub use request_context::RequestContext;
