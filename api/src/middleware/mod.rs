pub mod exception_handler;
pub mod request_context;

pub use exception_handler::*;
pub use request_context::*;
