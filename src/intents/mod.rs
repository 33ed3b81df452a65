//! # Intent Handling
//!
//! Predicate-routed handlers for launch, intent and session-end requests.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::HandlerContext;
pub use handler::RequestHandler;
pub use handlers::{create_all_handlers, default_registry};
pub use registry::{HandlerRegistry, RegistryBuilder};
