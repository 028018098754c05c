//! `engine` crate — the activity registry and the invocation pass.

pub mod error;
pub mod registry;
pub mod invoker;

pub use error::EngineError;
pub use registry::ActivityRegistry;
pub use invoker::Invoker;

#[cfg(test)]
mod invoker_tests;
