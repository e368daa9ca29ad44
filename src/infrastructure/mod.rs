//! Infrastructure layer: REST clients and DI container
//!
//! This layer implements the backend API traits over HTTP and wires up the store.

pub mod atlas;
pub mod di;
pub mod digest;
pub mod error;
pub mod http;
pub mod opsmngr;
pub mod traits;

pub use error::{InfraError, InfraResult};
