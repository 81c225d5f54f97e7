//! Communication with the game server
//!
//! A failed request is logged and dropped; the client keeps whatever state
//! it had.

mod api;
mod error;
mod gateway;
mod transport;

pub use api::{ApiRequest, ApiResponse, GatewayEvent, HttpMethod};
pub use error::GatewayError;
pub use gateway::{FailurePolicy, SyncGateway};
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
pub(crate) use transport::scripted::ScriptedTransport;
