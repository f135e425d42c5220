//! Test doubles for the gateway and auth seams: in-memory gateways that
//! emulate server-side id assignment, with failure injection and call
//! tracking.

mod auth;
mod gateway;

pub use auth::MockAuthApi;
pub use gateway::{MockCollectionGateway, MockSingletonGateway};
