//! Identity Mock Common Types
//!
//! Wire types shared by the identity mock server and its Rust clients.
//! Field names follow the camelCase JSON contract of the endpoints.

pub mod request;
pub mod user;

pub use request::{
    AuthenticateRequest, Empty, ErrorBody, ErrorMessage, LookupQuery, LookupResponse,
    ProviderRequest,
};
pub use user::{NewUser, ProviderRecord, User};
