/*
 * RDW open data client - typed access to the Dutch vehicle registration datasets
 */

// Internal modules
mod client;
pub mod models;
mod apis;
mod error;
mod auth;

// Re-export public types and interfaces
pub use client::{RdwClient, APP_TOKEN_ENV, DEFAULT_BASE_URL};
pub use models::*;
pub use apis::*;
pub use error::{ApiError, ErrorKind, RdwError, RdwResult};
pub use auth::{AppToken, Authentication, APP_TOKEN_HEADER};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        RdwClient,
        AppToken,
        ApiError, ErrorKind, RdwError, RdwResult,
        RegisteredVehicle, RegisteredVehiclesListOptions, ListOptions,
    };
}
