//! DTOs for the login call contract.
//!
//! # Design
//! The login form posts `Credentials` to `/login` and reads the token out of
//! `LoginResponse`. Storing the token and navigating afterwards belong to the
//! caller. The mock-server defines its own copies of these types; the
//! integration tests catch schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Path the login form posts to.
pub const LOGIN_PATH: &str = "/login";

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login reply. The server spells the field `jwtToken`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}
