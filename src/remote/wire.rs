use serde::{Deserialize, Serialize};

/// A user record as the remote service represents it.
///
/// Immutable from the client's point of view except through an explicit
/// update request; the avatar field is an opaque URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
}

/// One page of the users collection, with the authoritative page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    pub data: Vec<UserRecord>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
