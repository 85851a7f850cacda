use serde::{Deserialize, Serialize};

/// Profile snapshot returned by the backend after login or token validation.
///
/// The session layer replaces this wholesale on every successful lookup and
/// never mutates individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

/// Successful response body of the login endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Payload of the registration endpoint.
///
/// Field names mirror the registration form; the composite validation in
/// `validation::registration` runs over this struct before it is ever sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RegistrationData {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub taxpayer_id: String,
    pub phone: String,
    pub city: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}
