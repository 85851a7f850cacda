use std::fmt;

use super::types::{LoginResponse, RegistrationData, UserProfile};

/// Errors surfaced by the backend collaborator.
///
/// `Rejected` covers any non-2xx response; the optional message is the
/// human-readable `message` field of the error body and is shown to the
/// user verbatim when present. `Network` covers everything that never
/// produced a response (unreachable host, timeout enforced by the
/// implementation).
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Rejected { status: u16, message: Option<String> },
}

impl ApiError {
    /// Message shown to the user, falling back to the provided default.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Network(_) => fallback,
            ApiError::Rejected { message, .. } => {
                message.as_deref().unwrap_or(fallback)
            }
        }
    }

    /// True for responses that indicate an invalid or expired token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(details) => write!(f, "network error: {}", details),
            ApiError::Rejected { status, message } => match message {
                Some(msg) => write!(f, "request rejected ({}): {}", status, msg),
                None => write!(f, "request rejected ({})", status),
            },
        }
    }
}

/// Contract of the portal backend as seen by the client engine.
///
/// Implementations live outside this crate (real HTTP client in the host,
/// mocks in tests). Every call is a suspension point in the client's
/// cooperative schedule; nothing here is retried or cancelled by the core.
pub trait PortalApi {
    /// POST /auth/login
    fn login(&self, login_field: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// POST /auth/register
    fn register(&self, data: &RegistrationData) -> Result<(), ApiError>;

    /// GET /auth/check-username. Returns true while the name is still available.
    fn check_username(&self, username: &str) -> Result<bool, ApiError>;

    /// GET /auth/check-email. Returns true while the address is still available.
    fn check_email(&self, email: &str) -> Result<bool, ApiError>;

    /// GET /profile with a bearer token
    fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;

    /// POST /profile/change-password with a bearer token
    fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let rejected = ApiError::Rejected {
            status: 400,
            message: Some("Username already exists".to_string()),
        };
        assert_eq!(rejected.user_message("fallback"), "Username already exists");

        let bare = ApiError::Rejected { status: 500, message: None };
        assert_eq!(bare.user_message("fallback"), "fallback");

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_unauthorized_detection() {
        let expired = ApiError::Rejected { status: 401, message: None };
        assert!(expired.is_unauthorized());

        let other = ApiError::Rejected { status: 403, message: None };
        assert!(!other.is_unauthorized());
        assert!(!ApiError::Network("down".to_string()).is_unauthorized());
    }
}
