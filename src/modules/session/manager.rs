use log::warn;

use crate::modules::api::contract::{ApiError, PortalApi};
use crate::modules::api::types::{RegistrationData, UserProfile};
use crate::modules::session::token_store::TokenStore;
use crate::modules::ui::modals::ModalController;
use crate::modules::ui::notifications::{NotificationCenter, ToastKind};
use crate::modules::utils::logging::log_auth_event;
use crate::modules::validation::registration::validate_registration;
use crate::{CHANGE_PASSWORD_MODAL, LOGIN_MODAL, MIN_PASSWORD_LENGTH, REGISTER_MODAL};

/// Authentication state of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    ValidatingToken,
    LoggedIn,
}

/// Result of a login attempt, for callers that branch on it.
#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    Success,
    MissingFields,
    Failed,
}

/// Result of a registration attempt.
#[derive(Debug, PartialEq)]
pub enum RegisterOutcome {
    Success,
    InvalidForm,
    Failed,
}

/// Result of a password change attempt.
#[derive(Debug, PartialEq)]
pub enum ChangePasswordOutcome {
    Success,
    NotLoggedIn,
    InvalidForm,
    Failed,
}

/// Owner of the session: token, profile snapshot, and the state machine
/// `LoggedOut / ValidatingToken / LoggedIn`.
///
/// This is the single source of truth for "is the user authenticated"
/// and the only writer of the persisted token. User feedback goes
/// through the notification center and modal controller passed into
/// each flow; the manager holds no UI state of its own.
pub struct SessionManager {
    state: SessionState,
    token: Option<String>,
    user: Option<UserProfile>,
    store: TokenStore,
}

impl SessionManager {
    /// Build the session from whatever token survived the last run.
    ///
    /// With a persisted token the manager starts in `ValidatingToken`
    /// and expects a `validate_token` call; without one it starts
    /// directly in `LoggedOut`.
    pub fn new(store: TokenStore) -> Self {
        match store.load() {
            Some(token) => Self {
                state: SessionState::ValidatingToken,
                token: Some(token),
                user: None,
                store,
            },
            None => Self {
                state: SessionState::LoggedOut,
                token: None,
                user: None,
                store,
            },
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Invariant: authenticated exactly when both token and profile are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Resolve the `ValidatingToken` startup state against the profile
    /// endpoint. Any failure (network, 401, malformed body) discards the
    /// token and falls back to `LoggedOut`; an expired session is not an
    /// error worth alarming the user about.
    pub fn validate_token(
        &mut self,
        api: &dyn PortalApi,
        notifications: &mut NotificationCenter,
        now_ms: u64,
    ) {
        if self.state != SessionState::ValidatingToken {
            return;
        }

        let token = match &self.token {
            Some(token) => token.clone(),
            None => {
                // Defensive: ValidatingToken without a token cannot validate
                self.state = SessionState::LoggedOut;
                return;
            }
        };

        match api.fetch_profile(&token) {
            Ok(profile) => {
                log_auth_event("token_validation", &profile.username, true, None);
                self.user = Some(profile);
                self.state = SessionState::LoggedIn;
            }
            Err(e) => {
                log_auth_event(
                    "token_validation",
                    "unknown",
                    false,
                    Some(&e.to_string()),
                );
                self.logout(notifications, now_ms);
            }
        }
    }

    /// Attempt to sign in with the given credentials.
    ///
    /// Success persists the token, stores the profile, closes the login
    /// modal, and queues a success toast. Failure queues an error toast
    /// carrying the server message when one is present. A login while
    /// already authenticated simply replaces the session.
    pub fn login(
        &mut self,
        login_field: &str,
        password: &str,
        api: &dyn PortalApi,
        notifications: &mut NotificationCenter,
        modals: &mut ModalController,
        now_ms: u64,
    ) -> LoginOutcome {
        if login_field.is_empty() || password.is_empty() {
            notifications.show("Please fill in all fields", ToastKind::Error, now_ms);
            return LoginOutcome::MissingFields;
        }

        match api.login(login_field, password) {
            Ok(response) => {
                if let Err(e) = self.store.save(&response.access_token) {
                    // The session still works for this run; it just will
                    // not survive a restart
                    warn!("Failed to persist session token: {}", e);
                }
                log_auth_event("login", login_field, true, None);

                self.token = Some(response.access_token);
                self.user = Some(response.user);
                self.state = SessionState::LoggedIn;

                modals.close(LOGIN_MODAL);
                notifications.show("Logged in successfully!", ToastKind::Success, now_ms);
                LoginOutcome::Success
            }
            Err(e) => {
                log_auth_event("login", login_field, false, Some(&e.to_string()));
                notifications.show(self.error_toast(&e, "Could not sign in"), ToastKind::Error, now_ms);
                LoginOutcome::Failed
            }
        }
    }

    /// Sign out locally: clear the token and profile, no network call.
    /// Always succeeds.
    pub fn logout(&mut self, notifications: &mut NotificationCenter, now_ms: u64) {
        if let Some(user) = &self.user {
            log_auth_event("logout", &user.username, true, None);
        }

        self.token = None;
        self.user = None;
        self.state = SessionState::LoggedOut;

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear persisted token: {}", e);
        }

        notifications.show("You have been signed out", ToastKind::Info, now_ms);
    }

    /// Register a new account.
    ///
    /// The composite local validation runs first and aborts with the
    /// first failing rule's message, without a network call. On success
    /// the register modal gives way to the login modal.
    pub fn register(
        &mut self,
        data: &RegistrationData,
        api: &dyn PortalApi,
        notifications: &mut NotificationCenter,
        modals: &mut ModalController,
        now_ms: u64,
    ) -> RegisterOutcome {
        if let Err(message) = validate_registration(data) {
            notifications.show(&message, ToastKind::Error, now_ms);
            return RegisterOutcome::InvalidForm;
        }

        match api.register(data) {
            Ok(()) => {
                log_auth_event("register", &data.username, true, None);
                modals.close(REGISTER_MODAL);
                modals.open(LOGIN_MODAL);
                notifications.show(
                    "Account created successfully! Sign in to continue.",
                    ToastKind::Success,
                    now_ms,
                );
                RegisterOutcome::Success
            }
            Err(e) => {
                log_auth_event("register", &data.username, false, Some(&e.to_string()));
                notifications.show(
                    self.error_toast(&e, "Could not create account"),
                    ToastKind::Error,
                    now_ms,
                );
                RegisterOutcome::Failed
            }
        }
    }

    /// Change the password of the signed-in user.
    pub fn change_password(
        &mut self,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
        api: &dyn PortalApi,
        notifications: &mut NotificationCenter,
        modals: &mut ModalController,
        now_ms: u64,
    ) -> ChangePasswordOutcome {
        let token = match (&self.token, self.state) {
            (Some(token), SessionState::LoggedIn) => token.clone(),
            _ => {
                warn!("Password change attempted without an authenticated session");
                return ChangePasswordOutcome::NotLoggedIn;
            }
        };

        if new_password != confirm_password {
            notifications.show("Passwords do not match", ToastKind::Error, now_ms);
            return ChangePasswordOutcome::InvalidForm;
        }

        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            notifications.show(
                "New password must be at least 6 characters",
                ToastKind::Error,
                now_ms,
            );
            return ChangePasswordOutcome::InvalidForm;
        }

        match api.change_password(&token, current_password, new_password) {
            Ok(()) => {
                log_auth_event("change_password", self.username_for_log(), true, None);
                modals.close(CHANGE_PASSWORD_MODAL);
                notifications.show("Password changed successfully!", ToastKind::Success, now_ms);
                ChangePasswordOutcome::Success
            }
            Err(e) => {
                log_auth_event(
                    "change_password",
                    self.username_for_log(),
                    false,
                    Some(&e.to_string()),
                );
                notifications.show(
                    self.error_toast(&e, "Could not change password"),
                    ToastKind::Error,
                    now_ms,
                );
                ChangePasswordOutcome::Failed
            }
        }
    }

    /// Pick the toast text for a failed collaborator call: the server's
    /// own message when it sent one, a connection hint for transport
    /// failures, the flow's fallback otherwise.
    fn error_toast<'a>(&self, error: &'a ApiError, fallback: &'a str) -> &'a str {
        match error {
            ApiError::Network(_) => "Connection error. Please try again.",
            ApiError::Rejected { .. } => error.user_message(fallback),
        }
    }

    fn username_for_log(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("unknown")
    }
}
