use log::info;

use crate::modules::api::contract::PortalApi;
use crate::modules::api::types::RegistrationData;
use crate::modules::app::config::ClientConfig;
use crate::modules::app::dispatch::Action;
use crate::modules::session::manager::{
    ChangePasswordOutcome, LoginOutcome, RegisterOutcome, SessionManager,
};
use crate::modules::session::token_store::TokenStore;
use crate::modules::ui::confirm::ConfirmationDialog;
use crate::modules::ui::forms::SubmitControl;
use crate::modules::ui::modals::ModalController;
use crate::modules::ui::notifications::{NotificationCenter, ToastKind};
use crate::modules::validation::availability::{AvailabilityChecker, FieldKind};
use crate::modules::validation::checksum::format_taxpayer_id;
use crate::modules::validation::password::{score_password, StrengthReport};
use crate::{DELETE_ACCOUNT_MODAL, LOGIN_MODAL, REGISTER_MODAL};

const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

/// Data accompanying a dispatched action.
///
/// Mirrors what the original form handlers read out of the DOM at event
/// time: nothing for plain clicks, the field text for input events, the
/// collected form for submits.
pub enum Payload<'a> {
    None,
    Value(&'a str),
    Credentials {
        login_field: &'a str,
        password: &'a str,
    },
    Registration(&'a RegistrationData),
    PasswordChange {
        current: &'a str,
        new: &'a str,
        confirm: &'a str,
    },
}

/// The one context object of the client, built once per page load.
///
/// Everything that used to hang off a page-wide singleton lives here
/// and is reached through explicit borrows: the session, the toast
/// queue, the modal stack, the per-field availability checkers, and the
/// submit-button states. The host drives it with `apply` for events and
/// `tick` for the passage of time.
pub struct AppContext {
    config: ClientConfig,
    api: Box<dyn PortalApi>,
    pub session: SessionManager,
    pub notifications: NotificationCenter,
    pub modals: ModalController,
    pub username_checker: AvailabilityChecker,
    pub email_checker: AvailabilityChecker,
    login_submit: SubmitControl,
    register_submit: SubmitControl,
    change_password_submit: SubmitControl,
    delete_confirmation: ConfirmationDialog<()>,
    cpf_display: String,
    password_strength: StrengthReport,
}

impl AppContext {
    /// Wire up the client and resolve any persisted session.
    pub fn bootstrap(
        config: ClientConfig,
        api: Box<dyn PortalApi>,
        store: TokenStore,
        now_ms: u64,
    ) -> Self {
        info!("Bootstrapping client against {}", config.api_base_url);

        let mut context = Self {
            session: SessionManager::new(store),
            notifications: NotificationCenter::with_settings(
                config.toast_duration_ms,
                config.max_active_toasts,
            ),
            modals: ModalController::new(),
            username_checker: AvailabilityChecker::new(
                FieldKind::Username,
                config.debounce_wait_ms,
            ),
            email_checker: AvailabilityChecker::new(FieldKind::Email, config.debounce_wait_ms),
            login_submit: SubmitControl::new("Sign in", "Signing in...", config.request_timeout_ms),
            register_submit: SubmitControl::new(
                "Create account",
                "Creating account...",
                config.request_timeout_ms,
            ),
            change_password_submit: SubmitControl::new(
                "Change password",
                "Changing...",
                config.request_timeout_ms,
            ),
            delete_confirmation: ConfirmationDialog::new(DELETE_ACCOUNT_MODAL),
            cpf_display: String::new(),
            password_strength: score_password(""),
            config,
            api,
        };

        // A persisted token starts the session in ValidatingToken;
        // resolve it before the first frame renders
        context
            .session
            .validate_token(context.api.as_ref(), &mut context.notifications, now_ms);

        context
    }

    /// Dispatch one resolved UI action.
    pub fn apply(&mut self, action: Action, payload: &Payload<'_>, now_ms: u64) {
        match (action, payload) {
            (Action::OpenLoginModal, _) => self.modals.open(LOGIN_MODAL),
            (Action::OpenRegisterModal, _) => self.modals.open(REGISTER_MODAL),
            (Action::SwitchToRegister, _) => {
                self.modals.close(LOGIN_MODAL);
                self.modals.open(REGISTER_MODAL);
            }
            (Action::SwitchToLogin, _) => {
                self.modals.close(REGISTER_MODAL);
                self.modals.open(LOGIN_MODAL);
            }
            (Action::Logout, _) => self.session.logout(&mut self.notifications, now_ms),
            (Action::SubmitLogin, Payload::Credentials { login_field, password }) => {
                self.handle_login_submit(login_field, password, now_ms);
            }
            (Action::SubmitRegister, Payload::Registration(data)) => {
                self.handle_register_submit(data, now_ms);
            }
            (Action::SubmitPasswordChange, Payload::PasswordChange { current, new, confirm }) => {
                self.handle_password_change(current, new, confirm, now_ms);
            }
            (Action::UsernameChanged, Payload::Value(value)) => {
                self.username_checker.input_changed(value, now_ms);
            }
            (Action::UsernameBlurred, Payload::Value(value)) => {
                self.username_checker.blur(value, self.api.as_ref());
            }
            (Action::EmailChanged, Payload::Value(value)) => {
                self.email_checker.input_changed(value, now_ms);
            }
            (Action::EmailBlurred, Payload::Value(value)) => {
                self.email_checker.blur(value, self.api.as_ref());
            }
            (Action::TaxpayerIdChanged, Payload::Value(value)) => {
                self.cpf_display = format_taxpayer_id(value);
            }
            (Action::NewPasswordChanged, Payload::Value(value)) => {
                self.password_strength = score_password(value);
            }
            (Action::RequestAccountDeletion, _) => {
                self.delete_confirmation.request((), &mut self.modals);
            }
            (Action::ConfirmAccountDeletion, _) => {
                if self.delete_confirmation.confirm(&mut self.modals).is_some() {
                    self.notifications.show(
                        "Your account has been deleted",
                        ToastKind::Success,
                        now_ms,
                    );
                    self.session.logout(&mut self.notifications, now_ms);
                }
            }
            (Action::CancelAccountDeletion, _) => {
                self.delete_confirmation.cancel(&mut self.modals);
            }
            // An action arriving with the wrong payload shape is a
            // wiring bug in the host; drop it rather than guess
            _ => log::warn!("Dropped action {:?}: payload mismatch", action),
        }
    }

    /// Advance everything time-driven: debounced availability checks,
    /// toast lifecycles, and submit-button timeouts.
    pub fn tick(&mut self, now_ms: u64) {
        // The checkers keep their own `result()` current; the returned
        // delivery only matters to callers that render immediately
        let _ = self.username_checker.poll(now_ms, self.api.as_ref());
        let _ = self.email_checker.poll(now_ms, self.api.as_ref());
        self.notifications.tick(now_ms);

        if self.login_submit.tick(now_ms) {
            self.notifications.show(TIMEOUT_MESSAGE, ToastKind::Error, now_ms);
        }
        if self.register_submit.tick(now_ms) {
            self.notifications.show(TIMEOUT_MESSAGE, ToastKind::Error, now_ms);
        }
        if self.change_password_submit.tick(now_ms) {
            self.notifications.show(TIMEOUT_MESSAGE, ToastKind::Error, now_ms);
        }
    }

    /// Busy-guarded login submit. Returns `None` when a submit is
    /// already in flight and the event is ignored.
    pub fn handle_login_submit(
        &mut self,
        login_field: &str,
        password: &str,
        now_ms: u64,
    ) -> Option<LoginOutcome> {
        if !self.login_submit.begin(now_ms) {
            return None;
        }

        let outcome = self.session.login(
            login_field,
            password,
            self.api.as_ref(),
            &mut self.notifications,
            &mut self.modals,
            now_ms,
        );

        // Restore runs on every outcome so the button never sticks
        self.login_submit.restore();
        Some(outcome)
    }

    /// Busy-guarded registration submit.
    pub fn handle_register_submit(
        &mut self,
        data: &RegistrationData,
        now_ms: u64,
    ) -> Option<RegisterOutcome> {
        if !self.register_submit.begin(now_ms) {
            return None;
        }

        let outcome = self.session.register(
            data,
            self.api.as_ref(),
            &mut self.notifications,
            &mut self.modals,
            now_ms,
        );

        self.register_submit.restore();
        Some(outcome)
    }

    /// Busy-guarded password change submit.
    pub fn handle_password_change(
        &mut self,
        current: &str,
        new: &str,
        confirm: &str,
        now_ms: u64,
    ) -> Option<ChangePasswordOutcome> {
        if !self.change_password_submit.begin(now_ms) {
            return None;
        }

        let outcome = self.session.change_password(
            current,
            new,
            confirm,
            self.api.as_ref(),
            &mut self.notifications,
            &mut self.modals,
            now_ms,
        );

        self.change_password_submit.restore();
        Some(outcome)
    }

    // Read-side accessors for the rendering layer

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn login_submit(&self) -> &SubmitControl {
        &self.login_submit
    }

    pub fn register_submit(&self) -> &SubmitControl {
        &self.register_submit
    }

    pub fn change_password_submit(&self) -> &SubmitControl {
        &self.change_password_submit
    }

    /// Display text of the CPF field after reformatting.
    pub fn cpf_display(&self) -> &str {
        &self.cpf_display
    }

    /// Strength of the password currently typed into the change form.
    pub fn password_strength(&self) -> &StrengthReport {
        &self.password_strength
    }

    pub fn deletion_pending(&self) -> bool {
        self.delete_confirmation.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::api::contract::ApiError;
    use crate::modules::api::types::{LoginResponse, UserProfile};
    use crate::modules::session::manager::SessionState;
    use crate::modules::ui::notifications::ToastState;
    use crate::modules::validation::availability::FieldStatus;
    use crate::REQUEST_TIMEOUT_MS;
    use tempfile::tempdir;

    /// Always-happy backend collaborator; flow failures are covered by
    /// the session manager's own tests
    struct MockPortal;

    fn profile() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            username: "joao_silva".to_string(),
            full_name: "João Silva Santos".to_string(),
            email: "joao.silva@example.com".to_string(),
            profile_picture: None,
        }
    }

    impl PortalApi for MockPortal {
        fn login(&self, _: &str, _: &str) -> Result<LoginResponse, ApiError> {
            Ok(LoginResponse {
                access_token: "t1".to_string(),
                user: profile(),
            })
        }

        fn register(&self, _: &RegistrationData) -> Result<(), ApiError> {
            Ok(())
        }

        fn check_username(&self, _: &str) -> Result<bool, ApiError> {
            Ok(true)
        }

        fn check_email(&self, _: &str) -> Result<bool, ApiError> {
            Ok(true)
        }

        fn fetch_profile(&self, _: &str) -> Result<UserProfile, ApiError> {
            Ok(profile())
        }

        fn change_password(&self, _: &str, _: &str, _: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn fresh_context(dir: &tempfile::TempDir) -> AppContext {
        AppContext::bootstrap(
            ClientConfig::default(),
            Box::new(MockPortal),
            TokenStore::with_path(dir.path().join("token.json")),
            0,
        )
    }

    #[test]
    fn test_bootstrap_without_token_is_logged_out() {
        let dir = tempdir().unwrap();
        let context = fresh_context(&dir);

        assert_eq!(context.session.state(), SessionState::LoggedOut);
        assert!(context.notifications.is_empty());
        assert!(!context.modals.scroll_locked());
    }

    #[test]
    fn test_bootstrap_resumes_persisted_session() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("token.json");
        TokenStore::with_path(&store_path).save("t1").unwrap();

        let context = AppContext::bootstrap(
            ClientConfig::default(),
            Box::new(MockPortal),
            TokenStore::with_path(&store_path),
            0,
        );

        assert_eq!(context.session.state(), SessionState::LoggedIn);
        assert!(context.session.is_authenticated());
    }

    #[test]
    fn test_modal_actions() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);

        context.apply(Action::OpenLoginModal, &Payload::None, 0);
        assert!(context.modals.is_open(LOGIN_MODAL));

        context.apply(Action::SwitchToRegister, &Payload::None, 10);
        assert!(!context.modals.is_open(LOGIN_MODAL));
        assert!(context.modals.is_open(REGISTER_MODAL));
        assert!(context.modals.scroll_locked());
    }

    #[test]
    fn test_login_through_dispatch() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);
        context.apply(Action::OpenLoginModal, &Payload::None, 0);

        context.apply(
            Action::SubmitLogin,
            &Payload::Credentials {
                login_field: "joao_silva",
                password: "secret123",
            },
            100,
        );

        assert_eq!(context.session.state(), SessionState::LoggedIn);
        assert!(!context.modals.is_open(LOGIN_MODAL));
        assert!(context
            .notifications
            .toasts()
            .iter()
            .any(|t| t.kind == ToastKind::Success));
        // The control is restored after the flow
        assert!(!context.login_submit().is_busy());
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);

        // Simulate a request still in flight
        assert!(context.login_submit.begin(0));

        let outcome = context.handle_login_submit("joao", "pw", 10);
        assert!(outcome.is_none());
        assert_eq!(context.session.state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_debounced_username_check_runs_on_tick() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);

        context.apply(Action::UsernameChanged, &Payload::Value("joao"), 0);
        context.tick(100);
        assert_eq!(context.username_checker.result().status, FieldStatus::Pending);

        context.tick(crate::DEBOUNCE_WAIT_MS);
        assert_eq!(context.username_checker.result().status, FieldStatus::Valid);
    }

    #[test]
    fn test_cpf_input_is_reformatted() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);

        context.apply(Action::TaxpayerIdChanged, &Payload::Value("11144477735"), 0);
        assert_eq!(context.cpf_display(), "111.444.777-35");

        context.apply(Action::TaxpayerIdChanged, &Payload::Value("111444"), 10);
        assert_eq!(context.cpf_display(), "111444");
    }

    #[test]
    fn test_password_strength_follows_input() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);
        assert_eq!(context.password_strength().level, 0);

        context.apply(Action::NewPasswordChanged, &Payload::Value("Abcdefg1!"), 0);
        assert_eq!(context.password_strength().level, 5);
    }

    #[test]
    fn test_account_deletion_confirmation_flow() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);
        context.handle_login_submit("joao", "pw", 0);

        context.apply(Action::RequestAccountDeletion, &Payload::None, 100);
        assert!(context.deletion_pending());
        assert!(context.modals.is_open(DELETE_ACCOUNT_MODAL));

        // Backing out changes nothing
        context.apply(Action::CancelAccountDeletion, &Payload::None, 200);
        assert!(!context.deletion_pending());
        assert_eq!(context.session.state(), SessionState::LoggedIn);

        // Going through signs the user out
        context.apply(Action::RequestAccountDeletion, &Payload::None, 300);
        context.apply(Action::ConfirmAccountDeletion, &Payload::None, 400);
        assert!(!context.modals.is_open(DELETE_ACCOUNT_MODAL));
        assert_eq!(context.session.state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_stuck_submit_times_out_with_toast() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);

        // A host-driven request began but never completed
        assert!(context.login_submit.begin(0));

        context.tick(REQUEST_TIMEOUT_MS);
        assert!(!context.login_submit().is_busy());
        assert!(context
            .notifications
            .toasts()
            .iter()
            .any(|t| t.message == TIMEOUT_MESSAGE));
    }

    #[test]
    fn test_toast_settings_flow_from_config() {
        let dir = tempdir().unwrap();
        let config = ClientConfig {
            max_active_toasts: 1,
            ..ClientConfig::default()
        };
        let mut context = AppContext::bootstrap(
            config,
            Box::new(MockPortal),
            TokenStore::with_path(dir.path().join("token.json")),
            0,
        );

        // Two sign-out toasts under a cap of one: the first gives way
        context.apply(Action::Logout, &Payload::None, 0);
        context.apply(Action::Logout, &Payload::None, 10);

        let active = context
            .notifications
            .toasts()
            .iter()
            .filter(|t| matches!(t.state, ToastState::Entering | ToastState::Visible))
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_mismatched_payload_is_dropped() {
        let dir = tempdir().unwrap();
        let mut context = fresh_context(&dir);

        // Submit action without credentials: nothing happens
        context.apply(Action::SubmitLogin, &Payload::None, 0);
        assert_eq!(context.session.state(), SessionState::LoggedOut);
        assert!(context.notifications.is_empty());
    }
}
