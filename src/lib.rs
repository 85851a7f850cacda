// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{
    api,
    app,
    session,
    ui,
    utils,
    validation,
};

// Re-export commonly used types
pub use modules::api::contract::{ApiError, PortalApi};
pub use modules::app::context::AppContext;
pub use modules::session::manager::SessionManager;
pub use modules::ui::modals::ModalController;
pub use modules::ui::notifications::NotificationCenter;

// Constants
pub const TOKEN_FILE: &str = "session_token.json";
pub const CONFIG_FILE: &str = "client_config.json";
pub const DEBOUNCE_WAIT_MS: u64 = 500;
pub const TOAST_DEFAULT_DURATION_MS: u64 = 5_000;
pub const TOAST_ENTER_DELAY_MS: u64 = 100;
pub const TOAST_EXIT_DELAY_MS: u64 = 300;
pub const MAX_ACTIVE_TOASTS: usize = 5;
pub const REQUEST_TIMEOUT_MS: u64 = 15_000;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Well-known modal identifiers used by the session flows
pub const LOGIN_MODAL: &str = "login-modal";
pub const REGISTER_MODAL: &str = "register-modal";
pub const CHANGE_PASSWORD_MODAL: &str = "change-password-modal";
pub const DELETE_ACCOUNT_MODAL: &str = "delete-account-modal";
