// UI-facing state machines: toasts, modals, submit buttons, confirmations
pub mod confirm;
pub mod forms;
pub mod modals;
pub mod notifications;

pub use confirm::ConfirmationDialog;
pub use forms::SubmitControl;
pub use modals::ModalController;
pub use notifications::{NotificationCenter, Toast, ToastKind, ToastState};
