use lazy_static::lazy_static;

/// Kind of UI event a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    Blur,
    Submit,
}

/// Everything the core knows how to do in response to a UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenLoginModal,
    OpenRegisterModal,
    SwitchToRegister,
    SwitchToLogin,
    SubmitLogin,
    SubmitRegister,
    SubmitPasswordChange,
    UsernameChanged,
    UsernameBlurred,
    EmailChanged,
    EmailBlurred,
    TaxpayerIdChanged,
    NewPasswordChanged,
    Logout,
    RequestAccountDeletion,
    ConfirmAccountDeletion,
    CancelAccountDeletion,
}

/// One row of the binding table: event kind + target identifier → action.
pub struct Binding {
    pub kind: EventKind,
    pub target: &'static str,
    pub action: Action,
}

const fn binding(kind: EventKind, target: &'static str, action: Action) -> Binding {
    Binding { kind, target, action }
}

lazy_static! {
    /// Declarative replacement for per-element listener wiring: the
    /// host's UI layer reports (kind, target id) pairs and the core
    /// resolves them here, so session and validation logic never
    /// touches a rendering API. Target identifiers mirror the portal's
    /// element ids.
    pub static ref BINDINGS: Vec<Binding> = vec![
        binding(EventKind::Click, "login-btn", Action::OpenLoginModal),
        binding(EventKind::Click, "hero-login-btn", Action::OpenLoginModal),
        binding(EventKind::Click, "register-btn", Action::OpenRegisterModal),
        binding(EventKind::Click, "hero-register-btn", Action::OpenRegisterModal),
        binding(EventKind::Click, "switch-to-register", Action::SwitchToRegister),
        binding(EventKind::Click, "switch-to-login", Action::SwitchToLogin),
        binding(EventKind::Click, "logout-btn", Action::Logout),
        binding(EventKind::Submit, "login-form", Action::SubmitLogin),
        binding(EventKind::Submit, "register-form", Action::SubmitRegister),
        binding(EventKind::Submit, "change-password-form", Action::SubmitPasswordChange),
        binding(EventKind::Input, "register-username", Action::UsernameChanged),
        binding(EventKind::Blur, "register-username", Action::UsernameBlurred),
        binding(EventKind::Input, "register-email", Action::EmailChanged),
        binding(EventKind::Blur, "register-email", Action::EmailBlurred),
        binding(EventKind::Input, "register-cpf", Action::TaxpayerIdChanged),
        binding(EventKind::Input, "new-password", Action::NewPasswordChanged),
        binding(EventKind::Click, "delete-account-btn", Action::RequestAccountDeletion),
        binding(EventKind::Click, "confirm-delete-btn", Action::ConfirmAccountDeletion),
        binding(EventKind::Click, "cancel-delete-btn", Action::CancelAccountDeletion),
    ];
}

/// Resolve an event against the binding table.
pub fn action_for(kind: EventKind, target: &str) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|b| b.kind == kind && b.target == target)
        .map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bindings_resolve() {
        assert_eq!(
            action_for(EventKind::Click, "login-btn"),
            Some(Action::OpenLoginModal)
        );
        // Hero buttons share the action of their navbar twins
        assert_eq!(
            action_for(EventKind::Click, "hero-login-btn"),
            Some(Action::OpenLoginModal)
        );
        assert_eq!(
            action_for(EventKind::Submit, "register-form"),
            Some(Action::SubmitRegister)
        );
    }

    #[test]
    fn test_kind_disambiguates_target() {
        // Same element id, different event kinds, different actions
        assert_eq!(
            action_for(EventKind::Input, "register-username"),
            Some(Action::UsernameChanged)
        );
        assert_eq!(
            action_for(EventKind::Blur, "register-username"),
            Some(Action::UsernameBlurred)
        );
    }

    #[test]
    fn test_unknown_events_resolve_to_nothing() {
        assert_eq!(action_for(EventKind::Click, "unknown-element"), None);
        // Known target, wrong kind
        assert_eq!(action_for(EventKind::Blur, "login-btn"), None);
    }
}
