use log::debug;

/// Stack of open modal identifiers plus the shared page-scroll lock.
///
/// Insertion order is z-order. Opening the same id twice pushes a second
/// entry; closing removes the most recent entry with that id, which is
/// not necessarily the top of the stack. The scroll lock is not stored
/// anywhere: it is active exactly while the stack is non-empty, so the
/// invariant cannot drift.
pub struct ModalController {
    stack: Vec<String>,
}

impl ModalController {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack and lock page scroll.
    pub fn open(&mut self, modal_id: &str) {
        debug!("Opening modal: {}", modal_id);
        self.stack.push(modal_id.to_string());
    }

    /// Close the most recently opened instance of `modal_id`.
    /// Closing a modal that is not open is a no-op.
    pub fn close(&mut self, modal_id: &str) {
        if let Some(pos) = self.stack.iter().rposition(|id| id == modal_id) {
            debug!("Closing modal: {}", modal_id);
            self.stack.remove(pos);
        }
    }

    /// A click on a modal's backdrop overlay closes that modal.
    pub fn backdrop_clicked(&mut self, modal_id: &str) {
        self.close(modal_id);
    }

    pub fn is_open(&self, modal_id: &str) -> bool {
        self.stack.iter().any(|id| id == modal_id)
    }

    /// Topmost modal, if any.
    pub fn top(&self) -> Option<&str> {
        self.stack.last().map(|s| s.as_str())
    }

    /// Page scroll is suppressed while any modal is open.
    pub fn scroll_locked(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_and_scroll_lock() {
        let mut modals = ModalController::new();
        assert!(!modals.scroll_locked());

        modals.open("a");
        modals.open("b");
        assert!(modals.scroll_locked());
        assert_eq!(modals.top(), Some("b"));

        // Closing by id, not LIFO: "b" stays open
        modals.close("a");
        assert!(modals.is_open("b"));
        assert!(!modals.is_open("a"));
        assert!(modals.scroll_locked());

        // Last modal gone: scroll unlocks
        modals.close("b");
        assert!(!modals.scroll_locked());
    }

    #[test]
    fn test_duplicate_entries() {
        let mut modals = ModalController::new();
        modals.open("login-modal");
        modals.open("login-modal");
        assert_eq!(modals.open_count(), 2);

        // One close removes one entry; the modal is still open
        modals.close("login-modal");
        assert!(modals.is_open("login-modal"));
        assert!(modals.scroll_locked());

        modals.close("login-modal");
        assert!(!modals.is_open("login-modal"));
        assert!(!modals.scroll_locked());
    }

    #[test]
    fn test_close_removes_most_recent_match() {
        let mut modals = ModalController::new();
        modals.open("a");
        modals.open("b");
        modals.open("a");

        modals.close("a");
        // The earlier "a" (bottom of the stack) survives
        assert_eq!(modals.top(), Some("b"));
        assert!(modals.is_open("a"));
    }

    #[test]
    fn test_closing_unknown_modal_is_noop() {
        let mut modals = ModalController::new();
        modals.open("a");
        modals.close("nonexistent");
        assert!(modals.is_open("a"));
        assert_eq!(modals.open_count(), 1);
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut modals = ModalController::new();
        modals.open("register-modal");
        modals.backdrop_clicked("register-modal");
        assert!(!modals.scroll_locked());
    }
}
