use crate::modules::ui::modals::ModalController;

/// Two-step confirmation for destructive actions.
///
/// Instead of a blocking `confirm()`-style dialog (impossible in a
/// cooperative single-threaded design), the action is parked while its
/// confirmation modal is open and released only when the user resolves
/// it: `confirm` hands the pending action back to the caller, `cancel`
/// drops it. One dialog instance tracks one modal id.
pub struct ConfirmationDialog<T> {
    modal_id: String,
    pending: Option<T>,
}

impl<T> ConfirmationDialog<T> {
    pub fn new(modal_id: &str) -> Self {
        Self {
            modal_id: modal_id.to_string(),
            pending: None,
        }
    }

    /// Park `action` and open the confirmation modal. A request while
    /// another confirmation is pending replaces the parked action
    /// without opening a second modal.
    pub fn request(&mut self, action: T, modals: &mut ModalController) {
        if self.pending.is_none() {
            modals.open(&self.modal_id);
        }
        self.pending = Some(action);
    }

    /// User confirmed: close the modal and release the parked action.
    pub fn confirm(&mut self, modals: &mut ModalController) -> Option<T> {
        if self.pending.is_some() {
            modals.close(&self.modal_id);
        }
        self.pending.take()
    }

    /// User backed out: close the modal and drop the parked action.
    pub fn cancel(&mut self, modals: &mut ModalController) {
        if self.pending.take().is_some() {
            modals.close(&self.modal_id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
