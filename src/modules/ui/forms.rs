use log::warn;

/// Busy state of a form's submit button.
///
/// While a request is in flight the button is disabled and its label is
/// swapped for a busy indicator; `restore` puts the original label back
/// and must run on every outcome. Because a hung request would otherwise
/// leave the button disabled forever, a control that stays busy past
/// `timeout_ms` is force-restored by `tick`, and the caller surfaces a
/// timeout error.
pub struct SubmitControl {
    label: String,
    busy_label: String,
    timeout_ms: u64,
    busy_since: Option<u64>,
}

impl SubmitControl {
    pub fn new(label: &str, busy_label: &str, timeout_ms: u64) -> Self {
        Self {
            label: label.to_string(),
            busy_label: busy_label.to_string(),
            timeout_ms,
            busy_since: None,
        }
    }

    /// Enter the busy state. Returns false (and changes nothing) if the
    /// control is already busy, which doubles as a double-submit guard.
    pub fn begin(&mut self, now_ms: u64) -> bool {
        if self.busy_since.is_some() {
            warn!("Submit ignored: control '{}' is already busy", self.label);
            return false;
        }
        self.busy_since = Some(now_ms);
        true
    }

    /// Leave the busy state, restoring the original label and enabling
    /// the button again. Safe to call when not busy.
    pub fn restore(&mut self) {
        self.busy_since = None;
    }

    /// Force-restore the control if it has been busy longer than the
    /// timeout. Returns true when a timeout fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let Some(since) = self.busy_since {
            if now_ms.saturating_sub(since) >= self.timeout_ms {
                warn!(
                    "Submit control '{}' timed out after {} ms",
                    self.label, self.timeout_ms
                );
                self.busy_since = None;
                return true;
            }
        }
        false
    }

    pub fn is_busy(&self) -> bool {
        self.busy_since.is_some()
    }

    /// Label currently shown on the button.
    pub fn current_label(&self) -> &str {
        if self.is_busy() {
            &self.busy_label
        } else {
            &self.label
        }
    }

    /// The button is disabled exactly while busy.
    pub fn is_disabled(&self) -> bool {
        self.is_busy()
    }
}
