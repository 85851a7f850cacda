use log::debug;

use crate::{MAX_ACTIVE_TOASTS, TOAST_DEFAULT_DURATION_MS, TOAST_ENTER_DELAY_MS, TOAST_EXIT_DELAY_MS};

/// Severity of a toast, mapped to a title in the rendered header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Warning => "Warning",
            ToastKind::Info => "Information",
        }
    }
}

/// Lifecycle of a single toast.
///
/// `Entering` covers the brief entrance animation, `Dismissing` the exit
/// animation; `Removed` toasts are evicted from the queue on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Entering,
    Visible,
    Dismissing,
    Removed,
}

/// One queued notification, owned exclusively by the center.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: u64,
    pub state: ToastState,
    // Scheduled transitions, epoch millis
    visible_at: u64,
    auto_dismiss_at: u64,
    removed_at: Option<u64>,
}

impl Toast {
    fn is_active(&self) -> bool {
        matches!(self.state, ToastState::Entering | ToastState::Visible)
    }
}

/// Queue of timed toast notifications.
///
/// Every component reports to the user through this single owner; nothing
/// outside mutates the queue directly. The queue is capped: once
/// `max_active` are on screen, showing another one force-dismisses the
/// oldest active toast instead of growing without bound.
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration_ms: u64,
    max_active: usize,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_settings(TOAST_DEFAULT_DURATION_MS, MAX_ACTIVE_TOASTS)
    }

    /// Build a center with an explicit default duration and cap, both of
    /// which come from the client config at bootstrap.
    pub fn with_settings(default_duration_ms: u64, max_active: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            default_duration_ms,
            max_active,
        }
    }

    /// Queue a toast with the configured default duration.
    pub fn show(&mut self, message: &str, kind: ToastKind, now_ms: u64) -> u64 {
        self.show_with_duration(message, kind, self.default_duration_ms, now_ms)
    }

    /// Queue a toast that auto-dismisses `duration_ms` after creation.
    pub fn show_with_duration(
        &mut self,
        message: &str,
        kind: ToastKind,
        duration_ms: u64,
        now_ms: u64,
    ) -> u64 {
        // Enforce the cap before adding: push out the oldest active toast
        while self.toasts.iter().filter(|t| t.is_active()).count() >= self.max_active {
            let oldest = match self.toasts.iter().find(|t| t.is_active()).map(|t| t.id) {
                Some(id) => id,
                None => break,
            };
            debug!("Toast cap reached, dismissing oldest toast id={}", oldest);
            self.dismiss(oldest, now_ms);
        }

        self.next_id += 1;
        let id = self.next_id;

        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            created_at: now_ms,
            state: ToastState::Entering,
            visible_at: now_ms + TOAST_ENTER_DELAY_MS,
            auto_dismiss_at: now_ms + duration_ms,
            removed_at: None,
        });

        id
    }

    /// Begin dismissing a toast (manual close or auto-dismiss).
    ///
    /// Unknown ids and toasts already on their way out are ignored, so
    /// calling this twice for the same id is harmless.
    pub fn dismiss(&mut self, id: u64, now_ms: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            if toast.is_active() {
                toast.state = ToastState::Dismissing;
                toast.removed_at = Some(now_ms + TOAST_EXIT_DELAY_MS);
            }
        }
    }

    /// Advance every toast's lifecycle and evict the ones that finished
    /// their exit animation.
    pub fn tick(&mut self, now_ms: u64) {
        let mut to_dismiss = Vec::new();

        for toast in &mut self.toasts {
            match toast.state {
                ToastState::Entering => {
                    if now_ms >= toast.visible_at {
                        toast.state = ToastState::Visible;
                    }
                    if now_ms >= toast.auto_dismiss_at {
                        to_dismiss.push(toast.id);
                    }
                }
                ToastState::Visible => {
                    if now_ms >= toast.auto_dismiss_at {
                        to_dismiss.push(toast.id);
                    }
                }
                ToastState::Dismissing => {
                    if let Some(removed_at) = toast.removed_at {
                        if now_ms >= removed_at {
                            toast.state = ToastState::Removed;
                        }
                    }
                }
                ToastState::Removed => {}
            }
        }

        for id in to_dismiss {
            self.dismiss(id, now_ms);
        }

        self.toasts.retain(|t| t.state != ToastState::Removed);
    }

    /// All toasts currently in the queue, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
