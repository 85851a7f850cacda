use log::warn;

use crate::modules::api::contract::{ApiError, PortalApi};
use crate::modules::validation::checksum::is_valid_email_syntax;
use crate::modules::validation::debounce::Debouncer;
use crate::MIN_USERNAME_LENGTH;

/// Which registration field a checker watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Email,
}

impl FieldKind {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldKind::Username => "username",
            FieldKind::Email => "email",
        }
    }
}

/// Outcome category of one validation pass over a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Pending,
    Valid,
    Invalid,
}

/// Inline feedback for one field. Each new result supersedes the
/// previous one for the same field; results are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub field: &'static str,
    pub status: FieldStatus,
    pub message: String,
}

impl ValidationResult {
    /// Empty feedback, used while a check is in flight and after a
    /// lookup failure (availability errors never block the form).
    fn neutral(field: &'static str) -> Self {
        Self {
            field,
            status: FieldStatus::Pending,
            message: String::new(),
        }
    }
}

/// Debounced uniqueness checker for a username or email field.
///
/// Keystrokes go through the debouncer; blur flushes immediately. Local
/// syntax problems are reported without touching the network. Responses
/// carry a monotonically increasing request id and only a response newer
/// than the last applied one may update the field, so a slow early
/// lookup can never overwrite the result of a faster later one.
pub struct AvailabilityChecker {
    kind: FieldKind,
    debouncer: Debouncer<String>,
    next_request_id: u64,
    applied_request_id: u64,
    current: ValidationResult,
}

impl AvailabilityChecker {
    pub fn new(kind: FieldKind, wait_ms: u64) -> Self {
        Self {
            kind,
            debouncer: Debouncer::new(wait_ms),
            next_request_id: 0,
            applied_request_id: 0,
            current: ValidationResult::neutral(kind.field_name()),
        }
    }

    /// Latest feedback for the field.
    pub fn result(&self) -> &ValidationResult {
        &self.current
    }

    /// Record a keystroke; the actual check runs once the debounce wait
    /// has elapsed (see `poll`).
    pub fn input_changed(&mut self, value: &str, now_ms: u64) {
        self.debouncer.call(value.to_string(), now_ms);
    }

    /// Run the pending debounced check if its wait has elapsed.
    pub fn poll(&mut self, now_ms: u64, api: &dyn PortalApi) -> Option<ValidationResult> {
        let value = self.debouncer.poll(now_ms)?;
        Some(self.check_value(&value, api))
    }

    /// Field lost focus: drop any pending debounce and check immediately.
    pub fn blur(&mut self, value: &str, api: &dyn PortalApi) -> ValidationResult {
        self.debouncer.cancel();
        self.check_value(value, api)
    }

    /// Validate `value`, hitting the lookup endpoint only when the local
    /// syntax check passes.
    pub fn check_value(&mut self, value: &str, api: &dyn PortalApi) -> ValidationResult {
        if let Some(local_failure) = self.local_check(value) {
            // A local verdict also supersedes any response still in
            // flight, so it takes a sequence slot like a remote one
            let request_id = self.begin_request();
            self.applied_request_id = request_id;
            self.current = local_failure;
            return self.current.clone();
        }

        let request_id = self.begin_request();
        let outcome = match self.kind {
            FieldKind::Username => api.check_username(value),
            FieldKind::Email => api.check_email(value),
        };

        self.apply_response(request_id, outcome)
            .unwrap_or_else(|| self.current.clone())
    }

    /// Allocate the next request id. Ids only ever increase.
    pub fn begin_request(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Apply a lookup response, unless a newer response (or local
    /// verdict) has already been applied for this field.
    pub fn apply_response(
        &mut self,
        request_id: u64,
        outcome: Result<bool, ApiError>,
    ) -> Option<ValidationResult> {
        if request_id <= self.applied_request_id {
            warn!(
                "Stale availability response dropped: field={}, request_id={}, applied={}",
                self.kind.field_name(),
                request_id,
                self.applied_request_id
            );
            return None;
        }
        self.applied_request_id = request_id;

        self.current = match outcome {
            Ok(true) => ValidationResult {
                field: self.kind.field_name(),
                status: FieldStatus::Valid,
                message: self.available_message().to_string(),
            },
            Ok(false) => ValidationResult {
                field: self.kind.field_name(),
                status: FieldStatus::Invalid,
                message: self.taken_message().to_string(),
            },
            Err(e) => {
                // Deliberate exception: a failed lookup must never block
                // the form or surface a toast, so the feedback resets
                warn!(
                    "Availability lookup failed: field={}, error={}",
                    self.kind.field_name(),
                    e
                );
                ValidationResult::neutral(self.kind.field_name())
            }
        };

        Some(self.current.clone())
    }

    /// Syntax check that runs before any network call.
    fn local_check(&self, value: &str) -> Option<ValidationResult> {
        let message = match self.kind {
            FieldKind::Username => {
                if value.chars().count() >= MIN_USERNAME_LENGTH {
                    return None;
                }
                format!(
                    "Username must be at least {} characters",
                    MIN_USERNAME_LENGTH
                )
            }
            FieldKind::Email => {
                if is_valid_email_syntax(value) {
                    return None;
                }
                "Invalid email address".to_string()
            }
        };

        Some(ValidationResult {
            field: self.kind.field_name(),
            status: FieldStatus::Invalid,
            message,
        })
    }

    fn available_message(&self) -> &'static str {
        match self.kind {
            FieldKind::Username => "Username available",
            FieldKind::Email => "Email available",
        }
    }

    fn taken_message(&self) -> &'static str {
        match self.kind {
            FieldKind::Username => "Username already in use",
            FieldKind::Email => "Email already in use",
        }
    }
}
