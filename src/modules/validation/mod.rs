// Form validation pipeline: pure checks, debouncing, and remote
// availability lookups
pub mod availability;
pub mod checksum;
pub mod debounce;
pub mod password;
pub mod registration;

pub use availability::{AvailabilityChecker, FieldKind, FieldStatus, ValidationResult};
pub use debounce::Debouncer;
