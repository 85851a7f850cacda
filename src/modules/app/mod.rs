// App wiring: configuration, the explicit context object, and the
// declarative event-binding table
pub mod config;
pub mod context;
pub mod dispatch;

pub use config::ClientConfig;
pub use context::{AppContext, Payload};
pub use dispatch::{action_for, Action, EventKind};
