// Session state machine and token persistence
pub mod manager;
pub mod token_store;

pub use manager::{SessionManager, SessionState};
pub use token_store::TokenStore;
