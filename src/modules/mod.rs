// Declare all modules
pub mod api;
pub mod app;
pub mod session;
pub mod ui;
pub mod utils;
pub mod validation;

// No re-exports here as they're handled in lib.rs
