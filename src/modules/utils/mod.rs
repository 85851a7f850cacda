// Shared helpers: logging setup and time handling
pub mod logging;
pub mod time;
