// Collaborator contract and wire types for the portal backend
pub mod contract;
pub mod types;

pub use contract::{ApiError, PortalApi};
pub use types::{LoginResponse, RegistrationData, UserProfile};
