use crate::modules::api::types::RegistrationData;
use crate::modules::validation::checksum::{digits_only, is_valid_email_syntax, is_valid_taxpayer_id};
use crate::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};

/// Validate a registration form before it goes anywhere near the network.
///
/// Rules run in form order and only the FIRST failure is reported, to
/// avoid burying the user under a pile of toasts. `Ok(())` means the
/// payload may be submitted.
pub fn validate_registration(data: &RegistrationData) -> Result<(), String> {
    if data.full_name.trim().chars().count() < 2 {
        return Err("Full name must be at least 2 characters".to_string());
    }

    if data.username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        ));
    }

    if !is_valid_email_syntax(&data.email) {
        return Err("Invalid email address".to_string());
    }

    // The form may carry punctuation; the checksum runs on digits only
    if !is_valid_taxpayer_id(&digits_only(&data.taxpayer_id)) {
        return Err("Invalid CPF".to_string());
    }

    if data.city.is_empty() {
        return Err("Please select a city".to_string());
    }

    if data.role.is_empty() {
        return Err("Please select an account type".to_string());
    }

    if data.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }

    if data.password != data.confirm_password {
        return Err("Passwords do not match".to_string());
    }

    Ok(())
}
