/// Input validation for signup payloads
///
/// Fields are checked in a fixed order and only the first failure is
/// reported, so clients always see one actionable message.
use crate::models::SignupRequest;
use std::ops::RangeInclusive;
use validator::ValidateEmail;

const CREDENTIAL_LENGTH: RangeInclusive<usize> = 4..=12;

/// Validate username length (4-12 characters)
pub fn validate_username(username: &str) -> bool {
    CREDENTIAL_LENGTH.contains(&username.chars().count())
}

/// Validate password length (4-12 characters)
pub fn validate_password(password: &str) -> bool {
    CREDENTIAL_LENGTH.contains(&password.chars().count())
}

pub fn validate_email(email: &str) -> bool {
    email.validate_email()
}

/// Returns the first schema violation of a signup request
pub fn validate_signup(payload: &SignupRequest) -> Result<(), &'static str> {
    if payload.username.is_empty() {
        return Err("Username is a required field");
    }
    if !validate_username(&payload.username) {
        return Err("Invalid username");
    }

    if payload.password.is_empty() {
        return Err("Password is a required field");
    }
    if !validate_password(&payload.password) {
        return Err("Invalid password");
    }

    if payload.country.is_empty() {
        return Err("Country is a required field");
    }

    if payload.email.is_empty() {
        return Err("Email is a required field");
    }
    if !validate_email(&payload.email) {
        return Err("Invalid email");
    }

    if payload.profile_picture.is_empty() {
        return Err("Please add a profile picture");
    }

    Ok(())
}
