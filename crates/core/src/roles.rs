//! Account role names.
//!
//! Two roles plus an `admin` flag: case workers (`user`) create and manage
//! participants; `deltagare` accounts belong to a single participant and may
//! only touch their own data.

/// Case worker (handläggare) account.
pub const ROLE_USER: &str = "user";

/// Participant-linked account.
pub const ROLE_DELTAGARE: &str = "deltagare";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_DELTAGARE];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_accepted() {
        assert!(validate_role("user").is_ok());
        assert!(validate_role("deltagare").is_ok());
    }

    #[test]
    fn unknown_role_rejected() {
        let result = validate_role("superuser");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid role"));
    }

    #[test]
    fn role_names_are_case_sensitive() {
        assert!(validate_role("Deltagare").is_err());
    }
}
