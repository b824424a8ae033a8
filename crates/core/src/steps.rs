//! Intake step constants and validation.
//!
//! Participants move through a fixed five-step intake process. Only the
//! current step is tracked (last write wins); a participant with no step
//! row is reported as step 0, "not started".

/// First intake step.
pub const MIN_STEP: i32 = 1;

/// Last intake step.
pub const MAX_STEP: i32 = 5;

/// Reported for participants that have not started the intake process.
pub const STEP_NOT_STARTED: i32 = 0;

/// Validate that a step value is within the intake range [1, 5].
pub fn validate_step(step: i32) -> Result<(), String> {
    if (MIN_STEP..=MAX_STEP).contains(&step) {
        Ok(())
    } else {
        Err(format!(
            "Step must be between {MIN_STEP} and {MAX_STEP}, got {step}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_in_range_accepted() {
        for step in MIN_STEP..=MAX_STEP {
            assert!(validate_step(step).is_ok());
        }
    }

    #[test]
    fn step_zero_rejected() {
        // 0 is the "not started" sentinel, never a valid stored step.
        assert!(validate_step(0).is_err());
    }

    #[test]
    fn step_above_range_rejected() {
        let err = validate_step(6).unwrap_err();
        assert!(err.contains("between 1 and 5"));
    }

    #[test]
    fn negative_step_rejected() {
        assert!(validate_step(-3).is_err());
    }
}
