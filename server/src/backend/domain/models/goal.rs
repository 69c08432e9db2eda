use shared::{GOAL_MAX_ML, GOAL_MIN_ML, GOAL_STEP_ML};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal must be between {min} and {max} ml")]
    OutOfRange { min: u32, max: u32 },
    #[error("Goal must be a multiple of {step} ml")]
    NotMultipleOfStep { step: u32 },
}

/// Check a goal against the bounds of the goal input
pub fn validate_goal(goal_ml: u32) -> Result<(), GoalValidationError> {
    if !(GOAL_MIN_ML..=GOAL_MAX_ML).contains(&goal_ml) {
        return Err(GoalValidationError::OutOfRange {
            min: GOAL_MIN_ML,
            max: GOAL_MAX_ML,
        });
    }
    if goal_ml % GOAL_STEP_ML != 0 {
        return Err(GoalValidationError::NotMultipleOfStep { step: GOAL_STEP_ML });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_goal_bounds() {
        assert!(validate_goal(500).is_ok());
        assert!(validate_goal(2000).is_ok());
        assert!(validate_goal(10_000).is_ok());
        assert_eq!(
            validate_goal(400),
            Err(GoalValidationError::OutOfRange { min: 500, max: 10_000 })
        );
        assert_eq!(
            validate_goal(10_100),
            Err(GoalValidationError::OutOfRange { min: 500, max: 10_000 })
        );
    }

    #[test]
    fn test_validate_goal_step() {
        assert_eq!(
            validate_goal(2050),
            Err(GoalValidationError::NotMultipleOfStep { step: 100 })
        );
        assert_eq!(
            validate_goal(2050).unwrap_err().to_string(),
            "Goal must be a multiple of 100 ml"
        );
    }
}
