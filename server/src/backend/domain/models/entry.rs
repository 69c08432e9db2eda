use shared::{CUSTOM_AMOUNT_MIN_ML, CUSTOM_AMOUNT_STEP_ML};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryValidationError {
    #[error("Amount must be a positive number")]
    NotPositive,
    #[error("Amount must be at least {min} ml")]
    BelowMinimum { min: u32 },
    #[error("Amount must be a multiple of {step} ml")]
    NotMultipleOfStep { step: u32 },
}

/// Check an amount against the bounds of the amount inputs
pub fn validate_amount(amount_ml: f64) -> Result<(), EntryValidationError> {
    if !amount_ml.is_finite() || amount_ml <= 0.0 {
        return Err(EntryValidationError::NotPositive);
    }
    if amount_ml < f64::from(CUSTOM_AMOUNT_MIN_ML) {
        return Err(EntryValidationError::BelowMinimum {
            min: CUSTOM_AMOUNT_MIN_ML,
        });
    }
    if amount_ml % f64::from(CUSTOM_AMOUNT_STEP_ML) != 0.0 {
        return Err(EntryValidationError::NotMultipleOfStep {
            step: CUSTOM_AMOUNT_STEP_ML,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::QUICK_ADD_AMOUNTS_ML;

    #[test]
    fn test_quick_add_amounts_are_valid() {
        for amount in QUICK_ADD_AMOUNTS_ML {
            assert!(validate_amount(f64::from(amount)).is_ok());
        }
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        assert_eq!(validate_amount(0.0), Err(EntryValidationError::NotPositive));
        assert_eq!(validate_amount(-50.0), Err(EntryValidationError::NotPositive));
        assert_eq!(validate_amount(f64::NAN), Err(EntryValidationError::NotPositive));
        assert_eq!(validate_amount(f64::INFINITY), Err(EntryValidationError::NotPositive));
    }

    #[test]
    fn test_rejects_small_and_off_step_amounts() {
        assert_eq!(validate_amount(25.0), Err(EntryValidationError::BelowMinimum { min: 50 }));
        assert_eq!(
            validate_amount(120.0),
            Err(EntryValidationError::NotMultipleOfStep { step: 50 })
        );
        assert!(validate_amount(50.0).is_ok());
        assert!(validate_amount(1500.0).is_ok());
    }
}
