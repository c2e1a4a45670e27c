//! Error types for the kairos-period crate.

/// Error type for all fallible operations in the kairos-period crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PeriodError {
    /// Returned when the initial date does not strictly precede the final
    /// date.
    #[error("initial date {initial} does not precede final date {last}")]
    MisorderedEndpoints {
        /// Rendered initial date.
        initial: String,
        /// Rendered final date.
        last: String,
    },

    /// Returned when a sampling step does not strictly advance the start
    /// date (a zero or backward step would never terminate).
    #[error("sampling step does not advance the date")]
    NonProgressingStep,

    /// Date error.
    #[error(transparent)]
    Date(#[from] kairos_date::DateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_misordered() {
        let e = PeriodError::MisorderedEndpoints {
            initial: "2002".to_string(),
            last: "2001".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "initial date 2002 does not precede final date 2001"
        );
    }

    #[test]
    fn display_non_progressing() {
        assert_eq!(
            PeriodError::NonProgressingStep.to_string(),
            "sampling step does not advance the date"
        );
    }

    #[test]
    fn from_date_error() {
        let de = kairos_date::DateError::EmptyDate;
        let pe: PeriodError = de.into();
        assert!(matches!(pe, PeriodError::Date(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<PeriodError>();
    }
}
