use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("no subject data was received")]
    NoSubjects,

    #[error(
        "subject rows are incomplete: {subjects} subjects, {credits} credits, {grades} grades"
    )]
    MismatchedRows {
        subjects: usize,
        credits: usize,
        grades: usize,
    },

    #[error("invalid credit '{value}' in row {row}: credit must be a whole number in [0, {max}]")]
    InvalidCredit { row: usize, value: String, max: u32 },

    #[error("{field} in row {row} is longer than {max} characters")]
    SubjectFieldTooLong {
        field: &'static str,
        row: usize,
        max: usize,
    },

    #[error("{field} is longer than {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

impl DomainError {
    /// `true` when the submission carried no subject rows at all, as opposed
    /// to rows that failed validation.
    pub fn is_no_subjects(&self) -> bool {
        matches!(self, Self::NoSubjects)
    }
}

#[cfg(test)]
mod tests {
    use super::DomainError;

    #[test]
    fn invalid_credit_message_names_row_and_value() {
        let err = DomainError::InvalidCredit {
            row: 2,
            value: "four".to_string(),
            max: 40,
        };

        assert_eq!(
            err.to_string(),
            "invalid credit 'four' in row 2: credit must be a whole number in [0, 40]"
        );
        assert!(!err.is_no_subjects());
    }
}
