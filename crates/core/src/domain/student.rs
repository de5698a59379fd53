use super::DomainError;

/// Identity fields copied onto every row of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentIdentity {
    pub name: String,
    pub roll_number: String,
    pub department: String,
    pub semester: String,
}

impl StudentIdentity {
    pub const MAX_NAME_LEN: usize = 100;
    pub const MAX_ROLL_NUMBER_LEN: usize = 50;
    pub const MAX_DEPARTMENT_LEN: usize = 100;
    pub const MAX_SEMESTER_LEN: usize = 50;

    /// Lengths are counted in characters, matching the storage columns.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("name", &self.name, Self::MAX_NAME_LEN),
            ("roll number", &self.roll_number, Self::MAX_ROLL_NUMBER_LEN),
            ("department", &self.department, Self::MAX_DEPARTMENT_LEN),
            ("semester", &self.semester, Self::MAX_SEMESTER_LEN),
        ];

        for (field, value, max) in fields {
            if value.chars().count() > max {
                return Err(DomainError::FieldTooLong { field, max });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StudentIdentity;
    use crate::domain::DomainError;

    fn student() -> StudentIdentity {
        StudentIdentity {
            name: "Asha".to_string(),
            roll_number: "21CS001".to_string(),
            department: "CSE".to_string(),
            semester: "3".to_string(),
        }
    }

    #[test]
    fn ordinary_identity_is_valid() {
        assert_eq!(student().validate(), Ok(()));
    }

    #[test]
    fn limit_is_inclusive_and_counts_characters() {
        let mut identity = student();
        identity.name = "é".repeat(StudentIdentity::MAX_NAME_LEN);

        assert_eq!(identity.validate(), Ok(()));
    }

    #[test]
    fn overlong_roll_number_is_rejected() {
        let mut identity = student();
        identity.roll_number = "9".repeat(StudentIdentity::MAX_ROLL_NUMBER_LEN + 1);

        assert_eq!(
            identity.validate(),
            Err(DomainError::FieldTooLong {
                field: "roll number",
                max: 50
            })
        );
    }
}
