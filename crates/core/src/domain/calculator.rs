use super::{DomainError, Grade, Sgpa};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectResult {
    pub subject: String,
    pub credit: u32,
    pub grade: Grade,
    pub points: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SgpaCalculation {
    pub entries: Vec<SubjectResult>,
    pub sgpa: Sgpa,
    pub total_credits: u64,
    pub weighted_sum: u64,
}

/// Largest credit the storage column can hold.
pub const MAX_CREDIT: u32 = i32::MAX as u32;
pub const MAX_SUBJECT_LEN: usize = 100;
pub const MAX_GRADE_LEN: usize = 10;

/// Reduces parallel `subject`/`credit`/`grade` columns to one weighted
/// average. Entries keep input order.
pub fn calculate_sgpa<S: AsRef<str>>(
    subjects: &[S],
    credits: &[S],
    grades: &[S],
) -> Result<SgpaCalculation, DomainError> {
    if subjects.is_empty() || credits.is_empty() || grades.is_empty() {
        return Err(DomainError::NoSubjects);
    }

    if subjects.len() != credits.len() || subjects.len() != grades.len() {
        return Err(DomainError::MismatchedRows {
            subjects: subjects.len(),
            credits: credits.len(),
            grades: grades.len(),
        });
    }

    let mut entries = Vec::with_capacity(subjects.len());
    let mut total_credits: u64 = 0;
    let mut weighted_sum: u64 = 0;

    for (index, ((subject, credit), grade)) in subjects.iter().zip(credits).zip(grades).enumerate()
    {
        let row = index + 1;
        let subject = subject.as_ref();
        if subject.chars().count() > MAX_SUBJECT_LEN {
            return Err(DomainError::SubjectFieldTooLong {
                field: "subject",
                row,
                max: MAX_SUBJECT_LEN,
            });
        }

        let raw_credit = credit.as_ref();
        let credit = raw_credit
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|credit| *credit <= MAX_CREDIT)
            .ok_or_else(|| DomainError::InvalidCredit {
                row,
                value: raw_credit.to_string(),
                max: MAX_CREDIT,
            })?;

        let grade = Grade::parse(grade.as_ref());
        if grade.as_str().chars().count() > MAX_GRADE_LEN {
            return Err(DomainError::SubjectFieldTooLong {
                field: "grade",
                row,
                max: MAX_GRADE_LEN,
            });
        }
        let points = grade.points();

        total_credits += u64::from(credit);
        weighted_sum += u64::from(credit) * u64::from(points);

        entries.push(SubjectResult {
            subject: subject.to_string(),
            credit,
            grade,
            points,
        });
    }

    Ok(SgpaCalculation {
        entries,
        sgpa: Sgpa::from_totals(weighted_sum, total_credits),
        total_credits,
        weighted_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::{MAX_CREDIT, MAX_GRADE_LEN, MAX_SUBJECT_LEN, calculate_sgpa};
    use crate::domain::DomainError;

    #[test]
    fn weighted_average_of_two_subjects() {
        let result = calculate_sgpa(&["Math", "Physics"], &["4", "3"], &["A", "B+"])
            .expect("valid input should calculate");

        let points: Vec<u8> = result.entries.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![8, 7]);
        assert_eq!(result.weighted_sum, 53);
        assert_eq!(result.total_credits, 7);
        assert_eq!(result.sgpa.value(), 7.57);
    }

    #[test]
    fn single_outstanding_subject_is_ten() {
        let result = calculate_sgpa(&["Lab"], &["2"], &["O"]).expect("valid input");

        assert_eq!(result.sgpa.value(), 10.0);
    }

    #[test]
    fn all_zero_credits_yield_zero() {
        let result = calculate_sgpa(&["Seminar", "Audit"], &["0", "0"], &["O", "A"])
            .expect("zero credits are allowed");

        assert_eq!(result.total_credits, 0);
        assert_eq!(result.sgpa.value(), 0.0);
    }

    #[test]
    fn unknown_grade_counts_as_zero_points() {
        let result = calculate_sgpa(&["Math", "Art"], &["3", "3"], &["A", "Z"])
            .expect("unknown grades still calculate");

        assert_eq!(result.entries[1].points, 0);
        assert_eq!(result.entries[1].grade.as_str(), "Z");
        assert_eq!(result.sgpa.value(), 4.0);
    }

    #[test]
    fn entries_preserve_input_order_and_normalise_grades() {
        let result = calculate_sgpa(&["C", "B", "A"], &["1", "2", "3"], &["a+", "b", "o"])
            .expect("valid input");

        let subjects: Vec<&str> = result.entries.iter().map(|e| e.subject.as_str()).collect();
        let grades: Vec<&str> = result.entries.iter().map(|e| e.grade.as_str()).collect();
        assert_eq!(subjects, vec!["C", "B", "A"]);
        assert_eq!(grades, vec!["A+", "B", "O"]);
    }

    #[test]
    fn credits_tolerate_surrounding_whitespace() {
        let result = calculate_sgpa(&["Math"], &[" 4 "], &["A"]).expect("trimmed credit");

        assert_eq!(result.entries[0].credit, 4);
    }

    #[test]
    fn empty_input_is_no_subjects() {
        let empty: [&str; 0] = [];
        let err = calculate_sgpa(&empty, &empty, &empty).expect_err("empty input");

        assert!(err.is_no_subjects());
    }

    #[test]
    fn missing_credit_column_is_no_subjects() {
        let empty: [&str; 0] = [];
        let err = calculate_sgpa(&["Math"], &empty, &["A"]).expect_err("no credits");

        assert_eq!(err, DomainError::NoSubjects);
    }

    #[test]
    fn non_numeric_credit_is_rejected() {
        let err = calculate_sgpa(&["Math", "Physics"], &["4", "three"], &["A", "B"])
            .expect_err("bad credit");

        assert_eq!(
            err,
            DomainError::InvalidCredit {
                row: 2,
                value: "three".to_string(),
                max: MAX_CREDIT,
            }
        );
    }

    #[test]
    fn negative_credit_is_rejected() {
        let err = calculate_sgpa(&["Math"], &["-1"], &["A"]).expect_err("negative credit");

        assert!(matches!(err, DomainError::InvalidCredit { row: 1, .. }));
    }

    #[test]
    fn credit_beyond_storage_range_is_rejected() {
        let err = calculate_sgpa(&["Math"], &["3000000000"], &["A"]).expect_err("huge credit");

        assert!(matches!(err, DomainError::InvalidCredit { row: 1, .. }));
    }

    #[test]
    fn largest_storable_credit_is_accepted() {
        let max = MAX_CREDIT.to_string();
        let result = calculate_sgpa(&["Thesis"], &[max.as_str()], &["O"]).expect("max credit");

        assert_eq!(result.entries[0].credit, MAX_CREDIT);
        assert_eq!(result.sgpa.value(), 10.0);
    }

    #[test]
    fn overlong_subject_is_rejected() {
        let subject = "x".repeat(MAX_SUBJECT_LEN + 1);
        let err = calculate_sgpa(&["Math", subject.as_str()], &["4", "3"], &["A", "B"])
            .expect_err("long subject");

        assert_eq!(
            err,
            DomainError::SubjectFieldTooLong {
                field: "subject",
                row: 2,
                max: MAX_SUBJECT_LEN
            }
        );
    }

    #[test]
    fn overlong_unknown_grade_is_rejected() {
        let err = calculate_sgpa(&["Math"], &["4"], &["excellent-plus"]).expect_err("long grade");

        assert_eq!(
            err,
            DomainError::SubjectFieldTooLong {
                field: "grade",
                row: 1,
                max: MAX_GRADE_LEN
            }
        );
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let err = calculate_sgpa(&["Math", "Physics"], &["4"], &["A", "B"])
            .expect_err("ragged rows");

        assert_eq!(
            err,
            DomainError::MismatchedRows {
                subjects: 2,
                credits: 1,
                grades: 2
            }
        );
    }
}
