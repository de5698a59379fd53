mod calculator;
mod error;
mod grade;
mod ids;
mod sgpa;
mod student;

pub use calculator::{
    MAX_CREDIT, MAX_GRADE_LEN, MAX_SUBJECT_LEN, SgpaCalculation, SubjectResult, calculate_sgpa,
};
pub use error::DomainError;
pub use grade::{Grade, LetterGrade};
pub use ids::SubmissionId;
pub use sgpa::Sgpa;
pub use student::StudentIdentity;
