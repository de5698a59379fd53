//! Shared request/response types used by API-facing crates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// One stored subject row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecordDto {
    pub id: i32,
    pub submission_id: String,
    pub name: String,
    pub rollno: String,
    pub department: String,
    pub semester: String,
    pub subject: String,
    pub credit: u32,
    pub grade: String,
    pub points: u8,
    pub sgpa: f64,
    pub created_at: String,
}

/// One submission, collapsed from its rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSummaryDto {
    pub submission_id: String,
    pub name: String,
    pub rollno: String,
    pub department: String,
    pub semester: String,
    pub sgpa: f64,
    pub subject_count: u32,
    pub max_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub summaries: Vec<SubmissionSummaryDto>,
    pub records: Vec<GradeRecordDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub submission_id: String,
    pub records: Vec<GradeRecordDto>,
}
