//! JSON 接口。

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use sgpa_api_types::{
    GradeRecordDto, HealthCheckResponse, RecordsResponse, SubmissionResponse,
    SubmissionSummaryDto,
};
use sgpa_core::domain::SubmissionId;

use super::error::{AppError, JsonError};
use super::state::AppState;
use crate::repository::{GradeRecord, SubmissionSummary};

fn record_dto(record: &GradeRecord) -> GradeRecordDto {
    GradeRecordDto {
        id: record.id,
        submission_id: record.submission_id.to_string(),
        name: record.student.name.clone(),
        rollno: record.student.roll_number.clone(),
        department: record.student.department.clone(),
        semester: record.student.semester.clone(),
        subject: record.subject.clone(),
        credit: record.credit,
        grade: record.grade.to_string(),
        points: record.points,
        sgpa: record.sgpa.value(),
        created_at: record.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

fn summary_dto(summary: &SubmissionSummary) -> SubmissionSummaryDto {
    SubmissionSummaryDto {
        submission_id: summary.submission_id.to_string(),
        name: summary.student.name.clone(),
        rollno: summary.student.roll_number.clone(),
        department: summary.student.department.clone(),
        semester: summary.student.semester.clone(),
        sgpa: summary.sgpa.value(),
        subject_count: summary.subject_count,
        max_id: summary.max_id,
    }
}

/// 健康检查。
pub async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}

/// 全部提交汇总与明细。
pub async fn list_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecordsResponse>, JsonError> {
    let summaries = state.records.list_summaries().await?;
    let records = state.records.list_details().await?;

    Ok(Json(RecordsResponse {
        summaries: summaries.iter().map(summary_dto).collect(),
        records: records.iter().map(record_dto).collect(),
    }))
}

/// 单次提交的全部课程行。
pub async fn get_submission(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<SubmissionResponse>, JsonError> {
    let submission_id = SubmissionId::from_str(&raw_id)
        .map_err(|_| AppError::Validation(format!("invalid submission id: {raw_id}")))?;

    let records = state.records.find_submission(submission_id).await?;
    if records.is_empty() {
        return Err(AppError::NotFound(format!("submission {submission_id}")).into());
    }

    Ok(Json(SubmissionResponse {
        submission_id: submission_id.to_string(),
        records: records.iter().map(record_dto).collect(),
    }))
}
