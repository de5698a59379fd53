//! HTML 页面路由。

use std::sync::Arc;

use axum::{Form, extract::State, response::Html};
use sgpa_core::domain::calculate_sgpa;
use tracing::info;

use super::error::AppError;
use super::form::CalculateForm;
use super::state::AppState;
use super::view;
use crate::repository::NewSubmission;

/// 成绩录入表单。
pub async fn index() -> Html<String> {
    Html(view::index_page())
}

/// 计算 SGPA 并保存本次提交。
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let form = CalculateForm::from_pairs(pairs);
    let calculation = calculate_sgpa(&form.subjects, &form.credits, &form.grades)?;
    form.student.validate()?;

    let stored = state
        .records
        .append(NewSubmission {
            student: form.student.clone(),
            calculation: calculation.clone(),
        })
        .await?;

    info!(
        submission_id = %stored.submission_id,
        rows = stored.records.len(),
        sgpa = calculation.sgpa.value(),
        "submission recorded"
    );

    Ok(Html(view::result_page(
        &form.student,
        &calculation,
        stored.submission_id,
    )))
}

/// 历史记录：汇总与明细。
pub async fn view_records(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let summaries = state.records.list_summaries().await?;
    let records = state.records.list_details().await?;

    Ok(Html(view::records_page(&summaries, &records)))
}
