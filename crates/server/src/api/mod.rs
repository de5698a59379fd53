//! API 路由模块。
//!
//! HTML 表单页面与只读 JSON 接口共用同一个 [`AppState`]。

pub mod error;
pub mod form;
pub mod json;
pub mod pages;
pub mod state;
pub mod view;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{AppError, JsonError};
pub use state::AppState;

/// 创建应用路由。
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/calculate", post(pages::calculate))
        .route("/view-records", get(pages::view_records))
        .route("/health", get(json::health))
        .route("/api/records", get(json::list_records))
        .route("/api/submissions/{id}", get(json::get_submission))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
