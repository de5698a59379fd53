#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use sea_orm::DatabaseConnection;
use sgpa_core::domain::{StudentIdentity, SubmissionId, calculate_sgpa};
use sgpa_server::DatabaseConfig;
use sgpa_server::api::{AppState, create_router};
use sgpa_server::db;
use sgpa_server::repository::{
    GradeRecord, NewSubmission, RecordRepository, SeaOrmRecordRepository, StoredSubmission,
    SubmissionSummary,
};

/// A single-connection pool: every sqlite in-memory connection is its own database.
pub async fn memory_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: Some("sqlite::memory:".to_string()),
        max_connections: 1,
        ..DatabaseConfig::default()
    };

    db::init_pool_and_migrate(&config)
        .await
        .expect("in-memory database should migrate")
}

pub async fn memory_repository() -> SeaOrmRecordRepository {
    SeaOrmRecordRepository::new(memory_db().await)
}

pub async fn memory_app() -> (Router, SeaOrmRecordRepository) {
    let repository = memory_repository().await;
    let app = create_router(AppState::new(Arc::new(repository.clone())));
    (app, repository)
}

pub fn student(name: &str) -> StudentIdentity {
    StudentIdentity {
        name: name.to_string(),
        roll_number: "21CS001".to_string(),
        department: "CSE".to_string(),
        semester: "3".to_string(),
    }
}

pub fn submission(name: &str, rows: &[(&str, &str, &str)]) -> NewSubmission {
    let subjects: Vec<&str> = rows.iter().map(|r| r.0).collect();
    let credits: Vec<&str> = rows.iter().map(|r| r.1).collect();
    let grades: Vec<&str> = rows.iter().map(|r| r.2).collect();

    NewSubmission {
        student: student(name),
        calculation: calculate_sgpa(&subjects, &credits, &grades).expect("valid rows"),
    }
}

pub fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

/// Fails every call with a message that must never reach a client.
pub struct UnavailableRepository;

const UNAVAILABLE: &str = "connection refused by db-primary.internal:3306";

#[async_trait]
impl RecordRepository for UnavailableRepository {
    async fn append(&self, _submission: NewSubmission) -> Result<StoredSubmission> {
        Err(anyhow!(UNAVAILABLE))
    }

    async fn list_summaries(&self) -> Result<Vec<SubmissionSummary>> {
        Err(anyhow!(UNAVAILABLE))
    }

    async fn list_details(&self) -> Result<Vec<GradeRecord>> {
        Err(anyhow!(UNAVAILABLE))
    }

    async fn find_submission(&self, _submission_id: SubmissionId) -> Result<Vec<GradeRecord>> {
        Err(anyhow!(UNAVAILABLE))
    }
}

pub fn unavailable_app() -> Router {
    create_router(AppState::new(Arc::new(UnavailableRepository)))
}
