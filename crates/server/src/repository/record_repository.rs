use crate::entity::sgpa_record;
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use sea_orm::prelude::DateTime;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use sgpa_core::domain::{Grade, SgpaCalculation, Sgpa, StudentIdentity, SubmissionId};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct GradeRecord {
    pub id: i32,
    pub submission_id: SubmissionId,
    pub student: StudentIdentity,
    pub subject: String,
    pub credit: u32,
    pub grade: Grade,
    pub points: u8,
    pub sgpa: Sgpa,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSummary {
    pub submission_id: SubmissionId,
    pub student: StudentIdentity,
    pub sgpa: Sgpa,
    pub subject_count: u32,
    /// Highest row id of the submission; listings sort on it.
    pub max_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub student: StudentIdentity,
    pub calculation: SgpaCalculation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSubmission {
    pub submission_id: SubmissionId,
    pub records: Vec<GradeRecord>,
}

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Writes one row per subject. Either every row lands or none does.
    async fn append(&self, submission: NewSubmission) -> Result<StoredSubmission>;
    /// One entry per submission, most recent first.
    async fn list_summaries(&self) -> Result<Vec<SubmissionSummary>>;
    /// Every row, newest id first.
    async fn list_details(&self) -> Result<Vec<GradeRecord>>;
    async fn find_submission(&self, submission_id: SubmissionId) -> Result<Vec<GradeRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmRecordRepository {
    db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    submission_id: String,
    name: String,
    rollno: String,
    department: String,
    semester: String,
    sgpa: f64,
    subject_count: i64,
    max_id: i32,
}

impl SeaOrmRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn parse_submission_id(raw: &str) -> Result<SubmissionId> {
        SubmissionId::from_str(raw)
            .map_err(|e| anyhow!("invalid sgpa_records.submission_id '{raw}' from database: {e}"))
    }

    fn map_model(model: sgpa_record::Model) -> Result<GradeRecord> {
        let credit = u32::try_from(model.credit).map_err(|_| {
            anyhow!(
                "invalid sgpa_records.credit from database: {} (must be non-negative)",
                model.credit
            )
        })?;
        let points = u8::try_from(model.points).map_err(|_| {
            anyhow!(
                "invalid sgpa_records.points from database: {} (must be in [0, 10])",
                model.points
            )
        })?;

        Ok(GradeRecord {
            id: model.id,
            submission_id: Self::parse_submission_id(&model.submission_id)?,
            student: StudentIdentity {
                name: model.name,
                roll_number: model.rollno,
                department: model.department,
                semester: model.semester,
            },
            subject: model.subject,
            credit,
            grade: Grade::parse(&model.grade),
            points,
            sgpa: Sgpa::from_stored(model.sgpa),
            created_at: model.created_at,
        })
    }

    fn map_summary(row: SummaryRow) -> Result<SubmissionSummary> {
        Ok(SubmissionSummary {
            submission_id: Self::parse_submission_id(&row.submission_id)?,
            student: StudentIdentity {
                name: row.name,
                roll_number: row.rollno,
                department: row.department,
                semester: row.semester,
            },
            sgpa: Sgpa::from_stored(row.sgpa),
            subject_count: u32::try_from(row.subject_count)?,
            max_id: row.max_id,
        })
    }
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn append(&self, submission: NewSubmission) -> Result<StoredSubmission> {
        let NewSubmission {
            student,
            calculation,
        } = submission;
        if calculation.entries.is_empty() {
            bail!("refusing to store a submission without subjects");
        }

        let submission_id = SubmissionId::new();
        let sgpa = calculation.sgpa.value();

        let active_models = calculation
            .entries
            .into_iter()
            .map(|entry| -> Result<sgpa_record::ActiveModel> {
                Ok(sgpa_record::ActiveModel {
                    id: NotSet,
                    submission_id: Set(submission_id.to_string()),
                    name: Set(student.name.clone()),
                    rollno: Set(student.roll_number.clone()),
                    department: Set(student.department.clone()),
                    semester: Set(student.semester.clone()),
                    subject: Set(entry.subject),
                    credit: Set(i32::try_from(entry.credit)
                        .with_context(|| format!("credit {} is too large", entry.credit))?),
                    grade: Set(entry.grade.into_inner()),
                    points: Set(i32::from(entry.points)),
                    sgpa: Set(sgpa),
                    created_at: NotSet,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Dropping `txn` without commit rolls the whole batch back.
        let txn = self.db.begin().await?;

        sgpa_record::Entity::insert_many(active_models)
            .exec(&txn)
            .await
            .context("failed to insert sgpa records")?;

        let models = sgpa_record::Entity::find()
            .filter(sgpa_record::Column::SubmissionId.eq(submission_id.to_string()))
            .order_by_asc(sgpa_record::Column::Id)
            .all(&txn)
            .await?;

        txn.commit().await?;
        debug!(%submission_id, rows = models.len(), "stored submission");

        let records = models
            .into_iter()
            .map(Self::map_model)
            .collect::<Result<Vec<_>>>()?;

        Ok(StoredSubmission {
            submission_id,
            records,
        })
    }

    async fn list_summaries(&self) -> Result<Vec<SubmissionSummary>> {
        use sgpa_record::Column;

        let rows = sgpa_record::Entity::find()
            .select_only()
            .column(Column::SubmissionId)
            .column(Column::Name)
            .column(Column::Rollno)
            .column(Column::Department)
            .column(Column::Semester)
            .column(Column::Sgpa)
            .column_as(Column::Id.count(), "subject_count")
            .column_as(Column::Id.max(), "max_id")
            .group_by(Column::SubmissionId)
            .group_by(Column::Name)
            .group_by(Column::Rollno)
            .group_by(Column::Department)
            .group_by(Column::Semester)
            .group_by(Column::Sgpa)
            .order_by_desc(Column::Id.max())
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await?;

        rows.into_iter().map(Self::map_summary).collect()
    }

    async fn list_details(&self) -> Result<Vec<GradeRecord>> {
        let models = sgpa_record::Entity::find()
            .order_by_desc(sgpa_record::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::map_model).collect()
    }

    async fn find_submission(&self, submission_id: SubmissionId) -> Result<Vec<GradeRecord>> {
        let models = sgpa_record::Entity::find()
            .filter(sgpa_record::Column::SubmissionId.eq(submission_id.to_string()))
            .order_by_asc(sgpa_record::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::map_model).collect()
    }
}
