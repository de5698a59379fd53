mod record_repository;

pub use record_repository::{
    GradeRecord, NewSubmission, RecordRepository, SeaOrmRecordRepository, StoredSubmission,
    SubmissionSummary,
};
