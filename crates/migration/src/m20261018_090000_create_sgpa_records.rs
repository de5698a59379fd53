use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SgpaRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(SgpaRecords::Id))
                    // One uuid per submission; rows of a submission share it.
                    .col(string_len(SgpaRecords::SubmissionId, 36))
                    .col(string_len(SgpaRecords::Name, 100))
                    .col(string_len(SgpaRecords::Rollno, 50))
                    .col(string_len(SgpaRecords::Department, 100))
                    .col(string_len(SgpaRecords::Semester, 50))
                    .col(string_len(SgpaRecords::Subject, 100))
                    .col(integer(SgpaRecords::Credit).check(Expr::col(SgpaRecords::Credit).gte(0)))
                    .col(string_len(SgpaRecords::Grade, 10))
                    // Grade points on the 0..=10 scale.
                    .col(
                        integer(SgpaRecords::Points)
                            .check(Expr::col(SgpaRecords::Points).gte(0))
                            .check(Expr::col(SgpaRecords::Points).lte(10)),
                    )
                    .col(double(SgpaRecords::Sgpa))
                    .col(timestamp(SgpaRecords::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sgpa_records_submission_id")
                    .table(SgpaRecords::Table)
                    .col(SgpaRecords::SubmissionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SgpaRecords::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SgpaRecords {
    Table,
    Id,
    SubmissionId,
    Name,
    Rollno,
    Department,
    Semester,
    Subject,
    Credit,
    Grade,
    Points,
    Sgpa,
    CreatedAt,
}
