use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sgpa_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub submission_id: String,
    pub name: String,
    pub rollno: String,
    pub department: String,
    pub semester: String,
    pub subject: String,
    pub credit: i32,
    pub grade: String,
    pub points: i32,
    pub sgpa: f64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
