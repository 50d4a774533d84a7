//! `food_entries` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "food_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub meal: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: String,
    pub time: String,
    pub added_by: Option<String>,
    pub added_by_id: Option<i64>,
    pub resident_id: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
