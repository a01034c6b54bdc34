//! 测验实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub section_id: i64,
    pub quarter_id: i64,
    pub created_by: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub instructions: Option<String>,
    /// 题目定义，JSON 数组
    #[sea_orm(column_type = "Text")]
    pub questions: String,
    pub max_score: f64,
    pub due_at: Option<i64>,
    pub time_limit_minutes: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sections::Entity",
        from = "Column::SectionId",
        to = "super::sections::Column::Id"
    )]
    Section,
    #[sea_orm(
        belongs_to = "super::quarters::Entity",
        from = "Column::QuarterId",
        to = "super::quarters::Column::Id"
    )]
    Quarter,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
}

impl Related<super::sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::quarters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quarter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_quiz(self) -> crate::models::quizzes::entities::Quiz {
        use chrono::{DateTime, Utc};

        crate::models::quizzes::entities::Quiz {
            id: self.id,
            section_id: self.section_id,
            quarter_id: self.quarter_id,
            title: self.title,
            instructions: self.instructions,
            questions: serde_json::from_str(&self.questions).unwrap_or_default(),
            max_score: self.max_score,
            due_at: self
                .due_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            time_limit_minutes: self.time_limit_minutes,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
