//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub duration_years: i64,
    #[sea_orm(column_type = "Text")]
    pub required_equipment: String,
    #[sea_orm(column_type = "Text")]
    pub prerequisites: String, // JSON 数组
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::Course;

        Course {
            id: self.id,
            name: self.name,
            duration_years: self.duration_years.max(0) as u64,
            required_equipment: self.required_equipment,
            prerequisites: super::decode_text_list(&self.prerequisites),
        }
    }
}
