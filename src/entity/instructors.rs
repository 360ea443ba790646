//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub availability: String, // JSON 数组
    #[sea_orm(column_type = "Text")]
    pub preferred_times: String, // JSON 数组
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_instructor(self) -> crate::models::instructors::entities::Instructor {
        use crate::models::instructors::entities::Instructor;

        Instructor {
            id: self.id,
            name: self.name,
            availability: super::decode_text_list(&self.availability),
            preferred_times: super::decode_text_list(&self.preferred_times),
        }
    }
}
