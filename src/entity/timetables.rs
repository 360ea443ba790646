//! 课表实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetables")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub course_id: String,
    pub instructor_id: String,
    pub classroom_id: String,
    pub time_slot: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_timetable(self) -> crate::models::timetables::entities::Timetable {
        use crate::models::timetables::entities::Timetable;

        Timetable {
            id: self.id,
            course_id: self.course_id,
            instructor_id: self.instructor_id,
            classroom_id: self.classroom_id,
            time_slot: self.time_slot,
        }
    }
}
