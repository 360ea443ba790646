//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::encode_text_list;
use crate::errors::{Result, TimetableError};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::storage::new_record_id;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let duration_years = i64::try_from(req.duration_years)
            .map_err(|_| TimetableError::validation("duration_years is out of range"))?;

        let model = ActiveModel {
            id: Set(new_record_id()),
            name: Set(req.name),
            duration_years: Set(duration_years),
            required_equipment: Set(req.required_equipment),
            prerequisites: Set(encode_text_list(&req.prerequisites)?),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过名称获取课程
    pub async fn get_course_by_name_impl(&self, name: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }
}
