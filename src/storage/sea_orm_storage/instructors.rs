//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::encode_text_list;
use crate::entity::instructors::{ActiveModel, Column, Entity as Instructors};
use crate::errors::{Result, TimetableError};
use crate::models::instructors::{entities::Instructor, requests::CreateInstructorRequest};
use crate::storage::new_record_id;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_instructor_impl(&self, req: CreateInstructorRequest) -> Result<Instructor> {
        let model = ActiveModel {
            id: Set(new_record_id()),
            name: Set(req.name),
            availability: Set(encode_text_list(&req.availability)?),
            preferred_times: Set(encode_text_list(&req.preferred_times)?),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_instructor())
    }

    /// 通过名称获取教师
    pub async fn get_instructor_by_name_impl(&self, name: &str) -> Result<Option<Instructor>> {
        let result = Instructors::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_instructor()))
    }

    /// 列出全部教师
    pub async fn list_instructors_impl(&self) -> Result<Vec<Instructor>> {
        let instructors = Instructors::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(instructors
            .into_iter()
            .map(|m| m.into_instructor())
            .collect())
    }

    /// 列出在指定时间段可授课的教师
    // 可用时间段以 JSON 文本存储，在内存中过滤
    pub async fn list_available_instructors_impl(&self, time_slot: &str) -> Result<Vec<Instructor>> {
        let instructors = self.list_instructors_impl().await?;

        Ok(instructors
            .into_iter()
            .filter(|instructor| instructor.is_available_at(time_slot))
            .collect())
    }
}
