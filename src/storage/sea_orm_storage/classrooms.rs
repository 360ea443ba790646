//! 教室存储操作

use super::SeaOrmStorage;
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms};
use crate::errors::{Result, TimetableError};
use crate::models::classrooms::{entities::Classroom, requests::CreateClassroomRequest};
use crate::storage::new_record_id;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建教室
    pub async fn create_classroom_impl(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        let capacity = i64::try_from(req.capacity)
            .map_err(|_| TimetableError::validation("capacity is out of range"))?;

        let model = ActiveModel {
            id: Set(new_record_id()),
            name: Set(req.name),
            capacity: Set(capacity),
            equipment: Set(req.equipment),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建教室失败: {e}")))?;

        Ok(result.into_classroom())
    }

    /// 列出全部教室
    pub async fn list_classrooms_impl(&self) -> Result<Vec<Classroom>> {
        let classrooms = Classrooms::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教室列表失败: {e}")))?;

        Ok(classrooms.into_iter().map(|m| m.into_classroom()).collect())
    }
}
