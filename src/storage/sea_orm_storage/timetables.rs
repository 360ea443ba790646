//! 课表存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{Classrooms, Courses, Instructors};
use crate::entity::timetables::{ActiveModel, Column, Entity as Timetables};
use crate::entity::{classrooms, courses, instructors};
use crate::errors::{Result, TimetableError};
use crate::models::timetables::{entities::Timetable, requests::CreateTimetableRequest};
use crate::storage::new_record_id;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建课表条目（不校验引用 ID）
    pub async fn create_timetable_impl(&self, req: CreateTimetableRequest) -> Result<Timetable> {
        let model = ActiveModel {
            id: Set(new_record_id()),
            course_id: Set(req.course_id),
            instructor_id: Set(req.instructor_id),
            classroom_id: Set(req.classroom_id),
            time_slot: Set(req.time_slot),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建课表失败: {e}")))?;

        Ok(result.into_timetable())
    }

    /// 列出全部课表
    pub async fn list_timetables_impl(&self) -> Result<Vec<Timetable>> {
        let timetables = Timetables::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表列表失败: {e}")))?;

        Ok(timetables
            .into_iter()
            .map(|m| m.into_timetable())
            .collect())
    }

    /// 按 课程 × 教师 × 教室 生成课表
    ///
    /// 三重循环依次遍历课程、教师、教室（均按 ID 升序），每个组合写入一条
    /// 使用 `time_slot` 的新课表。不检测冲突，也不与已有课表去重。
    /// 整批在同一事务内写入。
    pub async fn generate_timetables_impl(&self, time_slot: &str) -> Result<Vec<Timetable>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TimetableError::database_operation(format!("开启事务失败: {e}")))?;

        let course_ids: Vec<String> = Courses::find()
            .select_only()
            .column(courses::Column::Id)
            .order_by_asc(courses::Column::Id)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课程失败: {e}")))?;

        let instructor_ids: Vec<String> = Instructors::find()
            .select_only()
            .column(instructors::Column::Id)
            .order_by_asc(instructors::Column::Id)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教师失败: {e}")))?;

        let classroom_ids: Vec<String> = Classrooms::find()
            .select_only()
            .column(classrooms::Column::Id)
            .order_by_asc(classrooms::Column::Id)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教室失败: {e}")))?;

        let mut generated =
            Vec::with_capacity(course_ids.len() * instructor_ids.len() * classroom_ids.len());

        for course_id in &course_ids {
            for instructor_id in &instructor_ids {
                for classroom_id in &classroom_ids {
                    let model = ActiveModel {
                        id: Set(new_record_id()),
                        course_id: Set(course_id.clone()),
                        instructor_id: Set(instructor_id.clone()),
                        classroom_id: Set(classroom_id.clone()),
                        time_slot: Set(time_slot.to_string()),
                    };

                    let result = model.insert(&txn).await.map_err(|e| {
                        TimetableError::database_operation(format!("生成课表失败: {e}"))
                    })?;
                    generated.push(result.into_timetable());
                }
            }
        }

        txn.commit()
            .await
            .map_err(|e| TimetableError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(generated)
    }
}
