use std::sync::Arc;

use crate::models::{
    classrooms::{entities::Classroom, requests::CreateClassroomRequest},
    courses::{entities::Course, requests::CreateCourseRequest},
    instructors::{entities::Instructor, requests::CreateInstructorRequest},
    timetables::{entities::Timetable, requests::CreateTimetableRequest},
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 记录存储
///
/// 所有列表与“查找第一条”操作均按 ID 升序返回。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码需已哈希）
    async fn create_user(&self, user: CreateUserRequest, owner: &str) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名获取用户信息（用户名不唯一，返回第一条）
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 修改用户角色
    async fn update_user_role(&self, id: &str, role: UserRole) -> Result<Option<User>>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_name(&self, name: &str) -> Result<Option<Course>>;
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// 教师管理方法
    async fn create_instructor(&self, instructor: CreateInstructorRequest) -> Result<Instructor>;
    async fn get_instructor_by_name(&self, name: &str) -> Result<Option<Instructor>>;
    async fn list_instructors(&self) -> Result<Vec<Instructor>>;
    // 列出在指定时间段可授课的教师
    async fn list_available_instructors(&self, time_slot: &str) -> Result<Vec<Instructor>>;

    /// 教室管理方法
    async fn create_classroom(&self, classroom: CreateClassroomRequest) -> Result<Classroom>;
    async fn list_classrooms(&self) -> Result<Vec<Classroom>>;

    /// 课表管理方法
    async fn create_timetable(&self, timetable: CreateTimetableRequest) -> Result<Timetable>;
    async fn list_timetables(&self) -> Result<Vec<Timetable>>;
    // 为 课程 × 教师 × 教室 的每种组合生成一条课表
    async fn generate_timetables(&self, time_slot: &str) -> Result<Vec<Timetable>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 生成新的记录 ID
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
