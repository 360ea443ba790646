//! 预导入模块，方便使用

pub use super::classrooms::Entity as Classrooms;
pub use super::courses::Entity as Courses;
pub use super::instructors::Entity as Instructors;
