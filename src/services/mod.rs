pub mod classrooms;
pub mod courses;
pub mod instructors;
pub mod system;
pub mod timetables;
pub mod users;

pub use classrooms::ClassroomService;
pub use courses::CourseService;
pub use instructors::InstructorService;
pub use system::SystemService;
pub use timetables::TimetableService;
pub use users::UserService;
