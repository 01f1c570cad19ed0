pub mod attendance;
pub mod auth;
pub mod course;
pub mod mental_health;
pub mod reminder;
pub mod timetable;
