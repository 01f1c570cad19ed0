pub mod timetable_service;
