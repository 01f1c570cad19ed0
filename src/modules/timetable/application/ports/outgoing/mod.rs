mod timetable_repository;

pub use timetable_repository::{
    NewTimetableEntry, TimetableEntryPatch, TimetableRepository, TimetableRepositoryError,
};
