mod create_timetable_entry;
mod delete_timetable_entry;
mod list_timetable;
mod timetable_by_day;
mod update_timetable_entry;

pub use create_timetable_entry::*;
pub use delete_timetable_entry::*;
pub use list_timetable::*;
pub use timetable_by_day::*;
pub use update_timetable_entry::*;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::timetable::application::domain::entities::TimetableEntry;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntryDto {
    pub id: String,
    pub course_id: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub instructor: String,
    pub class_type: String,
}

impl From<TimetableEntry> for TimetableEntryDto {
    fn from(entry: TimetableEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            course_id: entry.course_id.to_string(),
            day_of_week: entry.day_of_week.as_str().to_string(),
            start_time: entry.start_time,
            end_time: entry.end_time,
            location: entry.location,
            instructor: entry.instructor,
            class_type: entry.class_type.as_str().to_string(),
        }
    }
}
