mod attendance_stats;
mod list_attendance;
mod mark_attendance;
mod overall_attendance_stats;

pub use attendance_stats::*;
pub use list_attendance::*;
pub use mark_attendance::*;
pub use overall_attendance_stats::*;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::attendance::application::domain::entities::AttendanceRecord;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub id: String,
    pub course_id: String,
    #[schema(value_type = String)]
    pub date: NaiveDate,
    pub status: String,
    pub remarks: String,
}

impl From<AttendanceRecord> for AttendanceDto {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            id: record.id.to_string(),
            course_id: record.course_id.to_string(),
            date: record.date,
            status: record.status.as_str().to_string(),
            remarks: record.remarks,
        }
    }
}
