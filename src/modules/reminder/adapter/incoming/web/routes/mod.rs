mod complete_reminder;
mod create_reminder;
mod delete_reminder;
mod list_reminders;
mod update_reminder;
mod upcoming_reminders;

pub use complete_reminder::*;
pub use create_reminder::*;
pub use delete_reminder::*;
pub use list_reminders::*;
pub use update_reminder::*;
pub use upcoming_reminders::*;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::reminder::application::domain::entities::Reminder;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDto {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reminder_date: String,
    pub reminder_time: String,
    pub is_completed: bool,
    pub frequency: String,
    pub priority: String,
    pub created_at: String,
}

impl From<Reminder> for ReminderDto {
    fn from(reminder: Reminder) -> Self {
        Self {
            id: reminder.id.to_string(),
            title: reminder.title,
            description: reminder.description,
            kind: reminder.kind.as_str().to_string(),
            reminder_date: reminder.reminder_date.to_string(),
            reminder_time: reminder.reminder_time,
            is_completed: reminder.is_completed,
            frequency: reminder.frequency.as_str().to_string(),
            priority: reminder.priority.as_str().to_string(),
            created_at: reminder.created_at.to_rfc3339(),
        }
    }
}
