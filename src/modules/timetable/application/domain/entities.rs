use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serialized with capitalized English day names, matching the values
/// clients send in paths and bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Monday" => Some(DayOfWeek::Monday),
            "Tuesday" => Some(DayOfWeek::Tuesday),
            "Wednesday" => Some(DayOfWeek::Wednesday),
            "Thursday" => Some(DayOfWeek::Thursday),
            "Friday" => Some(DayOfWeek::Friday),
            "Saturday" => Some(DayOfWeek::Saturday),
            "Sunday" => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }

    /// Monday-first ordering used when sorting the weekly view.
    pub fn order(&self) -> u8 {
        match self {
            DayOfWeek::Monday => 0,
            DayOfWeek::Tuesday => 1,
            DayOfWeek::Wednesday => 2,
            DayOfWeek::Thursday => 3,
            DayOfWeek::Friday => 4,
            DayOfWeek::Saturday => 5,
            DayOfWeek::Sunday => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    Lecture,
    Lab,
    Tutorial,
    Seminar,
    Other,
}

impl ClassType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::Lecture => "lecture",
            ClassType::Lab => "lab",
            ClassType::Tutorial => "tutorial",
            ClassType::Seminar => "seminar",
            ClassType::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lecture" => Some(ClassType::Lecture),
            "lab" => Some(ClassType::Lab),
            "tutorial" => Some(ClassType::Tutorial),
            "seminar" => Some(ClassType::Seminar),
            "other" => Some(ClassType::Other),
            _ => None,
        }
    }
}

/// One recurring weekly class slot. Times are zero-padded HH:MM strings,
/// which also makes their lexicographic order the chronological order.
#[derive(Debug, Clone)]
pub struct TimetableEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub instructor: String,
    pub class_type: ClassType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
