use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::attendance::application::domain::entities::{
    AttendanceRecord, AttendanceStatus,
};
use crate::modules::attendance::application::use_cases::attendance_service::{
    AttendanceError, AttendanceStats, IAttendanceUseCases,
};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::ProfilePatch;
use crate::modules::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterRequest, RegisterUserError, RegisterUserResponse,
};
use crate::modules::auth::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError,
};
use crate::modules::course::application::domain::entities::{Assessment, Course};
use crate::modules::course::application::ports::outgoing::CoursePatch;
use crate::modules::course::application::use_cases::course_service::{
    CourseError, CourseStats, CreateCourseRequest, ICourseUseCases,
};
use crate::modules::mental_health::application::use_cases::check_in_history::{
    CheckInHistoryError, CheckInPage, ICheckInHistoryUseCase,
};
use crate::modules::mental_health::application::use_cases::check_in_stats::{
    CheckInStats, CheckInStatsError, ICheckInStatsUseCase,
};
use crate::modules::mental_health::application::use_cases::create_check_in::{
    CheckInOutcome, CreateCheckInError, CreateCheckInRequest, ICreateCheckInUseCase,
};
use crate::modules::reminder::application::domain::entities::{
    Frequency, Priority, Reminder, ReminderKind,
};
use crate::modules::reminder::application::ports::outgoing::ReminderPatch;
use crate::modules::reminder::application::use_cases::reminder_service::{
    CreateReminderRequest, IReminderUseCases, ReminderError,
};
use crate::modules::timetable::application::domain::entities::{
    ClassType, DayOfWeek, TimetableEntry,
};
use crate::modules::timetable::application::ports::outgoing::TimetableEntryPatch;
use crate::modules::timetable::application::use_cases::timetable_service::{
    CreateTimetableEntryRequest, ITimetableUseCases, TimetableError,
};

/// Baseline profile used across handler tests.
pub fn test_user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Jane Doe".to_string(),
        email: "jane@uni.edu".to_string(),
        password_hash: "hashed".to_string(),
        student_id: Some("S-100".to_string()),
        university: "State University".to_string(),
        department: "Computer Science".to_string(),
        avatar: None,
        stress_level: 2,
        mental_health_score: 100,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// Default slot fillers. Handlers under test replace the slots they use;
// touching any of these means the test wired the wrong use case.

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<User, FetchProfileError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _patch: ProfilePatch,
    ) -> Result<User, UpdateProfileError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubCreateCheckInUseCase;

#[async_trait]
impl ICreateCheckInUseCase for StubCreateCheckInUseCase {
    async fn execute(
        &self,
        _request: CreateCheckInRequest,
    ) -> Result<CheckInOutcome, CreateCheckInError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubCheckInHistoryUseCase;

#[async_trait]
impl ICheckInHistoryUseCase for StubCheckInHistoryUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _limit: Option<u64>,
        _skip: Option<u64>,
    ) -> Result<CheckInPage, CheckInHistoryError> {
        unimplemented!("not used in this test")
    }
}

pub struct StubCheckInStatsUseCase;

#[async_trait]
impl ICheckInStatsUseCase for StubCheckInStatsUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<CheckInStats, CheckInStatsError> {
        unimplemented!("not used in this test")
    }
}

fn course(user_id: Uuid, name: &str, code: &str, credits: i32) -> Course {
    let now = Utc::now();
    Course {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_string(),
        code: code.to_string(),
        instructor: "Dr. Ada".to_string(),
        credits,
        grade: None,
        completion_percentage: 40,
        assessments: vec![],
        start_date: None,
        end_date: None,
        created_at: now,
        updated_at: now,
    }
}

/// Canned course behavior shared by the course handler tests. `Uuid::nil()`
/// stands in for a missing course.
#[derive(Default, Clone)]
pub struct MockCourseUseCases;

#[async_trait]
impl ICourseUseCases for MockCourseUseCases {
    async fn create(&self, request: CreateCourseRequest) -> Result<Course, CourseError> {
        let mut created = course(request.user_id, &request.name, &request.code, request.credits);
        created.instructor = request.instructor;
        created.completion_percentage = 0;
        created.start_date = request.start_date;
        created.end_date = request.end_date;
        Ok(created)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Course>, CourseError> {
        Ok(vec![
            course(user_id, "Algorithms", "CS201", 4),
            course(user_id, "Databases", "CS305", 3),
        ])
    }

    async fn update(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, CourseError> {
        if course_id.is_nil() {
            return Err(CourseError::NotFound);
        }
        let mut updated = course(user_id, "Algorithms", "CS201", 4);
        updated.id = course_id;
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(code) = patch.code {
            updated.code = code;
        }
        if let Some(instructor) = patch.instructor {
            updated.instructor = instructor;
        }
        if let Some(credits) = patch.credits {
            updated.credits = credits;
        }
        if let Some(completion) = patch.completion_percentage {
            updated.completion_percentage = completion;
        }
        if let Some(grade) = patch.grade {
            updated.grade = Some(grade);
        }
        Ok(updated)
    }

    async fn delete(&self, _user_id: Uuid, course_id: Uuid) -> Result<(), CourseError> {
        if course_id.is_nil() {
            return Err(CourseError::NotFound);
        }
        Ok(())
    }

    async fn add_assessment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        assessment: Assessment,
    ) -> Result<Course, CourseError> {
        if course_id.is_nil() {
            return Err(CourseError::NotFound);
        }
        let mut updated = course(user_id, "Algorithms", "CS201", 4);
        updated.id = course_id;
        updated.assessments.push(assessment);
        Ok(updated)
    }

    async fn stats(&self, _user_id: Uuid) -> Result<CourseStats, CourseError> {
        Ok(CourseStats {
            total_courses: 2,
            average_completion: "60.00".to_string(),
            courses_with_grades: 1,
            total_credits: 7,
        })
    }
}

fn attendance_record(
    user_id: Uuid,
    course_id: Uuid,
    date: NaiveDate,
    status: AttendanceStatus,
) -> AttendanceRecord {
    let now = Utc::now();
    AttendanceRecord {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        date,
        status,
        remarks: String::new(),
        created_at: now,
        updated_at: now,
    }
}

fn canned_attendance_stats() -> AttendanceStats {
    AttendanceStats {
        total: 5,
        present: 3,
        absent: 1,
        late: 1,
        excused: 0,
        attendance_percentage: "60.00".to_string(),
    }
}

#[derive(Default, Clone)]
pub struct MockAttendanceUseCases;

#[async_trait]
impl IAttendanceUseCases for MockAttendanceUseCases {
    async fn mark(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        date: NaiveDate,
        status: AttendanceStatus,
        remarks: Option<String>,
    ) -> Result<AttendanceRecord, AttendanceError> {
        if course_id.is_nil() {
            return Err(AttendanceError::CourseNotFound);
        }
        let mut record = attendance_record(user_id, course_id, date, status);
        record.remarks = remarks.unwrap_or_default();
        Ok(record)
    }

    async fn list(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        Ok(vec![
            attendance_record(user_id, course_id, wednesday, AttendanceStatus::Present),
            attendance_record(user_id, course_id, monday, AttendanceStatus::Late),
        ])
    }

    async fn course_stats(
        &self,
        _user_id: Uuid,
        _course_id: Uuid,
    ) -> Result<AttendanceStats, AttendanceError> {
        Ok(canned_attendance_stats())
    }

    async fn overall_stats(&self, _user_id: Uuid) -> Result<AttendanceStats, AttendanceError> {
        Ok(canned_attendance_stats())
    }
}

fn timetable_entry(user_id: Uuid, day: DayOfWeek, start: &str) -> TimetableEntry {
    let now = Utc::now();
    TimetableEntry {
        id: Uuid::new_v4(),
        user_id,
        course_id: Uuid::new_v4(),
        day_of_week: day,
        start_time: start.to_string(),
        end_time: "10:30".to_string(),
        location: "Room 12".to_string(),
        instructor: "Dr. Ada".to_string(),
        class_type: ClassType::Lecture,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default, Clone)]
pub struct MockTimetableUseCases;

#[async_trait]
impl ITimetableUseCases for MockTimetableUseCases {
    async fn create(
        &self,
        request: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry, TimetableError> {
        if request.course_id.is_nil() {
            return Err(TimetableError::CourseNotFound);
        }
        let now = Utc::now();
        Ok(TimetableEntry {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            course_id: request.course_id,
            day_of_week: request.day_of_week,
            start_time: request.start_time,
            end_time: request.end_time,
            location: request.location,
            instructor: request.instructor,
            class_type: request.class_type,
            created_at: now,
            updated_at: now,
        })
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<TimetableEntry>, TimetableError> {
        Ok(vec![
            timetable_entry(user_id, DayOfWeek::Monday, "09:00"),
            timetable_entry(user_id, DayOfWeek::Friday, "08:00"),
        ])
    }

    async fn list_by_day(
        &self,
        user_id: Uuid,
        day: DayOfWeek,
    ) -> Result<Vec<TimetableEntry>, TimetableError> {
        Ok(vec![timetable_entry(user_id, day, "09:00")])
    }

    async fn update(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        patch: TimetableEntryPatch,
    ) -> Result<TimetableEntry, TimetableError> {
        if entry_id.is_nil() {
            return Err(TimetableError::NotFound);
        }
        let mut entry = timetable_entry(user_id, DayOfWeek::Monday, "09:00");
        entry.id = entry_id;
        if let Some(day) = patch.day_of_week {
            entry.day_of_week = day;
        }
        if let Some(start) = patch.start_time {
            entry.start_time = start;
        }
        if let Some(end) = patch.end_time {
            entry.end_time = end;
        }
        if let Some(location) = patch.location {
            entry.location = location;
        }
        if let Some(instructor) = patch.instructor {
            entry.instructor = instructor;
        }
        if let Some(class_type) = patch.class_type {
            entry.class_type = class_type;
        }
        Ok(entry)
    }

    async fn delete(&self, _user_id: Uuid, entry_id: Uuid) -> Result<(), TimetableError> {
        if entry_id.is_nil() {
            return Err(TimetableError::NotFound);
        }
        Ok(())
    }
}

fn reminder(user_id: Uuid, title: &str, completed: bool) -> Reminder {
    let now = Utc::now();
    Reminder {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_string(),
        description: String::new(),
        kind: ReminderKind::Custom,
        reminder_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        reminder_time: "09:00".to_string(),
        is_completed: completed,
        notification_sent: false,
        frequency: Frequency::Once,
        priority: Priority::Medium,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default, Clone)]
pub struct MockReminderUseCases;

#[async_trait]
impl IReminderUseCases for MockReminderUseCases {
    async fn create(&self, request: CreateReminderRequest) -> Result<Reminder, ReminderError> {
        let mut created = reminder(request.user_id, &request.title, false);
        created.description = request.description;
        created.kind = request.kind;
        created.reminder_date = request.reminder_date;
        created.reminder_time = request.reminder_time;
        created.frequency = request.frequency;
        created.priority = request.priority;
        Ok(created)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderError> {
        Ok(vec![
            reminder(user_id, "Submit lab report", false),
            reminder(user_id, "Book dentist", true),
        ])
    }

    async fn upcoming(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderError> {
        Ok(vec![reminder(user_id, "Submit lab report", false)])
    }

    async fn update(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
        patch: ReminderPatch,
    ) -> Result<Reminder, ReminderError> {
        if reminder_id.is_nil() {
            return Err(ReminderError::NotFound);
        }
        let mut updated = reminder(user_id, "Submit lab report", false);
        updated.id = reminder_id;
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        if let Some(kind) = patch.kind {
            updated.kind = kind;
        }
        if let Some(date) = patch.reminder_date {
            updated.reminder_date = date;
        }
        if let Some(time) = patch.reminder_time {
            updated.reminder_time = time;
        }
        if let Some(frequency) = patch.frequency {
            updated.frequency = frequency;
        }
        if let Some(priority) = patch.priority {
            updated.priority = priority;
        }
        if let Some(completed) = patch.is_completed {
            updated.is_completed = completed;
        }
        Ok(updated)
    }

    async fn complete(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
    ) -> Result<Reminder, ReminderError> {
        if reminder_id.is_nil() {
            return Err(ReminderError::NotFound);
        }
        let mut completed = reminder(user_id, "Submit lab report", true);
        completed.id = reminder_id;
        Ok(completed)
    }

    async fn delete(&self, _user_id: Uuid, reminder_id: Uuid) -> Result<(), ReminderError> {
        if reminder_id.is_nil() {
            return Err(ReminderError::NotFound);
        }
        Ok(())
    }
}
