use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::attendance::adapter::incoming::web::routes::{
    AttendanceDto, MarkAttendanceDto,
};
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, RegisterRequestDto, RegisterResponse, UpdateProfileDto,
    UserDto,
};
use crate::modules::course::adapter::incoming::web::routes::{
    AddAssessmentDto, AssessmentDto, CourseDto, CreateCourseDto, UpdateCourseDto,
};
use crate::modules::mental_health::adapter::incoming::web::routes::{
    CheckInDto, CreateCheckInDto,
};
use crate::modules::reminder::adapter::incoming::web::routes::{
    CreateReminderDto, ReminderDto, UpdateReminderDto,
};
use crate::modules::timetable::adapter::incoming::web::routes::{
    CreateTimetableEntryDto, TimetableEntryDto, UpdateTimetableEntryDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Companion API",
        version = "1.0.0",
        description = "Student productivity and wellbeing backend"
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::modules::auth::adapter::incoming::web::routes::update_profile_handler,

        // Mental health
        crate::modules::mental_health::adapter::incoming::web::routes::create_check_in_handler,
        crate::modules::mental_health::adapter::incoming::web::routes::check_in_history_handler,
        crate::modules::mental_health::adapter::incoming::web::routes::check_in_stats_handler,

        // Courses
        crate::modules::course::adapter::incoming::web::routes::create_course_handler,
        crate::modules::course::adapter::incoming::web::routes::list_courses_handler,
        crate::modules::course::adapter::incoming::web::routes::course_stats_handler,
        crate::modules::course::adapter::incoming::web::routes::update_course_handler,
        crate::modules::course::adapter::incoming::web::routes::delete_course_handler,
        crate::modules::course::adapter::incoming::web::routes::add_assessment_handler,

        // Attendance
        crate::modules::attendance::adapter::incoming::web::routes::mark_attendance_handler,
        crate::modules::attendance::adapter::incoming::web::routes::list_attendance_handler,
        crate::modules::attendance::adapter::incoming::web::routes::attendance_stats_handler,
        crate::modules::attendance::adapter::incoming::web::routes::overall_attendance_stats_handler,

        // Timetable
        crate::modules::timetable::adapter::incoming::web::routes::create_timetable_entry_handler,
        crate::modules::timetable::adapter::incoming::web::routes::list_timetable_handler,
        crate::modules::timetable::adapter::incoming::web::routes::timetable_by_day_handler,
        crate::modules::timetable::adapter::incoming::web::routes::update_timetable_entry_handler,
        crate::modules::timetable::adapter::incoming::web::routes::delete_timetable_entry_handler,

        // Reminders
        crate::modules::reminder::adapter::incoming::web::routes::create_reminder_handler,
        crate::modules::reminder::adapter::incoming::web::routes::list_reminders_handler,
        crate::modules::reminder::adapter::incoming::web::routes::upcoming_reminders_handler,
        crate::modules::reminder::adapter::incoming::web::routes::update_reminder_handler,
        crate::modules::reminder::adapter::incoming::web::routes::complete_reminder_handler,
        crate::modules::reminder::adapter::incoming::web::routes::delete_reminder_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UserDto>,
            ErrorResponse,
            ErrorDetail,

            // Auth
            RegisterRequestDto,
            RegisterResponse,
            LoginRequestDto,
            LoginResponse,
            UpdateProfileDto,
            UserDto,

            // Mental health
            CreateCheckInDto,
            CheckInDto,

            // Courses
            CreateCourseDto,
            UpdateCourseDto,
            AddAssessmentDto,
            CourseDto,
            AssessmentDto,

            // Attendance
            MarkAttendanceDto,
            AttendanceDto,

            // Timetable
            CreateTimetableEntryDto,
            UpdateTimetableEntryDto,
            TimetableEntryDto,

            // Reminders
            CreateReminderDto,
            UpdateReminderDto,
            ReminderDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and profile"),
        (name = "mental-health", description = "Daily check-ins and wellbeing scores"),
        (name = "courses", description = "Course and assessment tracking"),
        (name = "attendance", description = "Per-course attendance records"),
        (name = "timetable", description = "Weekly class schedule"),
        (name = "reminders", description = "Dated reminders"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
