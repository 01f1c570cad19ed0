use std::sync::Arc;

use actix_web::web;

use crate::modules::attendance::application::use_cases::attendance_service::IAttendanceUseCases;
use crate::modules::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::auth::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::modules::course::application::use_cases::course_service::ICourseUseCases;
use crate::modules::mental_health::application::use_cases::check_in_history::ICheckInHistoryUseCase;
use crate::modules::mental_health::application::use_cases::check_in_stats::ICheckInStatsUseCase;
use crate::modules::mental_health::application::use_cases::create_check_in::ICreateCheckInUseCase;
use crate::modules::reminder::application::use_cases::reminder_service::IReminderUseCases;
use crate::modules::timetable::application::use_cases::timetable_service::ITimetableUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an [`AppState`] where every slot is a stub; tests override only
/// the use cases their handler touches.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase>,
    login_user: Arc<dyn ILoginUserUseCase>,
    fetch_profile: Arc<dyn IFetchProfileUseCase>,
    update_profile: Arc<dyn IUpdateProfileUseCase>,
    create_check_in: Arc<dyn ICreateCheckInUseCase>,
    check_in_history: Arc<dyn ICheckInHistoryUseCase>,
    check_in_stats: Arc<dyn ICheckInStatsUseCase>,
    course_use_cases: Arc<dyn ICourseUseCases>,
    attendance_use_cases: Arc<dyn IAttendanceUseCases>,
    timetable_use_cases: Arc<dyn ITimetableUseCases>,
    reminder_use_cases: Arc<dyn IReminderUseCases>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            create_check_in: Arc::new(StubCreateCheckInUseCase),
            check_in_history: Arc::new(StubCheckInHistoryUseCase),
            check_in_stats: Arc::new(StubCheckInStatsUseCase),
            course_use_cases: Arc::new(MockCourseUseCases),
            attendance_use_cases: Arc::new(MockAttendanceUseCases),
            timetable_use_cases: Arc::new(MockTimetableUseCases),
            reminder_use_cases: Arc::new(MockReminderUseCases),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl IFetchProfileUseCase + 'static) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl IUpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_create_check_in(mut self, uc: impl ICreateCheckInUseCase + 'static) -> Self {
        self.create_check_in = Arc::new(uc);
        self
    }

    pub fn with_check_in_history(mut self, uc: impl ICheckInHistoryUseCase + 'static) -> Self {
        self.check_in_history = Arc::new(uc);
        self
    }

    pub fn with_check_in_stats(mut self, uc: impl ICheckInStatsUseCase + 'static) -> Self {
        self.check_in_stats = Arc::new(uc);
        self
    }

    pub fn with_course_use_cases(mut self, uc: impl ICourseUseCases + 'static) -> Self {
        self.course_use_cases = Arc::new(uc);
        self
    }

    pub fn with_attendance_use_cases(mut self, uc: impl IAttendanceUseCases + 'static) -> Self {
        self.attendance_use_cases = Arc::new(uc);
        self
    }

    pub fn with_timetable_use_cases(mut self, uc: impl ITimetableUseCases + 'static) -> Self {
        self.timetable_use_cases = Arc::new(uc);
        self
    }

    pub fn with_reminder_use_cases(mut self, uc: impl IReminderUseCases + 'static) -> Self {
        self.reminder_use_cases = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            fetch_profile_use_case: self.fetch_profile,
            update_profile_use_case: self.update_profile,
            create_check_in_use_case: self.create_check_in,
            check_in_history_use_case: self.check_in_history,
            check_in_stats_use_case: self.check_in_stats,
            course_use_cases: self.course_use_cases,
            attendance_use_cases: self.attendance_use_cases,
            timetable_use_cases: self.timetable_use_cases,
            reminder_use_cases: self.reminder_use_cases,
        })
    }
}
