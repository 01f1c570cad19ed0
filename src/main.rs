pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use crate::modules::attendance::adapter::outgoing::attendance_repository_postgres::AttendanceRepositoryPostgres;
use crate::modules::attendance::application::use_cases::attendance_service::{
    AttendanceService, IAttendanceUseCases,
};
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::modules::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::modules::auth::application::use_cases::{
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};
use crate::modules::course::adapter::outgoing::course_repository_postgres::CourseRepositoryPostgres;
use crate::modules::course::application::use_cases::course_service::{
    CourseService, ICourseUseCases,
};
use crate::modules::mental_health::adapter::outgoing::check_in_repository_postgres::CheckInRepositoryPostgres;
use crate::modules::mental_health::application::services::response_selector::ThreadRngSelector;
use crate::modules::mental_health::application::use_cases::{
    check_in_history::{CheckInHistoryUseCase, ICheckInHistoryUseCase},
    check_in_stats::{CheckInStatsUseCase, ICheckInStatsUseCase},
    create_check_in::{CreateCheckInUseCase, ICreateCheckInUseCase},
};
use crate::modules::reminder::adapter::outgoing::reminder_repository_postgres::ReminderRepositoryPostgres;
use crate::modules::reminder::application::use_cases::reminder_service::{
    IReminderUseCases, ReminderService,
};
use crate::modules::timetable::adapter::outgoing::timetable_repository_postgres::TimetableRepositoryPostgres;
use crate::modules::timetable::application::use_cases::timetable_service::{
    ITimetableUseCases, TimetableService,
};
use crate::shared::api::{custom_json_config, ApiResponse};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase>,
    pub create_check_in_use_case: Arc<dyn ICreateCheckInUseCase>,
    pub check_in_history_use_case: Arc<dyn ICheckInHistoryUseCase>,
    pub check_in_stats_use_case: Arc<dyn ICheckInStatsUseCase>,
    pub course_use_cases: Arc<dyn ICourseUseCases>,
    pub attendance_use_cases: Arc<dyn IAttendanceUseCases>,
    pub timetable_use_cases: Arc<dyn ITimetableUseCases>,
    pub reminder_use_cases: Arc<dyn IReminderUseCases>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    let server_url = format!("{host}:{port}");
    info!("Server run on: {server_url}");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let register_user_use_case = RegisterUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_repo.clone(),
        password_hasher,
        Arc::new(jwt_service.clone()),
    );
    let fetch_profile_use_case = FetchProfileUseCase::new(user_repo.clone());
    let update_profile_use_case = UpdateProfileUseCase::new(user_repo);

    let check_in_repo = CheckInRepositoryPostgres::new(Arc::clone(&db_arc));
    let create_check_in_use_case =
        CreateCheckInUseCase::new(check_in_repo.clone(), Arc::new(ThreadRngSelector));
    let check_in_history_use_case = CheckInHistoryUseCase::new(check_in_repo.clone());
    let check_in_stats_use_case = CheckInStatsUseCase::new(check_in_repo);

    let course_use_cases = CourseService::new(CourseRepositoryPostgres::new(Arc::clone(&db_arc)));
    let attendance_use_cases =
        AttendanceService::new(AttendanceRepositoryPostgres::new(Arc::clone(&db_arc)));
    let timetable_use_cases =
        TimetableService::new(TimetableRepositoryPostgres::new(Arc::clone(&db_arc)));
    let reminder_use_cases =
        ReminderService::new(ReminderRepositoryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        create_check_in_use_case: Arc::new(create_check_in_use_case),
        check_in_history_use_case: Arc::new(check_in_history_use_case),
        check_in_stats_use_case: Arc::new(check_in_stats_use_case),
        course_use_cases: Arc::new(course_use_cases),
        attendance_use_cases: Arc::new(attendance_use_cases),
        timetable_use_cases: Arc::new(timetable_use_cases),
        reminder_use_cases: Arc::new(reminder_use_cases),
    };

    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
            .default_service(web::route().to(|| async {
                ApiResponse::not_found("NOT_FOUND", "Route not found")
            }))
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::update_profile_handler);

    // Mental health
    cfg.service(
        crate::modules::mental_health::adapter::incoming::web::routes::create_check_in_handler,
    );
    cfg.service(
        crate::modules::mental_health::adapter::incoming::web::routes::check_in_history_handler,
    );
    cfg.service(
        crate::modules::mental_health::adapter::incoming::web::routes::check_in_stats_handler,
    );

    // Courses. The stats route registers before the {course_id} routes so
    // "stats" is never parsed as a course id.
    cfg.service(crate::modules::course::adapter::incoming::web::routes::course_stats_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::create_course_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::list_courses_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::update_course_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::delete_course_handler);
    cfg.service(crate::modules::course::adapter::incoming::web::routes::add_assessment_handler);

    // Attendance. Stats routes first, same reason.
    cfg.service(
        crate::modules::attendance::adapter::incoming::web::routes::overall_attendance_stats_handler,
    );
    cfg.service(
        crate::modules::attendance::adapter::incoming::web::routes::attendance_stats_handler,
    );
    cfg.service(
        crate::modules::attendance::adapter::incoming::web::routes::mark_attendance_handler,
    );
    cfg.service(
        crate::modules::attendance::adapter::incoming::web::routes::list_attendance_handler,
    );

    // Timetable
    cfg.service(
        crate::modules::timetable::adapter::incoming::web::routes::create_timetable_entry_handler,
    );
    cfg.service(
        crate::modules::timetable::adapter::incoming::web::routes::list_timetable_handler,
    );
    cfg.service(
        crate::modules::timetable::adapter::incoming::web::routes::timetable_by_day_handler,
    );
    cfg.service(
        crate::modules::timetable::adapter::incoming::web::routes::update_timetable_entry_handler,
    );
    cfg.service(
        crate::modules::timetable::adapter::incoming::web::routes::delete_timetable_entry_handler,
    );

    // Reminders. The upcoming route registers before the {reminder_id}
    // routes so "upcoming" is never parsed as a reminder id.
    cfg.service(
        crate::modules::reminder::adapter::incoming::web::routes::upcoming_reminders_handler,
    );
    cfg.service(crate::modules::reminder::adapter::incoming::web::routes::create_reminder_handler);
    cfg.service(crate::modules::reminder::adapter::incoming::web::routes::list_reminders_handler);
    cfg.service(crate::modules::reminder::adapter::incoming::web::routes::update_reminder_handler);
    cfg.service(
        crate::modules::reminder::adapter::incoming::web::routes::complete_reminder_handler,
    );
    cfg.service(crate::modules::reminder::adapter::incoming::web::routes::delete_reminder_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
