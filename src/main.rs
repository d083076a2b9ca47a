pub mod modules;
pub use modules::access;
pub use modules::auth;
pub use modules::catalog;
pub use modules::email;
pub use modules::payments;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    deactivate_stale_users::{DeactivateStaleUsersUseCase, IDeactivateStaleUsersUseCase},
    deactivate_user::{DeactivateUserUseCase, IDeactivateUserUseCase},
    fetch_users::{FetchUsersUseCase, IFetchUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};

use crate::catalog::adapter::outgoing::course_repository_postgres::CourseRepositoryPostgres;
use crate::catalog::adapter::outgoing::course_update_dispatcher::CourseUpdateDispatcher;
use crate::catalog::adapter::outgoing::lesson_repository_postgres::LessonRepositoryPostgres;
use crate::catalog::adapter::outgoing::subscription_store_postgres::SubscriptionStorePostgres;
use crate::catalog::application::ports::outgoing::course_update_notifier::CourseUpdateNotifier;
use crate::catalog::application::use_cases::{
    create_course::{CreateCourseUseCase, ICreateCourseUseCase},
    create_lesson::{CreateLessonUseCase, ICreateLessonUseCase},
    delete_course::{DeleteCourseUseCase, IDeleteCourseUseCase},
    delete_lesson::{DeleteLessonUseCase, IDeleteLessonUseCase},
    fetch_courses::{FetchCoursesUseCase, IFetchCoursesUseCase},
    fetch_lessons::{FetchLessonsUseCase, IFetchLessonsUseCase},
    toggle_subscription::{IToggleSubscriptionUseCase, ToggleSubscriptionUseCase},
    update_course::{IUpdateCourseUseCase, UpdateCourseUseCase},
    update_lesson::{IUpdateLessonUseCase, UpdateLessonUseCase},
};

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;

use crate::payments::adapter::outgoing::payment_repository_postgres::PaymentRepositoryPostgres;
use crate::payments::adapter::outgoing::stripe_gateway::StripeCheckoutGateway;
use crate::payments::application::ports::outgoing::CheckoutGateway;
use crate::payments::application::use_cases::{
    initiate_checkout::{IInitiateCheckoutUseCase, InitiateCheckoutUseCase},
    list_payments::{IListPaymentsUseCase, ListPaymentsUseCase},
    settle_payment::{ISettlePaymentUseCase, SettlePaymentUseCase},
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub fetch_users_use_case: Arc<dyn IFetchUsersUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub deactivate_user_use_case: Arc<dyn IDeactivateUserUseCase + Send + Sync>,
    pub fetch_courses_use_case: Arc<dyn IFetchCoursesUseCase + Send + Sync>,
    pub create_course_use_case: Arc<dyn ICreateCourseUseCase + Send + Sync>,
    pub update_course_use_case: Arc<dyn IUpdateCourseUseCase + Send + Sync>,
    pub delete_course_use_case: Arc<dyn IDeleteCourseUseCase + Send + Sync>,
    pub fetch_lessons_use_case: Arc<dyn IFetchLessonsUseCase + Send + Sync>,
    pub create_lesson_use_case: Arc<dyn ICreateLessonUseCase + Send + Sync>,
    pub update_lesson_use_case: Arc<dyn IUpdateLessonUseCase + Send + Sync>,
    pub delete_lesson_use_case: Arc<dyn IDeleteLessonUseCase + Send + Sync>,
    pub toggle_subscription_use_case: Arc<dyn IToggleSubscriptionUseCase + Send + Sync>,
    pub course_update_notifier: Arc<dyn CourseUpdateNotifier + Send + Sync>,
    pub initiate_checkout_use_case: Arc<dyn IInitiateCheckoutUseCase + Send + Sync>,
    pub list_payments_use_case: Arc<dyn IListPaymentsUseCase + Send + Sync>,
    pub settle_payment_use_case: Arc<dyn ISettlePaymentUseCase + Send + Sync>,
}

/// Daily sweep cadence for the inactivity reaper.
const REAPER_INTERVAL_SECS: u64 = 24 * 3600;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // SMTP SETUP
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
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

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db_arc));
    let lesson_repo = LessonRepositoryPostgres::new(Arc::clone(&db_arc));
    let subscription_store = SubscriptionStorePostgres::new(Arc::clone(&db_arc));
    let payment_repo = PaymentRepositoryPostgres::new(Arc::clone(&db_arc));

    let email_sender_arc: Arc<dyn EmailSender> = Arc::new(smtp_sender);
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Arc::new(Argon2Hasher::from_env());
    let gateway_arc: Arc<dyn CheckoutGateway> = Arc::new(StripeCheckoutGateway::from_env());

    let currency = env::var("STRIPE_CURRENCY").unwrap_or_else(|_| "usd".to_string());
    let return_url = env::var("CHECKOUT_RETURN_URL")
        .unwrap_or_else(|_| format!("http://{server_url}/api/payments"));

    // Use cases
    let register_user_use_case =
        RegisterUserUseCase::new(user_repo.clone(), password_hasher.clone());
    let login_user_use_case = LoginUserUseCase::new(
        user_repo.clone(),
        password_hasher,
        Arc::new(jwt_service.clone()),
    );
    let refresh_token_use_case = RefreshTokenUseCase::new(Arc::new(jwt_service.clone()));
    let fetch_users_use_case = FetchUsersUseCase::new(user_repo.clone());
    let update_user_use_case = UpdateUserUseCase::new(user_repo.clone());
    let deactivate_user_use_case = DeactivateUserUseCase::new(user_repo.clone());

    let fetch_courses_use_case =
        FetchCoursesUseCase::new(course_repo.clone(), subscription_store.clone());
    let create_course_use_case = CreateCourseUseCase::new(course_repo.clone());
    let update_course_use_case = UpdateCourseUseCase::new(course_repo.clone());
    let delete_course_use_case = DeleteCourseUseCase::new(course_repo.clone());
    let fetch_lessons_use_case = FetchLessonsUseCase::new(lesson_repo.clone());
    let create_lesson_use_case = CreateLessonUseCase::new(lesson_repo.clone(), course_repo.clone());
    let update_lesson_use_case = UpdateLessonUseCase::new(lesson_repo.clone());
    let delete_lesson_use_case = DeleteLessonUseCase::new(lesson_repo);
    let toggle_subscription_use_case = ToggleSubscriptionUseCase::new(subscription_store);

    let course_update_notifier: Arc<dyn CourseUpdateNotifier + Send + Sync> = Arc::new(
        CourseUpdateDispatcher::new(Arc::clone(&db_arc), email_sender_arc),
    );

    let initiate_checkout_use_case = InitiateCheckoutUseCase::new(
        payment_repo.clone(),
        course_repo,
        gateway_arc,
        currency,
        return_url,
    );
    let list_payments_use_case = ListPaymentsUseCase::new(payment_repo.clone());
    let settle_payment_use_case = SettlePaymentUseCase::new(payment_repo);

    // Scheduled inactivity sweep; the use case itself is idempotent so an
    // overlapping run after a restart cannot double-apply.
    let reaper: Arc<dyn IDeactivateStaleUsersUseCase + Send + Sync> =
        Arc::new(DeactivateStaleUsersUseCase::new(user_repo));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(REAPER_INTERVAL_SECS));
        loop {
            interval.tick().await;
            if let Err(e) = reaper.execute(None).await {
                tracing::error!("stale account sweep failed: {e}");
            }
        }
    });

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        fetch_users_use_case: Arc::new(fetch_users_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        deactivate_user_use_case: Arc::new(deactivate_user_use_case),
        fetch_courses_use_case: Arc::new(fetch_courses_use_case),
        create_course_use_case: Arc::new(create_course_use_case),
        update_course_use_case: Arc::new(update_course_use_case),
        delete_course_use_case: Arc::new(delete_course_use_case),
        fetch_lessons_use_case: Arc::new(fetch_lessons_use_case),
        create_lesson_use_case: Arc::new(create_lesson_use_case),
        update_lesson_use_case: Arc::new(update_lesson_use_case),
        delete_lesson_use_case: Arc::new(delete_lesson_use_case),
        toggle_subscription_use_case: Arc::new(toggle_subscription_use_case),
        course_update_notifier,
        initiate_checkout_use_case: Arc::new(initiate_checkout_use_case),
        list_payments_use_case: Arc::new(list_payments_use_case),
        settle_payment_use_case: Arc::new(settle_payment_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::json_config::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
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
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::deactivate_user_handler);
    // Courses
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_courses_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_course_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_course_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::update_course_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::delete_course_handler);
    // Lessons
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_lessons_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_lesson_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_lesson_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::update_lesson_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::delete_lesson_handler);
    // Subscriptions
    cfg.service(crate::catalog::adapter::incoming::web::routes::toggle_subscription_handler);
    // Payments
    cfg.service(crate::payments::adapter::incoming::web::routes::checkout_handler);
    cfg.service(crate::payments::adapter::incoming::web::routes::list_payments_handler);
    cfg.service(crate::payments::adapter::incoming::web::routes::settle_payment_handler);
}
