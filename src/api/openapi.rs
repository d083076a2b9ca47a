use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequest, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
};
use crate::auth::application::domain::UserProfile;
use crate::auth::application::use_cases::login_user::LoginResponse;

// Subscriptions & payments
use crate::catalog::adapter::incoming::web::routes::{
    ToggleSubscriptionRequest, ToggleSubscriptionResponse,
};
use crate::payments::adapter::incoming::web::routes::CheckoutRequest;
use crate::payments::application::domain::{Payment, PaymentMethod, PaymentStatus};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS Backend API",
        version = "1.0.0",
        description = "API documentation for the learning management backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,

        // Subscription endpoints
        crate::catalog::adapter::incoming::web::routes::toggle_subscription::toggle_subscription_handler,

        // Payment endpoints
        crate::payments::adapter::incoming::web::routes::checkout::checkout_handler,

        // User endpoints
        // list_users_handler,
        // get_user_handler,
        // update_user_handler,
        // deactivate_user_handler,

        // Course endpoints
        // list_courses_handler,
        // get_course_handler,
        // create_course_handler,
        // update_course_handler,
        // delete_course_handler,

        // Lesson endpoints
        // list_lessons_handler,
        // get_lesson_handler,
        // create_lesson_handler,
        // update_lesson_handler,
        // delete_lesson_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UserProfile>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            RefreshTokenRequest,
            RefreshTokenResponse,
            UserProfile,

            // Subscription DTOs
            ToggleSubscriptionRequest,
            ToggleSubscriptionResponse,

            // Payment DTOs
            CheckoutRequest,
            Payment,
            PaymentMethod,
            PaymentStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and token endpoints"),
        (name = "subscriptions", description = "Course subscription toggle"),
        (name = "payments", description = "Checkout and payment history"),
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
                        .build(),
                ),
            );
        }
    }
}
