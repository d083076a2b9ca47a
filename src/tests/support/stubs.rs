//! Default stand-ins for every use case in `AppState`. Each panics when
//! called; a test overrides only the ones its handler exercises.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::Subject;
use crate::modules::auth::application::domain::UserProfile;
use crate::modules::auth::application::ports::outgoing::user_repository::UpdateProfileData;
use crate::modules::auth::application::use_cases::deactivate_user::IDeactivateUserUseCase;
use crate::modules::auth::application::use_cases::fetch_users::IFetchUsersUseCase;
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginResponse,
};
use crate::modules::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserData, RegisterUserError,
};
use crate::modules::auth::application::use_cases::update_user::IUpdateUserUseCase;
use crate::modules::catalog::application::domain::{Course, CourseDetail, Lesson};
use crate::modules::catalog::application::ports::outgoing::course_repository::UpdateCourseData;
use crate::modules::catalog::application::ports::outgoing::course_update_notifier::{
    CourseUpdateNotifier, NotifyError, NotifyOutcome,
};
use crate::modules::catalog::application::ports::outgoing::lesson_repository::UpdateLessonData;
use crate::modules::catalog::application::use_cases::create_course::{
    CreateCourseInput, ICreateCourseUseCase,
};
use crate::modules::catalog::application::use_cases::create_lesson::{
    CreateLessonInput, ICreateLessonUseCase,
};
use crate::modules::catalog::application::use_cases::delete_course::IDeleteCourseUseCase;
use crate::modules::catalog::application::use_cases::delete_lesson::IDeleteLessonUseCase;
use crate::modules::catalog::application::use_cases::fetch_courses::IFetchCoursesUseCase;
use crate::modules::catalog::application::use_cases::fetch_lessons::IFetchLessonsUseCase;
use crate::modules::catalog::application::use_cases::toggle_subscription::{
    IToggleSubscriptionUseCase, ToggleResult,
};
use crate::modules::catalog::application::use_cases::update_course::IUpdateCourseUseCase;
use crate::modules::catalog::application::use_cases::update_lesson::IUpdateLessonUseCase;
use crate::modules::payments::application::domain::{Payment, PaymentStatus};
use crate::modules::payments::application::use_cases::initiate_checkout::{
    CheckoutInput, IInitiateCheckoutUseCase,
};
use crate::modules::payments::application::use_cases::list_payments::{
    IListPaymentsUseCase, PaymentQuery,
};
use crate::modules::payments::application::use_cases::settle_payment::ISettlePaymentUseCase;
use crate::shared::error::CoreError;

pub struct StubRegisterUser;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUser {
    async fn execute(&self, _: RegisterUserData) -> Result<UserProfile, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLoginUser;

#[async_trait]
impl ILoginUserUseCase for StubLoginUser {
    async fn execute(&self, _: &str, _: &str) -> Result<LoginResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRefreshToken;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshToken {
    async fn execute(&self, _: &str) -> Result<String, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFetchUsers;

#[async_trait]
impl IFetchUsersUseCase for StubFetchUsers {
    async fn list(&self, _: &Subject) -> Result<Vec<UserProfile>, CoreError> {
        unimplemented!("Not used in this test")
    }

    async fn get(&self, _: &Subject, _: Uuid) -> Result<UserProfile, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateUser;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUser {
    async fn execute(
        &self,
        _: &Subject,
        _: Uuid,
        _: UpdateProfileData,
    ) -> Result<UserProfile, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeactivateUser;

#[async_trait]
impl IDeactivateUserUseCase for StubDeactivateUser {
    async fn execute(&self, _: &Subject, _: Uuid) -> Result<(), CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFetchCourses;

#[async_trait]
impl IFetchCoursesUseCase for StubFetchCourses {
    async fn list(&self, _: &Subject) -> Result<Vec<Course>, CoreError> {
        unimplemented!("Not used in this test")
    }

    async fn detail(&self, _: Option<&Subject>, _: Uuid) -> Result<CourseDetail, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreateCourse;

#[async_trait]
impl ICreateCourseUseCase for StubCreateCourse {
    async fn execute(&self, _: &Subject, _: CreateCourseInput) -> Result<Course, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateCourse;

#[async_trait]
impl IUpdateCourseUseCase for StubUpdateCourse {
    async fn execute(
        &self,
        _: &Subject,
        _: Uuid,
        _: UpdateCourseData,
    ) -> Result<Course, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeleteCourse;

#[async_trait]
impl IDeleteCourseUseCase for StubDeleteCourse {
    async fn execute(&self, _: &Subject, _: Uuid) -> Result<(), CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFetchLessons;

#[async_trait]
impl IFetchLessonsUseCase for StubFetchLessons {
    async fn list(&self, _: &Subject) -> Result<Vec<Lesson>, CoreError> {
        unimplemented!("Not used in this test")
    }

    async fn get(&self, _: &Subject, _: Uuid) -> Result<Lesson, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreateLesson;

#[async_trait]
impl ICreateLessonUseCase for StubCreateLesson {
    async fn execute(&self, _: &Subject, _: CreateLessonInput) -> Result<Lesson, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateLesson;

#[async_trait]
impl IUpdateLessonUseCase for StubUpdateLesson {
    async fn execute(
        &self,
        _: &Subject,
        _: Uuid,
        _: UpdateLessonData,
    ) -> Result<Lesson, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeleteLesson;

#[async_trait]
impl IDeleteLessonUseCase for StubDeleteLesson {
    async fn execute(&self, _: &Subject, _: Uuid) -> Result<(), CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubToggleSubscription;

#[async_trait]
impl IToggleSubscriptionUseCase for StubToggleSubscription {
    async fn execute(&self, _: Uuid, _: Uuid) -> Result<ToggleResult, CoreError> {
        unimplemented!("Not used in this test")
    }
}

/// Notifier stub is callable (not panicking): update handlers detach a
/// notification task even in tests.
pub struct StubCourseUpdateNotifier;

#[async_trait]
impl CourseUpdateNotifier for StubCourseUpdateNotifier {
    async fn notify(&self, _: Uuid) -> Result<NotifyOutcome, NotifyError> {
        Ok(NotifyOutcome::Suppressed)
    }
}

pub struct StubInitiateCheckout;

#[async_trait]
impl IInitiateCheckoutUseCase for StubInitiateCheckout {
    async fn execute(&self, _: Uuid, _: CheckoutInput) -> Result<Payment, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListPayments;

#[async_trait]
impl IListPaymentsUseCase for StubListPayments {
    async fn execute(&self, _: &Subject, _: PaymentQuery) -> Result<Vec<Payment>, CoreError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubSettlePayment;

#[async_trait]
impl ISettlePaymentUseCase for StubSettlePayment {
    async fn execute(
        &self,
        _: &Subject,
        _: Uuid,
        _: PaymentStatus,
    ) -> Result<Payment, CoreError> {
        unimplemented!("Not used in this test")
    }
}
