use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::use_cases::deactivate_user::IDeactivateUserUseCase;
use crate::modules::auth::application::use_cases::fetch_users::IFetchUsersUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::modules::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::auth::application::use_cases::update_user::IUpdateUserUseCase;
use crate::modules::catalog::application::ports::outgoing::course_update_notifier::CourseUpdateNotifier;
use crate::modules::catalog::application::use_cases::create_course::ICreateCourseUseCase;
use crate::modules::catalog::application::use_cases::create_lesson::ICreateLessonUseCase;
use crate::modules::catalog::application::use_cases::delete_course::IDeleteCourseUseCase;
use crate::modules::catalog::application::use_cases::delete_lesson::IDeleteLessonUseCase;
use crate::modules::catalog::application::use_cases::fetch_courses::IFetchCoursesUseCase;
use crate::modules::catalog::application::use_cases::fetch_lessons::IFetchLessonsUseCase;
use crate::modules::catalog::application::use_cases::toggle_subscription::IToggleSubscriptionUseCase;
use crate::modules::catalog::application::use_cases::update_course::IUpdateCourseUseCase;
use crate::modules::catalog::application::use_cases::update_lesson::IUpdateLessonUseCase;
use crate::modules::payments::application::use_cases::initiate_checkout::IInitiateCheckoutUseCase;
use crate::modules::payments::application::use_cases::list_payments::IListPaymentsUseCase;
use crate::modules::payments::application::use_cases::settle_payment::ISettlePaymentUseCase;
use crate::AppState;

use super::stubs::*;

/// Builds an `AppState` where everything is a panicking stub unless a
/// test swaps in its own mock.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    fetch_users: Arc<dyn IFetchUsersUseCase + Send + Sync>,
    update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    deactivate_user: Arc<dyn IDeactivateUserUseCase + Send + Sync>,
    fetch_courses: Arc<dyn IFetchCoursesUseCase + Send + Sync>,
    create_course: Arc<dyn ICreateCourseUseCase + Send + Sync>,
    update_course: Arc<dyn IUpdateCourseUseCase + Send + Sync>,
    delete_course: Arc<dyn IDeleteCourseUseCase + Send + Sync>,
    fetch_lessons: Arc<dyn IFetchLessonsUseCase + Send + Sync>,
    create_lesson: Arc<dyn ICreateLessonUseCase + Send + Sync>,
    update_lesson: Arc<dyn IUpdateLessonUseCase + Send + Sync>,
    delete_lesson: Arc<dyn IDeleteLessonUseCase + Send + Sync>,
    toggle_subscription: Arc<dyn IToggleSubscriptionUseCase + Send + Sync>,
    course_update_notifier: Arc<dyn CourseUpdateNotifier + Send + Sync>,
    initiate_checkout: Arc<dyn IInitiateCheckoutUseCase + Send + Sync>,
    list_payments: Arc<dyn IListPaymentsUseCase + Send + Sync>,
    settle_payment: Arc<dyn ISettlePaymentUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUser),
            login_user: Arc::new(StubLoginUser),
            refresh_token: Arc::new(StubRefreshToken),
            fetch_users: Arc::new(StubFetchUsers),
            update_user: Arc::new(StubUpdateUser),
            deactivate_user: Arc::new(StubDeactivateUser),
            fetch_courses: Arc::new(StubFetchCourses),
            create_course: Arc::new(StubCreateCourse),
            update_course: Arc::new(StubUpdateCourse),
            delete_course: Arc::new(StubDeleteCourse),
            fetch_lessons: Arc::new(StubFetchLessons),
            create_lesson: Arc::new(StubCreateLesson),
            update_lesson: Arc::new(StubUpdateLesson),
            delete_lesson: Arc::new(StubDeleteLesson),
            toggle_subscription: Arc::new(StubToggleSubscription),
            course_update_notifier: Arc::new(StubCourseUpdateNotifier),
            initiate_checkout: Arc::new(StubInitiateCheckout),
            list_payments: Arc::new(StubListPayments),
            settle_payment: Arc::new(StubSettlePayment),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        use_case: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(use_case);
        self
    }

    pub fn with_login_user(
        mut self,
        use_case: impl ILoginUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_user = Arc::new(use_case);
        self
    }

    pub fn with_refresh_token(
        mut self,
        use_case: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(use_case);
        self
    }

    pub fn with_fetch_users(
        mut self,
        use_case: impl IFetchUsersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_users = Arc::new(use_case);
        self
    }

    pub fn with_update_user(
        mut self,
        use_case: impl IUpdateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user = Arc::new(use_case);
        self
    }

    pub fn with_deactivate_user(
        mut self,
        use_case: impl IDeactivateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.deactivate_user = Arc::new(use_case);
        self
    }

    pub fn with_fetch_courses(
        mut self,
        use_case: impl IFetchCoursesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_courses = Arc::new(use_case);
        self
    }

    pub fn with_create_course(
        mut self,
        use_case: impl ICreateCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_course = Arc::new(use_case);
        self
    }

    pub fn with_update_course(
        mut self,
        use_case: impl IUpdateCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_course = Arc::new(use_case);
        self
    }

    pub fn with_delete_course(
        mut self,
        use_case: impl IDeleteCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_course = Arc::new(use_case);
        self
    }

    pub fn with_fetch_lessons(
        mut self,
        use_case: impl IFetchLessonsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_lessons = Arc::new(use_case);
        self
    }

    pub fn with_create_lesson(
        mut self,
        use_case: impl ICreateLessonUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_lesson = Arc::new(use_case);
        self
    }

    pub fn with_update_lesson(
        mut self,
        use_case: impl IUpdateLessonUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_lesson = Arc::new(use_case);
        self
    }

    pub fn with_delete_lesson(
        mut self,
        use_case: impl IDeleteLessonUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_lesson = Arc::new(use_case);
        self
    }

    pub fn with_toggle_subscription(
        mut self,
        use_case: impl IToggleSubscriptionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.toggle_subscription = Arc::new(use_case);
        self
    }

    pub fn with_course_update_notifier(
        mut self,
        notifier: impl CourseUpdateNotifier + Send + Sync + 'static,
    ) -> Self {
        self.course_update_notifier = Arc::new(notifier);
        self
    }

    pub fn with_initiate_checkout(
        mut self,
        use_case: impl IInitiateCheckoutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.initiate_checkout = Arc::new(use_case);
        self
    }

    pub fn with_list_payments(
        mut self,
        use_case: impl IListPaymentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_payments = Arc::new(use_case);
        self
    }

    pub fn with_settle_payment(
        mut self,
        use_case: impl ISettlePaymentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.settle_payment = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            fetch_users_use_case: self.fetch_users,
            update_user_use_case: self.update_user,
            deactivate_user_use_case: self.deactivate_user,
            fetch_courses_use_case: self.fetch_courses,
            create_course_use_case: self.create_course,
            update_course_use_case: self.update_course,
            delete_course_use_case: self.delete_course,
            fetch_lessons_use_case: self.fetch_lessons,
            create_lesson_use_case: self.create_lesson,
            update_lesson_use_case: self.update_lesson,
            delete_lesson_use_case: self.delete_lesson,
            toggle_subscription_use_case: self.toggle_subscription,
            course_update_notifier: self.course_update_notifier,
            initiate_checkout_use_case: self.initiate_checkout,
            list_payments_use_case: self.list_payments,
            settle_payment_use_case: self.settle_payment,
        })
    }
}
