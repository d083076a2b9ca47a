pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod users;

pub use login_user::login_user_handler;
pub use refresh_token::refresh_token_handler;
pub use register_user::register_user_handler;
pub use users::{
    deactivate_user_handler, get_user_handler, list_users_handler, update_user_handler,
};

pub use login_user::LoginRequest;
pub use refresh_token::{RefreshTokenRequest, RefreshTokenResponse};
pub use register_user::RegisterRequest;
pub use users::UpdateUserRequest;
