pub mod deactivate_stale_users;
pub mod deactivate_user;
pub mod fetch_users;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod update_user;
