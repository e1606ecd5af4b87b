mod admin_user;

pub use admin_user::{extract_access_token, AdminUser};
