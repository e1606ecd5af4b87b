use actix_web::http::header;

/// The only access token the default session stub accepts.
pub const VALID_ADMIN_TOKEN: &str = "valid-admin-token";

pub const TEST_ADMIN_ID: &str = "6c2b3f7e-2a0d-4a47-9a0e-1c4f5d9e8b21";

pub fn admin_bearer() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", VALID_ADMIN_TOKEN))
}
