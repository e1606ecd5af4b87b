use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpResponse;
use tracing::error;

use crate::auth::application::domain::entities::Session;
use crate::shared::api::ApiResponse;

pub const ACCESS_TOKEN_COOKIE: &str = "gallery_access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "gallery_refresh_token";

const DEFAULT_ACCESS_MAX_AGE_SECS: i64 = 60 * 60;
const REFRESH_MAX_AGE_SECS: i64 = 30 * 24 * 60 * 60;

/// Attributes shared by both session cookies.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    /// `false` only for plain-http local development.
    pub secure: bool,
}

impl SessionCookieConfig {
    pub fn from_env() -> Self {
        let secure = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| !v.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Self { secure }
    }

    fn build(&self, name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build(name, value)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(max_age_secs))
            .finish()
    }

    pub fn session_cookies(&self, session: &Session) -> [Cookie<'static>; 2] {
        let access_max_age = session
            .expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_ACCESS_MAX_AGE_SECS);

        [
            self.build(
                ACCESS_TOKEN_COOKIE,
                session.access_token.clone(),
                access_max_age,
            ),
            self.build(
                REFRESH_TOKEN_COOKIE,
                session.refresh_token.clone(),
                REFRESH_MAX_AGE_SECS,
            ),
        ]
    }

    pub fn cleared_cookies(&self) -> [Cookie<'static>; 2] {
        [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE].map(|name| {
            let mut cookie = self.build(name, String::new(), 0);
            cookie.make_removal();
            cookie
        })
    }
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self { secure: true }
    }
}

/// Attaches `cookies` to `resp`; a header encoding failure becomes a 500.
pub fn with_cookies(mut resp: HttpResponse, cookies: &[Cookie<'_>]) -> HttpResponse {
    for cookie in cookies {
        if let Err(e) = resp.add_cookie(cookie) {
            error!(cookie = cookie.name(), "Failed to set cookie: {}", e);
            return ApiResponse::internal_error();
        }
    }
    resp
}
