use serde::Serialize;
use utoipa::ToSchema;

/// The signed-in administrator as reported by the identity provider.
///
/// There are no roles: any valid session is an admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminIdentity {
    #[schema(example = "6c2b3f7e-2a0d-4a47-9a0e-1c4f5d9e8b21")]
    pub id: String,

    #[schema(example = "curator@gallery.example")]
    pub email: Option<String>,
}

/// Tokens issued by the identity provider for one sign-in.
#[derive(Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds, when the provider reports it.
    pub expires_in: Option<i64>,
    pub user: AdminIdentity,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated(AdminIdentity),
    Anonymous,
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }
}
