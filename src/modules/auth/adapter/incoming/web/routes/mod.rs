mod check_session;
mod login;
mod logout;
mod refresh_session;

pub use check_session::*;
pub use login::*;
pub use logout::*;
pub use refresh_session::*;
