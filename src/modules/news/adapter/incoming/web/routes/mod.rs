mod create_news;
mod delete_news;
mod get_news;
mod get_public_news;
mod get_public_single_news;
mod get_single_news;
mod update_news;

pub use create_news::*;
pub use delete_news::*;
pub use get_news::*;
pub use get_public_news::*;
pub use get_public_single_news::*;
pub use get_single_news::*;
pub use update_news::*;
