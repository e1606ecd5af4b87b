mod create_news;
mod delete_news;
mod get_news;
mod get_public_news;
mod get_public_single_news;
mod get_single_news;
mod update_news;

pub use create_news::{CreateNewsCommand, CreateNewsError, CreateNewsUseCase};
pub use delete_news::{DeleteNewsError, DeleteNewsUseCase};
pub use get_news::{GetNewsError, GetNewsUseCase};
pub use get_public_news::{GetPublicNewsError, GetPublicNewsUseCase};
pub use get_public_single_news::{GetPublicSingleNewsError, GetPublicSingleNewsUseCase};
pub use get_single_news::{GetSingleNewsError, GetSingleNewsUseCase};
pub use update_news::{UpdateNewsError, UpdateNewsUseCase};
