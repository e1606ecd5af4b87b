mod create_news_service;
mod delete_news_service;
mod get_news_service;
mod get_public_news_service;
mod get_public_single_news_service;
mod get_single_news_service;
mod update_news_service;

pub use create_news_service::CreateNewsService;
pub use delete_news_service::DeleteNewsService;
pub use get_news_service::GetNewsService;
pub use get_public_news_service::GetPublicNewsService;
pub use get_public_single_news_service::GetPublicSingleNewsService;
pub use get_single_news_service::GetSingleNewsService;
pub use update_news_service::UpdateNewsService;
