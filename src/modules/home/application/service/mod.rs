mod get_home_page_service;

pub use get_home_page_service::GetHomePageService;
