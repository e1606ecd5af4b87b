mod get_home_page;

pub use get_home_page::*;
