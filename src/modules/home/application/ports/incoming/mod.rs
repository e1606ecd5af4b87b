pub mod get_home_page;
