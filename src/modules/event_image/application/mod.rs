pub mod domain;
pub mod event_image_use_cases;
pub mod ports;
pub mod service;
