pub mod domain;
pub mod exhibition_use_cases;
pub mod ports;
pub mod service;
