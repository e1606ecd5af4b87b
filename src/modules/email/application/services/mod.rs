mod contact_message_service;

pub use contact_message_service::ContactMessageService;
