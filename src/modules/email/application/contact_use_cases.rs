use std::sync::Arc;

use crate::email::application::ports::incoming::send_contact_message::SendContactMessageUseCase;

#[derive(Clone)]
pub struct ContactUseCases {
    pub send: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}
