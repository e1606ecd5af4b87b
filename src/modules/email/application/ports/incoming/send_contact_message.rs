use async_trait::async_trait;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendContactMessageError {
    #[error("{0}")]
    Validation(String),

    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError>;
}
