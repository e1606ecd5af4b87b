use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::env;

use crate::email::application::ports::outgoing::email_sender::{
    EmailSendError, EmailSender, OutgoingEmail,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Where outgoing mail is relayed.
#[derive(Debug, Clone, PartialEq)]
pub enum SmtpConfig {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher (Mailpit, MailHog) used when `RUST_ENV=test`.
    Local { host: String, port: u16 },
}

impl SmtpConfig {
    pub fn from_env() -> Result<Self, String> {
        let run_env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        if run_env == "test" {
            let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1025);
            return Ok(SmtpConfig::Local { host, port });
        }

        Ok(SmtpConfig::Relay {
            server: env::var("SMTP_SERVER").map_err(|_| "SMTP_SERVER must be set")?,
            username: env::var("SMTP_USERNAME").map_err(|_| "SMTP_USERNAME must be set")?,
            password: env::var("SMTP_PASSWORD").map_err(|_| "SMTP_PASSWORD must be set")?,
        })
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn from_config(config: &SmtpConfig, from_email: &str) -> Result<Self, EmailSendError> {
        let transport = match config {
            SmtpConfig::Relay {
                server,
                username,
                password,
            } => AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                .map_err(|e| EmailSendError::Transport(e.to_string()))?
                .credentials(Credentials::new(username.clone(), password.clone()))
                .build(),
            SmtpConfig::Local { host, port } => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host.as_str())
                    .port(*port)
                    .build()
            }
        };

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    fn build_message(&self, email: OutgoingEmail) -> Result<Message, EmailSendError> {
        let mut builder = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| EmailSendError::InvalidAddress(format!("from: {:?}", e)))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|e| EmailSendError::InvalidAddress(format!("to: {:?}", e)))?)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(
                reply_to
                    .parse()
                    .map_err(|e| EmailSendError::InvalidAddress(format!("reply-to: {:?}", e)))?,
            );
        }

        builder
            .body(email.html_body)
            .map_err(|e| EmailSendError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let message = self.build_message(email)?;
        self.mailer
            .send(message)
            .await
            .map_err(EmailSendError::Transport)
    }
}
