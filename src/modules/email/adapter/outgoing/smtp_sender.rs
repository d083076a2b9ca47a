use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
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

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Self {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .unwrap()
            .credentials(creds)
            .build();

        Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        }
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        }
    }

    fn base_builder(&self, subject: &str) -> Result<lettre::message::MessageBuilder, String> {
        Ok(Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = self
            .base_builder(subject)?
            .to(to.parse().map_err(|e| format!("{:?}", e))?)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await
    }

    async fn send_batch(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), String> {
        if recipients.is_empty() {
            return Ok(());
        }

        let mut builder = self.base_builder(subject)?;
        for recipient in recipients {
            builder = builder.to(recipient.parse().map_err(|e| format!("{:?}", e))?);
        }

        let email = builder.body(body.to_string()).map_err(|e| e.to_string())?;

        self.mailer.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_send_email_success() {
        let mailer = RecordingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "noreply@example.com");

        let result = sender
            .send_email("student@example.com", "Course updated", "New lessons inside")
            .await;

        assert!(result.is_ok(), "expected Ok, got {result:?}");
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_batch_single_message_many_recipients() {
        let mailer = RecordingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "noreply@example.com");

        let recipients = vec![
            "a@example.com".to_string(),
            "b@example.com".to_string(),
            "c@example.com".to_string(),
        ];
        let result = sender
            .send_batch(&recipients, "Course updated", "New lessons inside")
            .await;

        assert!(result.is_ok(), "expected Ok, got {result:?}");
        // One message, not one per recipient.
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_batch_empty_is_noop() {
        let mailer = RecordingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "noreply@example.com");

        let result = sender.send_batch(&[], "Subject", "Body").await;

        assert!(result.is_ok());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_from_address_fails_before_transport() {
        struct PanickingMailer;

        #[async_trait]
        impl Mailer for PanickingMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("Should not reach mailer with an invalid from address");
            }
        }

        let sender = SmtpEmailSender::new_with_mailer(Box::new(PanickingMailer), "not-an-address");

        let result = sender
            .send_email("student@example.com", "Subject", "Body")
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_recipient_fails_batch() {
        struct PanickingMailer;

        #[async_trait]
        impl Mailer for PanickingMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("Should not reach mailer with an invalid recipient");
            }
        }

        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(PanickingMailer), "noreply@example.com");

        let result = sender
            .send_batch(
                &["ok@example.com".to_string(), "broken".to_string()],
                "Subject",
                "Body",
            )
            .await;

        assert!(result.is_err());
    }
}
