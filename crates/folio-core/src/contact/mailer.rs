use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::EmailJsConfig;
use crate::{Error, Result};

/// Identifiers issued by the email service, passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailCredentials {
    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Field bag forwarded as the template parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DeliveryRequest {
    pub credentials: EmailCredentials,
    pub fields: ContactMessage,
}

/// External transactional email service
///
/// Only success or failure is observable; the failure detail is for logs.
#[async_trait::async_trait]
pub trait EmailCollaborator: Send + Sync {
    async fn send_form(&self, request: &DeliveryRequest) -> Result<()>;
}

#[derive(Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

impl<'a> From<&'a DeliveryRequest> for SendPayload<'a> {
    fn from(request: &'a DeliveryRequest) -> Self {
        Self {
            service_id: &request.credentials.service_id,
            template_id: &request.credentials.template_id,
            user_id: &request.credentials.public_key,
            template_params: &request.fields,
        }
    }
}

/// EmailJS REST client
pub struct EmailJsClient {
    client: Client,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn from_config(config: &EmailJsConfig) -> Result<Self> {
        Self::new(&config.endpoint, Duration::from_secs(config.request_timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl EmailCollaborator for EmailJsClient {
    async fn send_form(&self, request: &DeliveryRequest) -> Result<()> {
        let payload = SendPayload::from(request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "EmailJS accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, body = %body, "EmailJS rejected message");
        Err(Error::Delivery(format!("EmailJS returned {}", status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn request() -> DeliveryRequest {
        DeliveryRequest {
            credentials: EmailCredentials {
                service_id: "service_abc".to_string(),
                template_id: "template_xyz".to_string(),
                public_key: "pk_123".to_string(),
            },
            fields: ContactMessage {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                message: "Hi".to_string(),
            },
        }
    }

    /// Serve one request with `status`, handing back the request body
    async fn serve_once(status: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let body = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let length = text[..split]
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    let body = &text[split + 4..];
                    if body.len() >= length || n == 0 {
                        break body.to_string();
                    }
                }
                if n == 0 {
                    break String::new();
                }
            };
            let reply = format!("HTTP/1.1 {}\r\ncontent-length: 2\r\nconnection: close\r\n\r\nOK", status);
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            body
        });

        (format!("http://{}/api/v1.0/email/send", addr), handle)
    }

    #[test]
    fn test_payload_shape() {
        let request = request();
        let value = serde_json::to_value(SendPayload::from(&request)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "name": "Asha",
                    "email": "asha@example.com",
                    "message": "Hi"
                }
            })
        );
    }

    #[test]
    fn test_credentials_complete() {
        assert!(request().credentials.is_complete());
        assert!(!EmailCredentials::default().is_complete());
    }

    #[tokio::test]
    async fn test_success_status_is_delivered() {
        let (endpoint, server) = serve_once("200 OK").await;
        let client = EmailJsClient::new(&endpoint, Duration::from_secs(5)).unwrap();

        client.send_form(&request()).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(body["template_params"]["name"], "Asha");
        assert_eq!(body["user_id"], "pk_123");
    }

    #[tokio::test]
    async fn test_error_status_is_delivery_failure() {
        let (endpoint, server) = serve_once("400 Bad Request").await;
        let client = EmailJsClient::new(&endpoint, Duration::from_secs(5)).unwrap();

        let err = client.send_form(&request()).await.unwrap_err();
        assert!(matches!(err, Error::Delivery(_)));
        server.await.unwrap();
    }
}
