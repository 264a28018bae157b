//! Outbound WhatsApp / SMS delivery

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use health_agent_config::MessagingConfig;
use health_agent_core::MessageTransport;
use serde::Deserialize;
use uuid::Uuid;

use crate::IntegrationError;

/// Twilio account and sender configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender, e.g. `whatsapp:+14155238886` or `+14155238886`
    pub from: String,
    pub api_base: String,
    pub timeout: Duration,
}

#[derive(Deserialize)]
struct TwilioMessage {
    sid: String,
}

#[derive(Deserialize)]
struct TwilioErrorBody {
    #[serde(default)]
    message: String,
}

/// Twilio Programmable Messaging client
pub struct TwilioTransport {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioTransport {
    pub fn new(config: TwilioConfig) -> Result<Self, IntegrationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IntegrationError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    pub async fn send_message(&self, to: &str, body: &str) -> Result<String, IntegrationError> {
        if to.trim().is_empty() {
            return Err(IntegrationError::InvalidRequest("empty destination".to_string()));
        }

        let params = [
            ("From", self.config.from.as_str()),
            ("To", to),
            ("Body", body),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<TwilioErrorBody>()
                .await
                .map(|b| b.message)
                .unwrap_or_default();
            tracing::warn!(status = %status, detail = %detail, "Twilio rejected message");
            return Err(IntegrationError::from_status(status, "twilio"));
        }

        let message: TwilioMessage = response.json().await?;
        Ok(message.sid)
    }
}

#[async_trait]
impl MessageTransport for TwilioTransport {
    async fn send(&self, to: &str, body: &str) -> health_agent_core::Result<String> {
        let sid = self
            .send_message(to, body)
            .await
            .map_err(|e| health_agent_core::Error::Transport(e.to_string()))?;

        tracing::info!(message_sid = %sid, chars = body.chars().count(), "Message sent");
        Ok(sid)
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "twilio"
    }
}

/// Logs outbound messages instead of delivering them
#[derive(Debug, Clone)]
pub struct LoggingTransport {
    from: String,
}

impl LoggingTransport {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl MessageTransport for LoggingTransport {
    async fn send(&self, to: &str, body: &str) -> health_agent_core::Result<String> {
        let id = format!("SIM{}", Uuid::new_v4().simple());
        tracing::info!(
            message_id = %id,
            from = %self.from,
            to = %to,
            chars = body.chars().count(),
            "Simulated message (delivery not configured)"
        );
        Ok(id)
    }

    fn is_configured(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "logging"
    }
}

/// Transport for one sender address
///
/// Twilio when messaging is enabled, otherwise the logging transport.
pub fn create_transport(config: &MessagingConfig, from: &str) -> Arc<dyn MessageTransport> {
    let credentials = config.account_sid.as_ref().zip(config.auth_token.as_ref());

    match (config.enabled, credentials) {
        (true, Some((sid, token))) => {
            let twilio = TwilioConfig {
                account_sid: sid.clone(),
                auth_token: token.clone(),
                from: from.to_string(),
                api_base: config.api_base.clone(),
                timeout: Duration::from_secs(config.timeout_seconds),
            };
            match TwilioTransport::new(twilio) {
                Ok(transport) => {
                    tracing::info!(from = %from, "Using Twilio transport");
                    Arc::new(transport)
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to build Twilio client, logging only");
                    Arc::new(LoggingTransport::new(from))
                },
            }
        },
        _ => Arc::new(LoggingTransport::new(from)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Form, Path},
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn twilio_router() -> Router {
        Router::new().route(
            "/2010-04-01/Accounts/:sid/Messages.json",
            post(
                |Path(sid): Path<String>,
                 headers: HeaderMap,
                 Form(form): Form<HashMap<String, String>>| async move {
                    if sid != "AC123" || !headers.contains_key("authorization") {
                        return Err((
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"code": 20003, "message": "Authenticate"})),
                        ));
                    }
                    assert_eq!(form.get("From").map(String::as_str), Some("whatsapp:+1415"));
                    Ok(Json(json!({"sid": "SM42", "to": form.get("To")})))
                },
            ),
        )
    }

    fn config(base: String, sid: &str) -> TwilioConfig {
        TwilioConfig {
            account_sid: sid.to_string(),
            auth_token: "token".to_string(),
            from: "whatsapp:+1415".to_string(),
            api_base: base,
            timeout: Duration::from_secs(2),
        }
    }

    #[tokio::test]
    async fn test_twilio_send() {
        let base = serve(twilio_router()).await;
        let transport = TwilioTransport::new(config(base, "AC123")).unwrap();
        let sid = transport.send("whatsapp:+919800000000", "hello").await.unwrap();
        assert_eq!(sid, "SM42");
    }

    #[tokio::test]
    async fn test_twilio_auth_failure() {
        let base = serve(twilio_router()).await;
        let transport = TwilioTransport::new(config(base, "ACbad")).unwrap();
        let err = transport.send_message("+919800000000", "hello").await.unwrap_err();
        assert!(matches!(err, IntegrationError::AuthFailed(_)));
    }

    #[tokio::test]
    async fn test_logging_transport() {
        let transport = LoggingTransport::new("whatsapp:+1415");
        let id = transport.send("+91", "hello").await.unwrap();
        assert!(id.starts_with("SIM"));
        assert!(!transport.is_configured());
    }

    #[test]
    fn test_factory_without_credentials_logs() {
        let transport = create_transport(&MessagingConfig::default(), "+1415");
        assert_eq!(transport.name(), "logging");

        let enabled = MessagingConfig {
            enabled: true,
            account_sid: Some("AC1".into()),
            auth_token: Some("t".into()),
            ..Default::default()
        };
        assert_eq!(create_transport(&enabled, "+1415").name(), "twilio");
    }
}
