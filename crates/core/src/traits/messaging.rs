//! Outbound messaging trait

use crate::Result;
use async_trait::async_trait;

/// Outbound message delivery (WhatsApp / SMS)
///
/// Implementations:
/// - `TwilioTransport` - Twilio REST API
/// - `LoggingTransport` - Logs the message and returns a generated id
#[async_trait]
pub trait MessageTransport: Send + Sync + 'static {
    /// Send `body` to `to` and return the provider message id
    ///
    /// `to` is an address as received from the inbound webhook, e.g.
    /// `whatsapp:+919876543210` or `+919876543210`.
    async fn send(&self, to: &str, body: &str) -> Result<String>;

    /// Whether real delivery is configured
    fn is_configured(&self) -> bool;

    fn name(&self) -> &str;
}
