//! Centralized constants for the health agent
//!
//! Default values used by settings and by components constructed without
//! settings (tests, tools).

/// Lexical matching
pub mod classifier {
    /// Similarity must be strictly above this to count as a match
    pub const MATCH_THRESHOLD: f32 = 0.3;

    /// Confidence reported for default/help replies and failed matches
    pub const DEFAULT_CONFIDENCE: f32 = 0.1;
}

/// Outbound messaging
pub mod messaging {
    /// Maximum SMS reply length in characters
    pub const SMS_MAX_LENGTH: usize = 1600;

    /// Twilio sandbox WhatsApp sender
    pub const WHATSAPP_SANDBOX_FROM: &str = "whatsapp:+14155238886";

    pub const TWILIO_API_BASE: &str = "https://api.twilio.com";
}

/// External endpoints
pub mod endpoints {
    /// Public disease statistics API
    pub const DISEASE_STATS_DEFAULT: &str = "https://disease.sh/v3/covid-19";

    /// Translation sidecar
    pub const TRANSLATION_DEFAULT: &str = "http://localhost:5000/translate";
}

/// Timeouts
pub mod timeouts {
    pub const STATS_REQUEST_SECS: u64 = 5;
    pub const TRANSLATION_REQUEST_SECS: u64 = 5;
    pub const MESSAGING_REQUEST_SECS: u64 = 10;
    pub const HTTP_REQUEST_SECS: u64 = 30;
}

/// Outbreak monitor
pub mod monitor {
    /// Poll interval (6 hours)
    pub const INTERVAL_SECS: u64 = 6 * 60 * 60;

    /// Retry delay after a failed poll (1 hour)
    pub const RETRY_SECS: u64 = 60 * 60;

    /// Daily new cases above which an alert is raised
    pub const ALERT_THRESHOLD: u64 = 50_000;

    pub const DEFAULT_REGION: &str = "india";
}

/// In-process analytics store
pub mod analytics {
    /// Interactions kept before the oldest are dropped
    pub const MAX_RECORDS: usize = 100_000;
}

/// Emergency and helpline numbers (India)
pub mod helplines {
    pub const AMBULANCE: &str = "108";
    pub const EMERGENCY: &str = "102";
    pub const POLICE: &str = "100";
    pub const FIRE: &str = "101";
    pub const HEALTH: &str = "1075";
    pub const WOMEN: &str = "1091";
    pub const CHILD: &str = "1098";
    pub const AYUSH: &str = "14443";
    pub const COVID: &str = "+91-11-23978046";
}
