//! Mock delivery gateway for development and testing.
//!
//! Logs outbound messages instead of sending them. Console output echoes
//! the full message body, including the code, which is intentional for
//! local testing and exactly what production logging must never do.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use cg_core::services::otp::DeliveryGateway;

use super::mask_identifier;

/// Mock delivery gateway
///
/// This implementation:
/// - Logs messages to console instead of sending them
/// - Generates mock message IDs
/// - Tracks message count for testing
/// - Can simulate gateway failure
#[derive(Clone)]
pub struct MockDeliveryGateway {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockDeliveryGateway {
    /// Create a new mock gateway with console echo enabled
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock gateway with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    fn record_send(&self, channel: &str, to: &str, body: &str) -> bool {
        if self.simulate_failure {
            warn!(
                channel = channel,
                to = %mask_identifier(to),
                "Mock gateway simulating delivery failure"
            );
            return false;
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK DELIVERY GATEWAY - MESSAGE #{} ({})", count, channel);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Message ID: {}", message_id);
            println!("Content: {}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "delivery_gateway",
            provider = "mock",
            channel = channel,
            to = %mask_identifier(to),
            message_id = %message_id,
            message_length = body.len(),
            "Message accepted (mock)"
        );

        true
    }
}

impl Default for MockDeliveryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryGateway for MockDeliveryGateway {
    async fn send_email(&self, to: &str, _subject: &str, html: &str) -> bool {
        self.record_send("email", to, html)
    }

    async fn send_sms(&self, phone: &str, message: &str) -> bool {
        self.record_send("sms", phone, message)
    }
}
