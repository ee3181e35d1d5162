use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Common trait for payment backends
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charge the guest for a stay
    async fn charge(&self, user_id: &str, amount: f64) -> Result<()>;

    /// Get the name of the payment backend
    fn processor_name(&self) -> &'static str;
}

/// Stand-in for a card processor: waits, then approves any positive amount
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn charge(&self, user_id: &str, amount: f64) -> Result<()> {
        debug!("Charging {} for {:.2}", user_id, amount);
        tokio::time::sleep(self.delay).await;
        if !(amount.is_finite() && amount > 0.0) {
            anyhow::bail!("declined amount {}", amount);
        }
        Ok(())
    }

    fn processor_name(&self) -> &'static str {
        "simulated"
    }
}
