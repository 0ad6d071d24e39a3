//! Simulated network latency for mock store calls.

use std::time::Duration;

/// A mock store call, used to pick its simulated round-trip time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetStoreProfile,
    UpdateStoreProfile,
    GetCategories,
    CreateCategory,
    GetProducts,
    GetProduct,
    SaveProduct,
    DeleteProduct,
    ToggleFeatured,
    GetOrders,
    UpdateOrderStatus,
    CreateOrder,
    GetCustomers,
    SendWhatsApp,
}

impl Operation {
    /// Simulated round-trip time.
    #[must_use]
    pub const fn delay(self) -> Duration {
        let millis = match self {
            Self::GetCategories | Self::ToggleFeatured | Self::DeleteProduct => 300,
            Self::GetProduct | Self::GetOrders | Self::GetCustomers => 400,
            Self::GetStoreProfile => 500,
            Self::GetProducts | Self::UpdateOrderStatus => 600,
            Self::SendWhatsApp | Self::CreateCategory | Self::SaveProduct => 800,
            Self::UpdateStoreProfile | Self::CreateOrder => 1500,
        };
        Duration::from_millis(millis)
    }
}

/// Whether mock calls sleep before resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    /// Sleep for each operation's simulated delay.
    #[must_use]
    pub const fn simulated() -> Self {
        Self { enabled: true }
    }

    /// Resolve immediately.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Build from the config flag.
    #[must_use]
    pub const fn from_flag(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Wait out the simulated delay for an operation.
    pub async fn wait(self, op: Operation) {
        if self.enabled {
            tokio::time::sleep(op.delay()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_is_slowest_path() {
        assert_eq!(Operation::CreateOrder.delay(), Duration::from_millis(1500));
        assert!(Operation::GetCategories.delay() < Operation::GetProducts.delay());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_advances_clock() {
        let start = tokio::time::Instant::now();
        Latency::simulated().wait(Operation::GetProducts).await;
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test]
    async fn test_disabled_latency_returns_immediately() {
        let start = std::time::Instant::now();
        Latency::disabled().wait(Operation::CreateOrder).await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
