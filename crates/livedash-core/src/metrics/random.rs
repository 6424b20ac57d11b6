//! Randomized snapshots: bounded uniform noise around fixed baselines.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::traits::Generate;
use super::types::{
    BalanceMetrics, BillingMetrics, CustomerMetrics, MetricsSnapshot, RevenueMetrics,
    TREND_POINTS, Transaction, TransactionKind, TransactionStatus, TrendPoint, growth_percent,
    round_one_decimal,
};

const BASE_REVENUE: f64 = 3_500_000.0;
const TRANSACTION_COUNT: usize = 12;
const COMPLETED_PROBABILITY: f64 = 0.85;
const HISTORY_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

const DESCRIPTIONS: [&str; 8] = [
    "Rocket Rides Subscription Fee",
    "Online Payment Processing",
    "API Usage Fee",
    "Monthly Settlement",
    "Refund Processing",
    "Premium Plan Upgrade",
    "International Transfer",
    "Platform Service Fee",
];

/// Generator that perturbs baseline values with uniform noise.
///
/// Each trend point is drawn independently, so consecutive hours may jump.
/// The random source is injectable for reproducible tests.
pub struct RandomGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RandomGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded generator; the same seed yields the same values (timestamps
    /// still follow the wall clock).
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn revenue(&mut self) -> RevenueMetrics {
        let current = BASE_REVENUE + self.rng.gen_range(0.0..100_000.0);
        let previous = BASE_REVENUE * 0.85 + self.rng.gen_range(0.0..50_000.0);
        let trend = (0..TREND_POINTS)
            .map(|hour| {
                let value = BASE_REVENUE * 0.6 + self.rng.gen_range(0.0..BASE_REVENUE * 0.6);
                TrendPoint::hourly(hour, value)
            })
            .collect();

        RevenueMetrics {
            current,
            previous,
            growth_percent: growth_percent(current, previous),
            trend,
        }
    }

    fn status(&mut self) -> TransactionStatus {
        if self.rng.gen_bool(COMPLETED_PROBABILITY) {
            TransactionStatus::Completed
        } else if self.rng.gen_bool(0.5) {
            TransactionStatus::Pending
        } else {
            TransactionStatus::Failed
        }
    }

    fn transactions(&mut self) -> Vec<Transaction> {
        let now = Utc::now();
        let batch = now.timestamp_millis();

        let mut transactions: Vec<Transaction> = (0..TRANSACTION_COUNT)
            .map(|index| {
                let kind = *TransactionKind::ALL
                    .choose(&mut self.rng)
                    .unwrap_or(&TransactionKind::Payment);
                let amount = if kind.is_outflow() {
                    -f64::from(self.rng.gen_range(100u32..5_100))
                } else {
                    f64::from(self.rng.gen_range(500u32..15_500))
                };
                let description = DESCRIPTIONS
                    .choose(&mut self.rng)
                    .unwrap_or(&DESCRIPTIONS[0])
                    .to_string();
                let age = Duration::milliseconds(self.rng.gen_range(0..HISTORY_WINDOW_MS));
                let status = self.status();
                let customer = format!("customer_{}", self.rng.gen_range(0..1000));

                Transaction {
                    id: format!("txn_{}_{}", batch, index),
                    kind,
                    amount,
                    currency: "HKD".to_string(),
                    description,
                    timestamp: now - age,
                    status,
                    customer: Some(customer),
                }
            })
            .collect();

        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }
}

impl<R: Rng + Send> Generate for RandomGenerator<R> {
    fn generate(&mut self) -> MetricsSnapshot {
        let revenue = self.revenue();
        let customers = CustomerMetrics {
            new_count: self.rng.gen_range(25..75),
            total_count: self.rng.gen_range(800..2_800),
            growth_percent: round_one_decimal(self.rng.gen_range(15.0..65.0)),
        };
        let balance = BalanceMetrics {
            available: f64::from(self.rng.gen_range(500_000u32..1_500_000)),
            pending: f64::from(self.rng.gen_range(50_000u32..250_000)),
            withdrawable: f64::from(self.rng.gen_range(100_000u32..250_000)),
        };
        let billing = BillingMetrics {
            paid: f64::from(self.rng.gen_range(20_000u32..70_000)),
            pending: f64::from(self.rng.gen_range(15_000u32..45_000)),
            overdue: f64::from(self.rng.gen_range(1_000u32..6_000)),
        };

        MetricsSnapshot {
            revenue,
            customers,
            balance,
            billing,
            transactions: self.transactions(),
        }
    }

    fn name(&self) -> &'static str {
        "randomized"
    }
}
