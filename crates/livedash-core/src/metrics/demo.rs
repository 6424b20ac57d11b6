//! Fixed demo fixture for reproducible presentations.

use chrono::{DateTime, Duration, Utc};

use super::traits::Generate;
use super::types::{
    BalanceMetrics, BillingMetrics, CustomerMetrics, MetricsSnapshot, RevenueMetrics, Transaction,
    TransactionKind, TransactionStatus, TrendPoint, growth_percent,
};

const DEMO_CURRENT_REVENUE: f64 = 3_528_198.72;
const DEMO_PREVIOUS_REVENUE: f64 = 2_931_556.34;

const DEMO_TREND: [f64; 24] = [
    2_800_000.0,
    2_850_000.0,
    2_900_000.0,
    2_950_000.0,
    3_000_000.0,
    3_100_000.0,
    3_200_000.0,
    3_250_000.0,
    3_300_000.0,
    3_400_000.0,
    3_450_000.0,
    3_500_000.0,
    3_520_000.0,
    3_530_000.0,
    3_528_198.0,
    3_530_000.0,
    3_540_000.0,
    3_580_000.0,
    3_600_000.0,
    3_650_000.0,
    3_700_000.0,
    3_750_000.0,
    3_800_000.0,
    3_820_000.0,
];

/// Generator that always returns the same hand-authored snapshot.
///
/// Transaction timestamps are offsets from an anchor captured at construction,
/// so every call returns an identical snapshot.
#[derive(Debug, Clone)]
pub struct DemoGenerator {
    anchor: DateTime<Utc>,
}

impl DemoGenerator {
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    pub fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    fn transactions(&self) -> Vec<Transaction> {
        vec![
            Transaction {
                id: "txn_001".to_string(),
                kind: TransactionKind::Payment,
                amount: 12_580.0,
                currency: "HKD".to_string(),
                description: "Rocket Rides Premium monthly subscription".to_string(),
                timestamp: self.anchor - Duration::minutes(30),
                status: TransactionStatus::Completed,
                customer: Some("customer_premium_001".to_string()),
            },
            Transaction {
                id: "txn_002".to_string(),
                kind: TransactionKind::Payment,
                amount: 8_900.0,
                currency: "HKD".to_string(),
                description: "API usage fee - peak hours".to_string(),
                timestamp: self.anchor - Duration::minutes(45),
                status: TransactionStatus::Completed,
                customer: Some("customer_api_002".to_string()),
            },
            Transaction {
                id: "txn_003".to_string(),
                kind: TransactionKind::Refund,
                amount: -2_340.0,
                currency: "HKD".to_string(),
                description: "Service outage compensation refund".to_string(),
                timestamp: self.anchor - Duration::hours(2),
                status: TransactionStatus::Completed,
                customer: Some("customer_003".to_string()),
            },
        ]
    }
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generate for DemoGenerator {
    fn generate(&mut self) -> MetricsSnapshot {
        MetricsSnapshot {
            revenue: RevenueMetrics {
                current: DEMO_CURRENT_REVENUE,
                previous: DEMO_PREVIOUS_REVENUE,
                growth_percent: growth_percent(DEMO_CURRENT_REVENUE, DEMO_PREVIOUS_REVENUE),
                trend: DEMO_TREND
                    .iter()
                    .enumerate()
                    .map(|(hour, value)| TrendPoint::hourly(hour, *value))
                    .collect(),
            },
            customers: CustomerMetrics {
                new_count: 37,
                total_count: 1245,
                growth_percent: 32.1,
            },
            balance: BalanceMetrics {
                available: 553_257.51,
                pending: 102_633.07,
                withdrawable: 450_000.0,
            },
            billing: BillingMetrics {
                paid: 25_000.0,
                pending: 20_000.0,
                overdue: 1_000.0,
            },
            transactions: self.transactions(),
        }
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}
