use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of hourly points in a revenue trend.
pub const TREND_POINTS: usize = 24;

/// One complete, immutable set of dashboard metrics.
///
/// Produced wholesale by a [`Generate`](super::Generate) implementation and
/// never mutated after publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub revenue: RevenueMetrics,
    pub customers: CustomerMetrics,
    pub balance: BalanceMetrics,
    pub billing: BillingMetrics,
    /// Newest first.
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueMetrics {
    pub current: f64,
    pub previous: f64,
    /// `(current - previous) / previous * 100`, rounded to one decimal.
    pub growth_percent: f64,
    /// Exactly [`TREND_POINTS`] hourly points, `00:00` through `23:00`.
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

impl TrendPoint {
    /// Build the point for `hour`, labelled `HH:00`.
    pub fn hourly(hour: usize, value: f64) -> Self {
        Self {
            label: format!("{:02}:00", hour),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetrics {
    pub new_count: u32,
    pub total_count: u32,
    pub growth_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceMetrics {
    pub available: f64,
    pub pending: f64,
    pub withdrawable: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingMetrics {
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    /// Signed amount. Refunds are negative, payments and payouts positive.
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Payment,
    Refund,
    Payout,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Payment,
        TransactionKind::Refund,
        TransactionKind::Payout,
    ];

    /// Whether amounts of this kind are stored as negative values.
    pub fn is_outflow(&self) -> bool {
        matches!(self, TransactionKind::Refund)
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Payment => write!(f, "payment"),
            TransactionKind::Refund => write!(f, "refund"),
            TransactionKind::Payout => write!(f, "payout"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Growth of `current` over `previous` as a percentage rounded to one decimal.
///
/// Returns 0.0 when `previous` is zero.
pub fn growth_percent(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    round_one_decimal((current - previous) / previous * 100.0)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
