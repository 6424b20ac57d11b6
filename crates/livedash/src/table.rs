use chrono::{DateTime, Utc};
use livedash_core::Transaction;
use livedash_core::format::{format_currency, format_relative_time};

pub struct TransactionTable {
    id_width: usize,
    kind_width: usize,
    amount_width: usize,
    status_width: usize,
    description_width: usize,
    customer_width: usize,
    when_width: usize,
}

impl TransactionTable {
    pub fn new(transactions: &[Transaction]) -> Self {
        let id_width = transactions
            .iter()
            .map(|t| t.id.chars().count())
            .max()
            .unwrap_or(8)
            .clamp(2, 28); // Between "ID" header and long randomized ids

        let description_width = transactions
            .iter()
            .map(|t| t.description.chars().count())
            .max()
            .unwrap_or(11)
            .clamp(11, 32);

        let customer_width = transactions
            .iter()
            .filter_map(|t| t.customer.as_ref().map(|c| c.chars().count()))
            .max()
            .unwrap_or(8)
            .clamp(8, 24);

        Self {
            id_width,
            kind_width: 7,
            amount_width: 14,
            status_width: 9,
            description_width,
            customer_width,
            when_width: 16,
        }
    }

    pub fn print_table(&self, transactions: &[Transaction], now: DateTime<Utc>) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.header_row());
        println!("{}", self.border('├', '┼', '┤'));
        for transaction in transactions {
            println!("{}", self.row(transaction, now));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn row(&self, transaction: &Transaction, now: DateTime<Utc>) -> String {
        let sign = if transaction.amount < 0.0 { "-" } else { "+" };
        let amount = format!(
            "{}{}",
            sign,
            format_currency(transaction.amount, &transaction.currency)
        );

        format!(
            "│ {} │ {} │ {:>width_amount$} │ {} │ {} │ {} │ {} │",
            truncate(&transaction.id, self.id_width),
            truncate(&transaction.kind.to_string(), self.kind_width),
            amount,
            truncate(&transaction.status.to_string(), self.status_width),
            truncate(&transaction.description, self.description_width),
            truncate(
                transaction.customer.as_deref().unwrap_or("-"),
                self.customer_width
            ),
            truncate(
                &format_relative_time(transaction.timestamp, now),
                self.when_width
            ),
            width_amount = self.amount_width,
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_id$} │ {:<width_kind$} │ {:>width_amount$} │ {:<width_status$} │ {:<width_description$} │ {:<width_customer$} │ {:<width_when$} │",
            "ID",
            "Type",
            "Amount",
            "Status",
            "Description",
            "Customer",
            "When",
            width_id = self.id_width,
            width_kind = self.kind_width,
            width_amount = self.amount_width,
            width_status = self.status_width,
            width_description = self.description_width,
            width_customer = self.customer_width,
            width_when = self.when_width,
        )
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = [
            self.id_width,
            self.kind_width,
            self.amount_width,
            self.status_width,
            self.description_width,
            self.customer_width,
            self.when_width,
        ]
        .iter()
        .map(|width| "─".repeat(width + 2))
        .collect();
        format!("{left}{}{right}", segments.join(&middle.to_string()))
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters rather than bytes so multi-byte descriptions stay valid.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use livedash_core::{TransactionKind, TransactionStatus};

    fn transaction(description: &str) -> Transaction {
        Transaction {
            id: "txn_001".to_string(),
            kind: TransactionKind::Payment,
            amount: 12_580.0,
            currency: "HKD".to_string(),
            description: description.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            status: TransactionStatus::Completed,
            customer: Some("customer_001".to_string()),
        }
    }

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("txn", 6), "txn   ");
    }

    #[test]
    fn test_truncate_long_strings() {
        assert_eq!(truncate("completed", 6), "com...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("客户名称很长", 5), "客户...");
    }

    #[test]
    fn test_border_spans_all_columns() {
        let table = TransactionTable::new(&[]);
        let border = table.border('┌', '┬', '┐');
        assert!(border.starts_with('┌'));
        assert!(border.ends_with('┐'));
        assert_eq!(border.matches('┬').count(), 6);
    }

    #[test]
    fn test_row_includes_description() {
        let txn = transaction("Rocket Rides Premium monthly subscription");
        let table = TransactionTable::new(std::slice::from_ref(&txn));
        let now = txn.timestamp + chrono::Duration::minutes(30);

        let row = table.row(&txn, now);
        assert!(row.contains("Rocket Rides Premium monthly ..."));
        assert!(row.contains("customer_001"));
        assert!(table.header_row().contains("Description"));
        assert_eq!(
            row.chars().count(),
            table.border('├', '┼', '┤').chars().count()
        );
    }

    #[test]
    fn test_short_descriptions_keep_header_width() {
        let txn = transaction("Fee");
        let table = TransactionTable::new(std::slice::from_ref(&txn));
        assert_eq!(table.description_width, "Description".len());
    }
}
