//! Import transactions from a CSV export.
//!
//! Expected header (any order, case-insensitive):
//! `date,amount,type,category,description`
//!
//! Only `date` (or `transaction_date`) and `amount` are required. Without a
//! `type` value the sign decides: negative amounts are debits, everything
//! else is a credit.

use csv::StringRecord;
use pocketwise_core::lenient::{parse_amount, parse_date};
use pocketwise_core::{Transaction, TxnType};
use std::io::Read;
use std::path::Path;

use crate::error::{Result, StoreError};

struct Columns {
    date: usize,
    amount: usize,
    kind: Option<usize>,
    category: Option<usize>,
    description: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };

        Ok(Self {
            date: find(&["date", "transaction_date"]).ok_or(StoreError::MissingColumn("date"))?,
            amount: find(&["amount"]).ok_or(StoreError::MissingColumn("amount"))?,
            kind: find(&["type", "kind"]),
            category: find(&["category"]),
            description: find(&["description", "details"]),
        })
    }
}

fn field<'r>(record: &'r StringRecord, idx: Option<usize>) -> Option<&'r str> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn to_transaction(record: &StringRecord, cols: &Columns) -> Transaction {
    let amount = parse_amount(record.get(cols.amount).unwrap_or("0"));

    let kind = match field(record, cols.kind) {
        Some(label) => TxnType::from_label(label),
        None if amount < 0.0 => TxnType::Debit,
        None => TxnType::Credit,
    };

    Transaction {
        amount,
        kind,
        category: field(record, cols.category).map(str::to_string),
        transaction_date: record.get(cols.date).and_then(parse_date),
        description: field(record, cols.description).map(str::to_string),
    }
}

/// Parse transactions from any reader holding CSV text.
pub fn read_transactions(reader: impl Read) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let cols = Columns::from_headers(rdr.headers()?)?;

    let mut txns = Vec::new();
    for result in rdr.records() {
        let record = result?;
        // blank trailing rows
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let txn = to_transaction(&record, &cols);
        if txn.transaction_date.is_none() {
            tracing::debug!(row = ?record.position().map(|p| p.line()), "Transaction date unreadable");
        }
        txns.push(txn);
    }

    Ok(txns)
}

/// Parse a transactions CSV file.
pub fn import_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let txns = read_transactions(file)?;
    tracing::info!(path = %path.display(), count = txns.len(), "Imported transactions");
    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_read_full_header() {
        let csv = "date,amount,type,category,description\n\
2026-02-16,450.00,debit,Food & Dining,Swiggy order\n\
2026-02-17,50000,credit,Salary,Payroll\n";
        let txns = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].amount, 450.0);
        assert!(txns[0].is_debit());
        assert_eq!(txns[0].category_label(), "Food & Dining");
        assert_eq!(txns[0].description.as_deref(), Some("Swiggy order"));
        assert_eq!(txns[0].transaction_date, NaiveDate::from_ymd_opt(2026, 2, 16));
        assert!(!txns[1].is_debit());
    }

    #[test]
    fn test_sign_decides_without_type_column() {
        let csv = "Amount,Date,Category\n-120.5,2026-02-01,Transport\n300,2026-02-02,Refund\n";
        let txns = read_transactions(csv.as_bytes()).unwrap();
        assert!(txns[0].is_debit());
        assert_eq!(txns[0].abs_amount(), 120.5);
        assert!(!txns[1].is_debit());
    }

    #[test]
    fn test_bad_values_coerced() {
        let csv = "date,amount,type,category\nyesterday,lots,debit,\n\n2026-02-03,\"1,250.75\",DEBIT,Bills\n";
        let txns = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].amount, 0.0);
        assert_eq!(txns[0].transaction_date, None);
        assert_eq!(txns[0].category_label(), "Other");
        assert_eq!(txns[1].amount, 1250.75);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "when,category\n2026-02-01,Food\n";
        let err = read_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::MissingColumn("date")));
    }
}
