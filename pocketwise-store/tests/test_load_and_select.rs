use chrono::NaiveDate;
use pocketwise_core::{GoalStatus, RiskTolerance};
use pocketwise_store::{import_transactions_csv, load_bundle, save_bundle, select_context};
use std::fs;

const CONTEXT_JSON: &str = r#"{
  "user": {"name": "Asha", "monthly_income": "75,000", "income_type": "salaried", "risk_tolerance": "HIGH"},
  "transactions": [
    {"amount": 1200, "type": "debit", "category": "Food & Dining", "transaction_date": "2026-02-14"},
    {"amount": "oops", "type": "debit", "category": "Shopping", "transaction_date": "2026-02-15T18:22:00Z"},
    {"amount": 75000, "type": "credit", "category": "Salary", "transaction_date": "2026-02-01"},
    {"amount": 900, "type": "debit", "transaction_date": "not-a-date"}
  ],
  "goals": [
    {"name": "Goa trip", "target_amount": 40000, "current_amount": 12000, "target_date": "2026-06-30", "status": "active", "monthly_saving_needed": "7000"},
    {"name": "Phone", "target_amount": 30000, "current_amount": 30000, "status": "completed"}
  ],
  "budgets": [
    {"category": "Food & Dining", "monthly_limit": 8000, "month": "2026-02"},
    {"category": "Food & Dining", "monthly_limit": 6000, "month": "2026-01"},
    {"category": "Shopping", "monthly_limit": null}
  ]
}"#;

/// Messy stored data loads without errors and narrows to what the agent expects.
#[test]
fn test_load_messy_bundle_and_select() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("context.json");
    fs::write(&path, CONTEXT_JSON).unwrap();

    let bundle = load_bundle(&path).unwrap();
    assert_eq!(bundle.user.monthly_income, 75000.0);
    assert_eq!(bundle.user.risk_tolerance, RiskTolerance::High);
    assert_eq!(bundle.transactions[1].amount, 0.0);
    assert_eq!(bundle.transactions[3].transaction_date, None);
    assert_eq!(bundle.transactions[3].category_label(), "Other");
    assert_eq!(bundle.goals[0].monthly_saving_needed, Some(7000.0));
    assert_eq!(bundle.goals[1].status, GoalStatus::Completed);
    assert_eq!(bundle.budgets[2].monthly_limit, 0.0);

    let today = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
    let ctx = select_context(&bundle, today, 2);
    assert_eq!(ctx.transactions.len(), 2);
    assert_eq!(ctx.transactions[0].category_label(), "Shopping");
    assert_eq!(ctx.goals.len(), 1);
    assert_eq!(ctx.budgets.len(), 2);
    assert_eq!(ctx.budgets[0].monthly_limit, 8000.0);
}

/// CSV import appends cleanly to a stored bundle.
#[test]
fn test_import_csv_into_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let ctx_path = dir.path().join("context.json");
    let csv_path = dir.path().join("statement.csv");
    fs::write(&ctx_path, CONTEXT_JSON).unwrap();
    fs::write(
        &csv_path,
        "Date,Description,Amount,Category\n2026-02-16,Uber trip,-340,Transport\n2026-02-17,Netflix,-649,Subscriptions\n",
    )
    .unwrap();

    let mut bundle = load_bundle(&ctx_path).unwrap();
    let imported = import_transactions_csv(&csv_path).unwrap();
    assert_eq!(imported.len(), 2);
    assert!(imported.iter().all(|t| t.is_debit()));

    bundle.transactions.extend(imported);
    save_bundle(&ctx_path, &bundle).unwrap();

    let reloaded = load_bundle(&ctx_path).unwrap();
    assert_eq!(reloaded.transactions.len(), 6);
    assert_eq!(reloaded.transactions[5].description.as_deref(), Some("Netflix"));
}
