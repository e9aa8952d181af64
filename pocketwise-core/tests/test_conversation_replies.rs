use chrono::NaiveDate;
use pocketwise_core::{ContextBundle, Intent, classify, deterministic_reply};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
}

fn bundle() -> ContextBundle {
    // Shaped like a real export: amounts as strings, odd casing, a bad date
    let raw = r#"{
        "user": { "name": "Asha", "monthly_income": "50,000", "risk_tolerance": "LOW" },
        "transactions": [
            { "amount": "1200", "type": "debit", "category": "Food & Dining", "transaction_date": "2026-02-03" },
            { "amount": 800, "type": "DEBIT", "category": "food", "transaction_date": "2026-02-10T09:30:00Z" },
            { "amount": 2000, "type": "debit", "category": "Transport", "transaction_date": "2026-02-11" },
            { "amount": "abc", "type": "debit", "category": "Shopping", "transaction_date": "2026-02-12" },
            { "amount": 50000, "type": "credit", "category": "Salary", "transaction_date": "2026-02-01" },
            { "amount": 900, "type": "debit", "category": "Subscriptions", "transaction_date": "not a date" }
        ],
        "goals": [
            { "name": "Goa trip", "target_amount": 40000, "current_amount": 10000,
              "target_date": "2026-06-30", "status": "active", "monthly_saving_needed": 7500 },
            { "name": "Phone", "target_amount": 60000, "current_amount": 60000, "status": "completed" }
        ],
        "budgets": [
            { "category": "food & dining", "monthly_limit": 1200 },
            { "category": "Transport", "monthly_limit": "2500" }
        ]
    }"#;
    serde_json::from_str(raw).unwrap()
}

fn reply(message: &str, ctx: &ContextBundle) -> (Intent, String) {
    let intent = classify(message);
    let text = deterministic_reply(intent, message, ctx, today()).unwrap_or_default();
    (intent, text)
}

#[test]
fn test_spending_keywords_classify_as_spending() {
    for msg in [
        "What did I SPEND this week?",
        "list my expenses",
        "I spent too much",
        "what does rent cost me",
    ] {
        assert_eq!(classify(msg), Intent::SpendingQuery, "{msg}");
    }
    // goal outranks budget, spending outranks everything
    assert_eq!(classify("budget for my investment goal"), Intent::GoalQuery);
    assert_eq!(classify("how much did i spend against my budget"), Intent::SpendingQuery);
}

#[test]
fn test_category_spending_percentage() {
    let ctx = bundle();
    let (intent, text) = reply("How much did I spend on food?", &ctx);
    assert_eq!(intent, Intent::SpendingQuery);
    // food = 2000 of 4900 total debits
    assert_eq!(
        text,
        "You've spent ₹2000.00 on food across 2 transactions. That's 40.8% of your total spending."
    );
}

#[test]
fn test_category_spending_with_no_debits_reports_zero_percent() {
    let ctx = ContextBundle::default();
    let (_, text) = reply("what did I spend on groceries", &ctx);
    assert!(text.ends_with("That's 0.0% of your total spending."), "{text}");
}

#[test]
fn test_goal_reply_uses_only_active_goals() {
    let (intent, text) = reply("how are my goals?", &bundle());
    assert_eq!(intent, Intent::GoalQuery);
    assert!(text.contains("🎯 Goa trip"));
    assert!(text.contains("Progress: 25% (₹10000 of ₹40000)"));
    assert!(text.contains("Monthly saving needed: ₹7500"));
    assert!(!text.contains("Phone"));
}

#[test]
fn test_budget_reply_traffic_lights() {
    let (intent, text) = reply("am I within my budget?", &bundle());
    assert_eq!(intent, Intent::BudgetQuery);
    // exact category match only: the plain "food" debit is not counted here
    assert!(text.contains("🔴 food & dining: ₹1200 of ₹1200 (100%)"), "{text}");
    assert!(text.contains("🟡 Transport: ₹2000 of ₹2500 (80%)"), "{text}");
}

#[test]
fn test_investment_reply_for_low_risk() {
    let (intent, text) = reply("where should I invest?", &bundle());
    assert_eq!(intent, Intent::InvestmentQuery);
    assert!(text.contains("Fixed Deposits"));
    assert!(text.contains("₹10000/month (20% of your income)"));
}

#[test]
fn test_advice_reply_is_numbered_and_ends_with_emergency_fund() {
    let ctx = ContextBundle {
        goals: Vec::new(),
        ..bundle()
    };
    let (intent, text) = reply("any tips to improve?", &ctx);
    assert_eq!(intent, Intent::AdviceRequest);
    assert!(text.starts_with("Here are some personalized tips for you:"));
    assert!(text.contains("1. You don't have any active savings goals."));
    assert!(text.ends_with("2. Build an emergency fund that covers 3 to 6 months of your expenses."));
}

#[test]
fn test_general_messages_have_no_deterministic_reply() {
    let ctx = bundle();
    assert_eq!(classify("hello!"), Intent::General);
    assert_eq!(deterministic_reply(Intent::General, "hello!", &ctx, today()), None);
}
