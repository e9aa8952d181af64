//! Budget usage for the current calendar month

use chrono::{Datelike, NaiveDate};

use crate::finance::{Budget, Transaction};
use crate::format::rupees_whole;

pub const NO_BUDGETS: &str = "You haven't set any budgets yet. \
Try setting monthly limits for categories like Food, Shopping, and Transport \
to keep your spending on track.";

/// Usage at or above this percentage is red
pub const RED_THRESHOLD: f64 = 100.0;
/// Usage at or above this percentage is yellow
pub const YELLOW_THRESHOLD: f64 = 80.0;

/// Traffic-light status for a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Green,
    Yellow,
    Red,
}

impl BudgetStatus {
    pub fn from_percent(pct: f64) -> Self {
        if pct >= RED_THRESHOLD {
            BudgetStatus::Red
        } else if pct >= YELLOW_THRESHOLD {
            BudgetStatus::Yellow
        } else {
            BudgetStatus::Green
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            BudgetStatus::Green => "🟢",
            BudgetStatus::Yellow => "🟡",
            BudgetStatus::Red => "🔴",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    pub percent: f64,
    pub status: BudgetStatus,
}

fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Spend against each budget for the month containing `today`.
///
/// Transactions without a readable date are skipped. A zero limit with any
/// spend counts as fully used.
pub fn usage(budgets: &[Budget], txns: &[Transaction], today: NaiveDate) -> Vec<BudgetUsage> {
    let this_month: Vec<&Transaction> = txns
        .iter()
        .filter(|t| t.is_debit())
        .filter(|t| t.transaction_date.is_some_and(|d| same_month(d, today)))
        .collect();

    budgets
        .iter()
        .map(|b| {
            let spent: f64 = this_month
                .iter()
                .filter(|t| b.covers(t))
                .map(|t| t.abs_amount())
                .sum();

            let percent = if b.monthly_limit > 0.0 {
                spent / b.monthly_limit * 100.0
            } else if spent > 0.0 {
                100.0
            } else {
                0.0
            };

            BudgetUsage {
                category: b.category.trim().to_string(),
                limit: b.monthly_limit,
                spent,
                percent,
                status: BudgetStatus::from_percent(percent),
            }
        })
        .collect()
}

/// Answer a budget question.
pub fn respond(budgets: &[Budget], txns: &[Transaction], today: NaiveDate) -> String {
    if budgets.is_empty() {
        return NO_BUDGETS.to_string();
    }

    let mut reply = format!(
        "Here's your budget status for {}:\n",
        today.format("%B %Y")
    );
    for u in usage(budgets, txns, today) {
        reply.push_str(&format!(
            "\n{} {}: {} of {} ({:.0}%)",
            u.status.indicator(),
            u.category,
            rupees_whole(u.spent),
            rupees_whole(u.limit),
            u.percent,
        ));
    }
    reply
}
