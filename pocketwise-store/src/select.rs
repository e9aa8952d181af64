//! Pick the slice of stored data a conversation should see

use chrono::NaiveDate;
use pocketwise_core::{Budget, ContextBundle, Goal, Transaction};
use std::cmp::Reverse;

/// Default number of recent transactions handed to the agent
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// Newest `limit` transactions, newest first. Undated rows sort last.
pub fn recent_transactions(txns: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = txns.iter().collect();
    // stable: equal dates keep file order
    sorted.sort_by_key(|t| Reverse(t.transaction_date));
    sorted.into_iter().take(limit).cloned().collect()
}

pub fn active_goals(goals: &[Goal]) -> Vec<Goal> {
    goals.iter().filter(|g| g.is_active()).cloned().collect()
}

/// Budgets for the month containing `today`, plus budgets with no month
pub fn budgets_for_month(budgets: &[Budget], today: NaiveDate) -> Vec<Budget> {
    let month = today.format("%Y-%m").to_string();
    budgets
        .iter()
        .filter(|b| match b.month.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(m) => m.get(..7) == Some(month.as_str()),
        })
        .cloned()
        .collect()
}

/// Narrow a stored bundle to what the agent expects.
pub fn select_context(bundle: &ContextBundle, today: NaiveDate, recent_limit: usize) -> ContextBundle {
    ContextBundle {
        user: bundle.user.clone(),
        transactions: recent_transactions(&bundle.transactions, recent_limit),
        goals: active_goals(&bundle.goals),
        budgets: budgets_for_month(&bundle.budgets, today),
    }
}
