//! The bundle of records a reply is computed from

use serde::{Deserialize, Serialize};

use crate::finance::{Budget, Goal, Transaction, User};

/// User profile plus the lists the caller loaded for this conversation.
///
/// Callers are expected to pass recent transactions, active goals and the
/// current month's budgets; the goal responder re-checks status anyway.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContextBundle {
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl ContextBundle {
    pub fn new(user: User) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_budgets(mut self, budgets: Vec<Budget>) -> Self {
        self.budgets = budgets;
        self
    }

    pub fn active_goal_count(&self) -> usize {
        self.goals.iter().filter(|g| g.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_from_partial_json() {
        let ctx: ContextBundle = serde_json::from_str(
            r#"{"user": {"name": "Asha", "monthly_income": 50000, "risk_tolerance": "low"},
                "goals": [{"name": "Trip", "target_amount": "20000", "status": "active"},
                          {"name": "Old", "status": "completed"}]}"#,
        )
        .unwrap();
        assert_eq!(ctx.user.name, "Asha");
        assert!(ctx.transactions.is_empty());
        assert!(ctx.budgets.is_empty());
        assert_eq!(ctx.active_goal_count(), 1);
    }
}
