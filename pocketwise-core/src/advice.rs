//! Rule-of-thumb financial tips.
//!
//! A fixed checklist runs in order; every rule that fires contributes one
//! numbered tip, and the emergency-fund reminder always closes the list.

use crate::finance::{Goal, Transaction, User};
use crate::format::rupees_whole;
use crate::spending::{debit_total, debit_total_matching};

/// Savings rate (percent of income) below which a tip is given
pub const MIN_SAVINGS_RATE: f64 = 20.0;
/// Food/dining share of income (percent) above which a tip is given
pub const MAX_DINING_SHARE: f64 = 15.0;
/// Absolute subscription spend above which a tip is given
pub const MAX_SUBSCRIPTION_SPEND: f64 = 1000.0;
/// Shopping share of income (percent) above which a tip is given
pub const MAX_SHOPPING_SHARE: f64 = 15.0;

pub const EMERGENCY_FUND_TIP: &str =
    "Build an emergency fund that covers 3 to 6 months of your expenses.";

pub const DOING_GREAT: &str = "You're doing great with your finances! \
Your spending looks healthy and you have goals to work towards. Keep it up!";

/// Which rule produced a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipKind {
    LowSavingsRate,
    HighDining,
    HighSubscriptions,
    HighShopping,
    NoGoals,
    EmergencyFund,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tip {
    pub kind: TipKind,
    pub text: String,
}

/// Percent of income left after debits; `None` without a positive income
pub fn savings_rate(user: &User, txns: &[Transaction]) -> Option<f64> {
    if user.monthly_income <= 0.0 {
        return None;
    }
    let spent = debit_total(txns);
    Some((user.monthly_income - spent) * 100.0 / user.monthly_income)
}

fn share_of_income(amount: f64, income: f64) -> f64 {
    if income > 0.0 { amount / income * 100.0 } else { 0.0 }
}

/// Run the checklist. The emergency-fund tip is not included.
pub fn triggered_tips(user: &User, txns: &[Transaction], goals: &[Goal]) -> Vec<Tip> {
    let income = user.monthly_income;
    let mut tips = Vec::new();

    if let Some(rate) = savings_rate(user, txns) {
        if rate < MIN_SAVINGS_RATE {
            tips.push(Tip {
                kind: TipKind::LowSavingsRate,
                text: format!(
                    "Your savings rate is {:.1}%. Aim to save at least 20% of your income by setting up an automatic transfer on payday.",
                    rate
                ),
            });
        }
    }

    let dining: f64 = txns
        .iter()
        .filter(|t| t.is_debit() && (t.category_contains("food") || t.category_contains("dining")))
        .map(Transaction::abs_amount)
        .sum();
    if share_of_income(dining, income) > MAX_DINING_SHARE {
        tips.push(Tip {
            kind: TipKind::HighDining,
            text: format!(
                "You've spent {} on food and dining, more than 15% of your income. Cooking at home a few more days a week can free up a lot of cash.",
                rupees_whole(dining)
            ),
        });
    }

    let subscriptions = debit_total_matching(txns, "subscription");
    if subscriptions > MAX_SUBSCRIPTION_SPEND {
        tips.push(Tip {
            kind: TipKind::HighSubscriptions,
            text: format!(
                "Subscriptions are costing you {}. Review them and cancel the ones you rarely use.",
                rupees_whole(subscriptions)
            ),
        });
    }

    let shopping = debit_total_matching(txns, "shopping");
    if share_of_income(shopping, income) > MAX_SHOPPING_SHARE {
        tips.push(Tip {
            kind: TipKind::HighShopping,
            text: format!(
                "Shopping took {}, more than 15% of your income. Try waiting 48 hours before any non-essential purchase.",
                rupees_whole(shopping)
            ),
        });
    }

    if !goals.iter().any(Goal::is_active) {
        tips.push(Tip {
            kind: TipKind::NoGoals,
            text: "You don't have any active savings goals. Setting a specific goal makes it much easier to stay on track.".to_string(),
        });
    }

    tips
}

/// Answer an advice request.
pub fn respond(user: &User, txns: &[Transaction], goals: &[Goal]) -> String {
    let mut tips = triggered_tips(user, txns, goals);

    if tips.is_empty() {
        return format!("{}\n\n💡 {}", DOING_GREAT, EMERGENCY_FUND_TIP);
    }

    tips.push(Tip {
        kind: TipKind::EmergencyFund,
        text: EMERGENCY_FUND_TIP.to_string(),
    });

    let mut reply = String::from("Here are some personalized tips for you:\n");
    for (i, tip) in tips.iter().enumerate() {
        reply.push_str(&format!("\n{}. {}", i + 1, tip.text));
    }
    reply
}
