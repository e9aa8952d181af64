//! Deterministic intent classification.
//!
//! Keyword lists are checked in a fixed order and the first list with a hit
//! wins. A message like "budget for my investment goal" therefore lands on
//! `GoalQuery`, because goal keywords are checked before budget keywords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SpendingQuery,
    GoalQuery,
    BudgetQuery,
    InvestmentQuery,
    AdviceRequest,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SpendingQuery => "spending_query",
            Intent::GoalQuery => "goal_query",
            Intent::BudgetQuery => "budget_query",
            Intent::InvestmentQuery => "investment_query",
            Intent::AdviceRequest => "advice_request",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spending_query" => Ok(Intent::SpendingQuery),
            "goal_query" => Ok(Intent::GoalQuery),
            "budget_query" => Ok(Intent::BudgetQuery),
            "investment_query" => Ok(Intent::InvestmentQuery),
            "advice_request" => Ok(Intent::AdviceRequest),
            "general" => Ok(Intent::General),
            other => Err(format!("unknown intent: {other}")),
        }
    }
}

/// Priority-ordered keyword table. Order matters: first match wins.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::SpendingQuery,
        &["spend", "spent", "expense", "cost", "how much did i"],
    ),
    (
        Intent::GoalQuery,
        &["goal", "target", "saving for", "save for"],
    ),
    (Intent::BudgetQuery, &["budget", "limit", "overbudget"]),
    (
        Intent::InvestmentQuery,
        &["invest", "mutual fund", "stock", "sip", "portfolio"],
    ),
    (
        Intent::AdviceRequest,
        &[
            "advice",
            "tip",
            "suggest",
            "recommend",
            "should i",
            "improve",
            "help me save",
        ],
    ),
];

/// Classification outcome plus the keyword that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    pub keyword: Option<&'static str>,
}

/// Classify a message, keeping the matched keyword for diagnostics.
pub fn classify_with_reason(message: &str) -> Classification {
    let msg = message.to_lowercase();

    for (intent, keywords) in INTENT_KEYWORDS {
        if let Some(kw) = keywords.iter().find(|kw| msg.contains(**kw)) {
            return Classification {
                intent: *intent,
                keyword: Some(*kw),
            };
        }
    }

    Classification {
        intent: Intent::General,
        keyword: None,
    }
}

/// Classify a message into exactly one intent.
pub fn classify(message: &str) -> Intent {
    classify_with_reason(message).intent
}
