//! Finance record types: the user profile, transactions, goals and budgets
//! the agent reads from. None of these are mutated while answering.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient;

/// How much volatility the user said they can live with
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    /// Unknown labels fall back to `Medium`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" | "conservative" => RiskTolerance::Low,
            "high" | "aggressive" => RiskTolerance::High,
            _ => RiskTolerance::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }
}

impl<'de> Deserialize<'de> for RiskTolerance {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(lenient::label(d)?
            .map(|s| Self::from_label(&s))
            .unwrap_or_default())
    }
}

/// Money in (credit) or money out (debit)
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Credit,
    #[default]
    Debit,
}

impl TxnType {
    /// Unknown labels are treated as spending
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "credit" | "income" | "cr" => TxnType::Credit,
            _ => TxnType::Debit,
        }
    }
}

impl<'de> Deserialize<'de> for TxnType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(lenient::label(d)?
            .map(|s| Self::from_label(&s))
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl GoalStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "completed" | "complete" | "done" => GoalStatus::Completed,
            "cancelled" | "canceled" => GoalStatus::Cancelled,
            _ => GoalStatus::Active,
        }
    }
}

impl<'de> Deserialize<'de> for GoalStatus {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(lenient::label(d)?
            .map(|s| Self::from_label(&s))
            .unwrap_or_default())
    }
}

/// The person asking questions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_income: f64,
    /// Salaried, freelance, business, ... (free text)
    #[serde(default)]
    pub income_type: String,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
}

impl User {
    pub fn new(name: impl Into<String>, monthly_income: f64, risk_tolerance: RiskTolerance) -> Self {
        Self {
            name: name.into(),
            monthly_income,
            income_type: "salaried".to_string(),
            risk_tolerance,
        }
    }
}

/// Label used when a transaction has no category
pub const DEFAULT_CATEGORY: &str = "Other";

/// A single credit or debit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: TxnType,
    #[serde(default)]
    pub category: Option<String>,
    /// Unknown when the stored value could not be read
    #[serde(default, deserialize_with = "lenient::date")]
    pub transaction_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn debit(amount: f64, category: &str, date: NaiveDate) -> Self {
        Self {
            amount,
            kind: TxnType::Debit,
            category: Some(category.to_string()),
            transaction_date: Some(date),
            description: None,
        }
    }

    pub fn credit(amount: f64, category: &str, date: NaiveDate) -> Self {
        Self {
            kind: TxnType::Credit,
            ..Self::debit(amount, category, date)
        }
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TxnType::Debit
    }

    /// Spend is counted by magnitude, whatever sign the source used
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// Category label, `"Other"` when missing or blank
    pub fn category_label(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Case-insensitive substring match against the category label
    pub fn category_contains(&self, needle: &str) -> bool {
        self.category_label()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// A savings goal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub target_amount: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub current_amount: f64,
    #[serde(default, deserialize_with = "lenient::date")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    pub monthly_saving_needed: Option<f64>,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        target_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
            status: GoalStatus::Active,
            monthly_saving_needed: None,
        }
    }

    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_monthly_saving(mut self, amount: f64) -> Self {
        self.monthly_saving_needed = Some(amount);
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }
}

/// A monthly spending limit for one category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_limit: f64,
    /// `YYYY-MM` this budget applies to; `None` means every month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

impl Budget {
    pub fn new(category: impl Into<String>, monthly_limit: f64) -> Self {
        Self {
            category: category.into(),
            monthly_limit,
            month: None,
        }
    }

    /// Case-insensitive, whitespace-trimmed category equality
    pub fn covers(&self, txn: &Transaction) -> bool {
        self.category.trim().eq_ignore_ascii_case(txn.category_label())
    }
}
