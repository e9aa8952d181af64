//! Investment suggestions by risk profile

use crate::finance::{RiskTolerance, User};
use crate::format::rupees_whole;

/// Share of monthly income suggested for investing
pub const INVESTMENT_SHARE: f64 = 0.20;

const LOW_RISK: &[&str] = &[
    "Fixed Deposits (FDs) for guaranteed returns",
    "Public Provident Fund (PPF) for tax-free long-term savings",
    "Debt mutual funds for stable income",
    "Government bonds and RBI savings bonds",
];

const MEDIUM_RISK: &[&str] = &[
    "Balanced or hybrid mutual funds",
    "Index funds tracking the Nifty 50 or Sensex",
    "A monthly SIP in large-cap equity funds",
    "Gold ETFs or Sovereign Gold Bonds for diversification",
];

const HIGH_RISK: &[&str] = &[
    "Equity mutual funds through a monthly SIP",
    "Mid-cap and small-cap funds for higher growth",
    "Direct stocks in companies you understand",
    "International equity funds for global exposure",
];

pub fn options_for(risk: RiskTolerance) -> &'static [&'static str] {
    match risk {
        RiskTolerance::Low => LOW_RISK,
        RiskTolerance::Medium => MEDIUM_RISK,
        RiskTolerance::High => HIGH_RISK,
    }
}

pub fn suggested_monthly_investment(user: &User) -> f64 {
    (user.monthly_income * INVESTMENT_SHARE).max(0.0)
}

/// Answer an investment question.
pub fn respond(user: &User) -> String {
    let mut reply = format!(
        "Based on your {} risk profile, here are some investment options to consider:\n",
        user.risk_tolerance.as_str()
    );
    for option in options_for(user.risk_tolerance) {
        reply.push_str(&format!("\n• {}", option));
    }
    reply.push_str(&format!(
        "\n\n💰 Suggested monthly investment: {}/month (20% of your income)",
        rupees_whole(suggested_monthly_investment(user))
    ));
    reply
}
