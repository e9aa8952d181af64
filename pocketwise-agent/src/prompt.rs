//! Prompt construction for open-ended questions

use chrono::NaiveDate;
use pocketwise_core::ContextBundle;
use pocketwise_core::budget;
use pocketwise_core::format::{rupees, rupees_whole};
use pocketwise_core::spending::{category_breakdown, debit_total};

/// Describe the user's situation and the question in plain language.
pub fn build_prompt(message: &str, ctx: &ContextBundle, today: NaiveDate) -> String {
    let user = &ctx.user;
    let name = if user.name.trim().is_empty() { "the user" } else { user.name.trim() };

    let mut p = format!("You are helping {} with their personal finances.\n\nContext:\n", name);

    let income_type = if user.income_type.trim().is_empty() {
        String::new()
    } else {
        format!(" ({})", user.income_type.trim())
    };
    p.push_str(&format!(
        "- Monthly income: {}{}\n",
        rupees_whole(user.monthly_income),
        income_type
    ));
    p.push_str(&format!("- Risk tolerance: {}\n", user.risk_tolerance.as_str()));

    let debit_count = ctx.transactions.iter().filter(|t| t.is_debit()).count();
    p.push_str(&format!(
        "- Recent spending: {} across {} transactions\n",
        rupees(debit_total(&ctx.transactions)),
        debit_count
    ));

    let top: Vec<String> = category_breakdown(&ctx.transactions)
        .iter()
        .take(3)
        .map(|c| format!("{} {}", c.category, rupees(c.total)))
        .collect();
    if !top.is_empty() {
        p.push_str(&format!("- Top categories: {}\n", top.join(", ")));
    }

    let goals: Vec<String> = ctx
        .goals
        .iter()
        .filter(|g| g.is_active())
        .map(|g| {
            format!(
                "{} ({} of {})",
                g.name,
                rupees_whole(g.current_amount),
                rupees_whole(g.target_amount)
            )
        })
        .collect();
    if goals.is_empty() {
        p.push_str("- Active goals: none\n");
    } else {
        p.push_str(&format!("- Active goals: {}\n", goals.join("; ")));
    }

    let over: Vec<String> = budget::usage(&ctx.budgets, &ctx.transactions, today)
        .into_iter()
        .filter(|u| u.status != budget::BudgetStatus::Green)
        .map(|u| format!("{} at {:.0}%", u.category, u.percent))
        .collect();
    p.push_str(&format!("- Budgets this month: {}", ctx.budgets.len()));
    if !over.is_empty() {
        p.push_str(&format!(" (needs attention: {})", over.join(", ")));
    }
    p.push('\n');

    p.push_str(&format!(
        "\nUser message: \"{}\"\n\nReply in 2-3 short, friendly sentences with practical, specific advice.",
        message.trim()
    ));
    p
}
