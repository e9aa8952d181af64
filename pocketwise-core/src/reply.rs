//! Dispatch from a classified intent to its deterministic responder

use chrono::NaiveDate;

use crate::context::ContextBundle;
use crate::intent::Intent;
use crate::{advice, budget, goals, investment, spending};

/// Build the reply for every intent except `General`.
///
/// Returns `None` for `General`, which needs the text-generation service.
pub fn deterministic_reply(
    intent: Intent,
    message: &str,
    ctx: &ContextBundle,
    today: NaiveDate,
) -> Option<String> {
    let reply = match intent {
        Intent::SpendingQuery => spending::respond(message, &ctx.transactions),
        Intent::GoalQuery => goals::respond(&ctx.goals, today),
        Intent::BudgetQuery => budget::respond(&ctx.budgets, &ctx.transactions, today),
        Intent::InvestmentQuery => investment::respond(&ctx.user),
        Intent::AdviceRequest => advice::respond(&ctx.user, &ctx.transactions, &ctx.goals),
        Intent::General => return None,
    };
    Some(reply)
}
