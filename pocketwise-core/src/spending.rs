//! Spending summaries: one category when the message names one, otherwise
//! the overall total with the top categories.

use crate::finance::Transaction;
use crate::format::{percent_of, rupees, title_case};

/// Category keywords recognised in a message, checked in this order.
///
/// A keyword selects every debit whose category label contains it
/// (case-insensitive), so "food" picks up "Food & Dining" and "bills" picks
/// up "Bills & Utilities", while "groceries" does not match "Grocery".
pub const CATEGORY_KEYWORDS: &[&str] = &[
    "food",
    "shopping",
    "groceries",
    "transport",
    "subscription",
    "entertainment",
    "healthcare",
    "education",
    "bills",
    "emi",
];

/// How many categories the overall summary lists
pub const TOP_CATEGORIES: usize = 3;

pub const NO_SPENDING: &str = "I don't see any spending in your recent transactions yet. \
Add a few expenses and I'll break down where your money goes.";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: usize,
}

/// Sum of all debit amounts
pub fn debit_total(txns: &[Transaction]) -> f64 {
    txns.iter()
        .filter(|t| t.is_debit())
        .map(Transaction::abs_amount)
        .sum()
}

/// Total debit spend in categories containing `needle`
pub fn debit_total_matching(txns: &[Transaction], needle: &str) -> f64 {
    txns.iter()
        .filter(|t| t.is_debit() && t.category_contains(needle))
        .map(Transaction::abs_amount)
        .sum()
}

/// Per-category debit totals, largest first.
///
/// Categories are first collected in first-seen order and then stably
/// sorted, so equal totals keep the order they first appeared in.
pub fn category_breakdown(txns: &[Transaction]) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();

    for t in txns.iter().filter(|t| t.is_debit()) {
        let label = t.category_label();
        match out.iter_mut().find(|c| c.category == label) {
            Some(c) => {
                c.total += t.abs_amount();
                c.count += 1;
            }
            None => out.push(CategoryTotal {
                category: label.to_string(),
                total: t.abs_amount(),
                count: 1,
            }),
        }
    }

    out.sort_by(|a, b| b.total.total_cmp(&a.total));
    out
}

/// First category keyword mentioned in the message, if any
pub fn detect_category(message: &str) -> Option<&'static str> {
    let msg = message.to_lowercase();
    CATEGORY_KEYWORDS.iter().copied().find(|kw| msg.contains(kw))
}

/// Answer a spending question.
pub fn respond(message: &str, txns: &[Transaction]) -> String {
    let debits: Vec<&Transaction> = txns.iter().filter(|t| t.is_debit()).collect();
    let total: f64 = debits.iter().map(|t| t.abs_amount()).sum();

    if let Some(keyword) = detect_category(message) {
        let matching: Vec<&&Transaction> = debits
            .iter()
            .filter(|t| t.category_contains(keyword))
            .collect();
        let category_total: f64 = matching.iter().map(|t| t.abs_amount()).sum();
        let count = matching.len();

        return format!(
            "You've spent {} on {} across {} {}. That's {:.1}% of your total spending.",
            rupees(category_total),
            keyword,
            count,
            if count == 1 { "transaction" } else { "transactions" },
            percent_of(category_total, total),
        );
    }

    if debits.is_empty() {
        return NO_SPENDING.to_string();
    }

    let mut reply = format!(
        "Your total spending is {}.\n\nTop spending categories:",
        rupees(total)
    );
    for c in category_breakdown(txns).iter().take(TOP_CATEGORIES) {
        reply.push_str(&format!(
            "\n• {}: {} ({:.1}%)",
            title_case(&c.category),
            rupees(c.total),
            percent_of(c.total, total)
        ));
    }
    reply
}
