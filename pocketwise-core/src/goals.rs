//! Goal progress reporting

use chrono::NaiveDate;

use crate::finance::Goal;
use crate::format::rupees_whole;

pub const NO_ACTIVE_GOALS: &str = "You don't have any active goals yet. \
Setting a savings goal is a great way to stay motivated. \
Try creating one for an emergency fund, a trip, or a new gadget!";

/// Computed progress for one goal
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub name: String,
    /// 0-100+, current / target * 100
    pub progress_pct: f64,
    /// Never negative
    pub remaining: f64,
    /// Negative when overdue, `None` without a target date
    pub days_left: Option<i64>,
    pub monthly_saving_needed: f64,
}

/// Whole days from `today` to `target`; negative once the date has passed
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

pub fn progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
    let progress_pct = if goal.target_amount > 0.0 {
        goal.current_amount / goal.target_amount * 100.0
    } else {
        0.0
    };

    GoalProgress {
        name: goal.name.clone(),
        progress_pct,
        remaining: (goal.target_amount - goal.current_amount).max(0.0),
        days_left: goal.target_date.map(|d| days_remaining(d, today)),
        monthly_saving_needed: goal.monthly_saving_needed.unwrap_or(0.0),
    }
}

fn describe_days(days_left: Option<i64>) -> String {
    match days_left {
        None => "No target date".to_string(),
        Some(0) => "Due today".to_string(),
        Some(1) => "1 day left".to_string(),
        Some(-1) => "Overdue by 1 day".to_string(),
        Some(d) if d < 0 => format!("Overdue by {} days", -d),
        Some(d) => format!("{} days left", d),
    }
}

fn render(p: &GoalProgress, goal: &Goal) -> String {
    format!(
        "🎯 {}\n   Progress: {:.0}% ({} of {})\n   Remaining: {}\n   Time left: {}\n   Monthly saving needed: {}",
        p.name,
        p.progress_pct,
        rupees_whole(goal.current_amount),
        rupees_whole(goal.target_amount),
        rupees_whole(p.remaining),
        describe_days(p.days_left),
        rupees_whole(p.monthly_saving_needed),
    )
}

/// Answer a goal question. Only active goals are reported.
pub fn respond(goals: &[Goal], today: NaiveDate) -> String {
    let active: Vec<&Goal> = goals.iter().filter(|g| g.is_active()).collect();
    if active.is_empty() {
        return NO_ACTIVE_GOALS.to_string();
    }

    let blocks: Vec<String> = active
        .iter()
        .map(|g| render(&progress(g, today), g))
        .collect();

    format!("Here's how your goals are going:\n\n{}", blocks.join("\n\n"))
}
