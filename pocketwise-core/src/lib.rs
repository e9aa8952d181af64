//! pocketwise-core: finance records and the deterministic half of the chat agent
//!
//! A message is classified into an [`Intent`] by ordered keyword matching,
//! then answered by a pure responder over the caller's [`ContextBundle`].

pub mod advice;
pub mod budget;
pub mod context;
pub mod finance;
pub mod format;
pub mod goals;
pub mod intent;
pub mod investment;
pub mod lenient;
pub mod reply;
pub mod spending;

pub use budget::{BudgetStatus, BudgetUsage};
pub use context::ContextBundle;
pub use finance::{Budget, Goal, GoalStatus, RiskTolerance, Transaction, TxnType, User};
pub use goals::GoalProgress;
pub use intent::{classify, classify_with_reason, Classification, Intent};
pub use reply::deterministic_reply;
