//! Canned replies used when text generation is unavailable

use rand::Rng;

pub const FALLBACK_REPLIES: [&str; 4] = [
    "I'm here to help you manage your money better! Ask me about your spending, goals, budgets, or investments.",
    "Great question! I can help you track your spending, plan savings goals, check your budgets, and explore investment ideas.",
    "I can tell you about your spending, your goals and your budgets, or share a few money-saving tips. What would you like to know?",
    "Let's work on your finances together! Try asking \"How much did I spend this month?\" or \"How are my goals doing?\"",
];

/// Uniformly pick one fallback reply
pub fn pick_fallback<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_REPLIES[rng.gen_range(0..FALLBACK_REPLIES.len())]
}

pub fn random_fallback() -> &'static str {
    pick_fallback(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_covers_every_reply() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..200).map(|_| pick_fallback(&mut rng)).collect();
        assert_eq!(seen.len(), FALLBACK_REPLIES.len());
    }

    #[test]
    fn test_random_fallback_is_known() {
        for _ in 0..20 {
            assert!(FALLBACK_REPLIES.contains(&random_fallback()));
        }
    }
}
