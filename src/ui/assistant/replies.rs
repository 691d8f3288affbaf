//! Canned assistant replies.
//!
//! There is no model behind this: the reply is picked by keyword match.
//! The lookup returns `Result` so the caller keeps the try/substitute
//! shape of the original integration, even though this mock never fails.

use thiserror::Error;

/// Shown when reply resolution fails.
pub const APOLOGY: &str =
    "Sorry, I couldn't process that right now. Please try again in a moment.";

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("assistant backend unavailable")]
    Unavailable,
}

/// Resolve the canned reply for a question.
pub fn canned_reply(question: &str) -> Result<String, ReplyError> {
    let lowered = question.to_lowercase();
    let reply = if contains_any(&lowered, &["cancel", "refund"]) {
        "Cancellation terms depend on the supplier's policy shown on the \
         detail step. Refunds are issued to the agency wallet within 5 \
         business days."
    } else if contains_any(&lowered, &["promo", "discount", "code"]) {
        "Active promo codes are listed under Settings. Codes apply once \
         per booking and never stack."
    } else if contains_any(&lowered, &["wallet", "balance"]) {
        "The agency wallet can cover up to 30% of a bill. Toggle it on \
         the payment step to see the redemption amount."
    } else if contains_any(&lowered, &["voucher", "confirmation"]) {
        "Vouchers are generated on the final wizard step. Keep the \
         reference id for supplier check-in."
    } else if contains_any(&lowered, &["price", "fare", "fee", "tax"]) {
        "Quotes include 15% taxes and a 4% service fee on the supplier \
         subtotal. Premium time slots use the supplier's premium rates."
    } else {
        "I can help with bookings, promo codes, wallet redemption, and \
         cancellation policies. What do you need?"
    };
    Ok(reply.to_string())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_question_mentions_policy() {
        let reply = canned_reply("How do refunds work?").unwrap();
        assert!(reply.contains("policy"));
    }

    #[test]
    fn unmatched_question_gets_generic_help() {
        let reply = canned_reply("what's the weather").unwrap();
        assert!(reply.contains("I can help"));
    }
}
