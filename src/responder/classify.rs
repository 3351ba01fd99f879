//! Intent classification over an ordered rule table.
//!
//! Classification is first-match-wins over [`RULES`]; the table order is
//! the contract, not an accident of code layout, and the tests below pin
//! it. All predicates receive the lower-cased input.

use once_cell::sync::Lazy;
use regex::Regex;

/// A bare `number operator number` expression anywhere in the input.
static MATH_EXPR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\s*[+\-*/^]\s*\d+").unwrap());

/// Question words that pull an input into the question branch.
const QUESTION_WORDS: [&str; 5] = ["what", "how", "why", "when", "where"];

/// Leading tokens that read as a greeting.
const GREETING_PREFIXES: [&str; 4] = ["hi", "hello", "hey", "greetings"];

/// Phrases that read as a request for assistance.
const TASK_PHRASES: [&str; 4] = ["help", "assist", "can you", "could you"];

/// Keywords that trigger the math branch even without a bare expression.
const MATH_KEYWORDS: [&str; 8] = [
    "calculate",
    "compute",
    "solve",
    "sum",
    "multiply",
    "divide",
    "add",
    "subtract",
];

/// The six reply intents, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Question words or a literal `?`.
    Question,
    /// Input opens with a salutation.
    Greeting,
    /// A request for assistance.
    TaskRequest,
    /// An arithmetic expression or math keyword.
    Math,
    /// Asking what the responder can do.
    CapabilityInquiry,
    /// Nothing matched.
    Fallback,
}

fn is_question(lower: &str) -> bool {
    lower.contains('?') || QUESTION_WORDS.iter().any(|w| lower.contains(w))
}

fn is_greeting(lower: &str) -> bool {
    GREETING_PREFIXES.iter().any(|g| lower.starts_with(g))
}

fn is_task_request(lower: &str) -> bool {
    TASK_PHRASES.iter().any(|p| lower.contains(p))
}

fn is_math(lower: &str) -> bool {
    MATH_EXPR.is_match(lower) || MATH_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub(crate) fn is_capability_inquiry(lower: &str) -> bool {
    lower.contains("what can you do") || lower.contains("capabilities")
}

fn always(_lower: &str) -> bool {
    true
}

/// The classification table. First match wins; [`Intent::Fallback`] is the
/// unconditional last row.
const RULES: [(Intent, fn(&str) -> bool); 6] = [
    (Intent::Question, is_question),
    (Intent::Greeting, is_greeting),
    (Intent::TaskRequest, is_task_request),
    (Intent::Math, is_math),
    (Intent::CapabilityInquiry, is_capability_inquiry),
    (Intent::Fallback, always),
];

/// Classify an input message into the intent whose rule matches first.
pub fn classify(input: &str) -> Intent {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|(_, predicate)| predicate(&lower))
        .map(|(intent, _)| *intent)
        .expect("rule table ends with an unconditional fallback")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_words() {
        assert_eq!(classify("what time is it"), Intent::Question);
        assert_eq!(classify("How does this work"), Intent::Question);
        assert_eq!(classify("why"), Intent::Question);
        assert_eq!(classify("tell me when"), Intent::Question);
    }

    #[test]
    fn test_question_mark_always_wins() {
        // '?' outranks every other rule, even with overlapping keywords.
        assert_eq!(classify("help me out?"), Intent::Question);
        assert_eq!(classify("2 + 2?"), Intent::Question);
        assert_eq!(classify("hello?"), Intent::Question);
        assert_eq!(classify("capabilities?"), Intent::Question);
    }

    #[test]
    fn test_greeting_at_start_only() {
        assert_eq!(classify("hello there"), Intent::Greeting);
        assert_eq!(classify("Hey"), Intent::Greeting);
        assert_eq!(classify("GREETINGS, friend"), Intent::Greeting);
        // A greeting buried mid-sentence is not a greeting.
        assert_eq!(classify("I said hello to them"), Intent::Fallback);
    }

    #[test]
    fn test_task_request() {
        assert_eq!(classify("please help me move this"), Intent::TaskRequest);
        assert_eq!(classify("can you summarize the notes"), Intent::TaskRequest);
        assert_eq!(classify("could you draft an email"), Intent::TaskRequest);
    }

    #[test]
    fn test_math_expression_and_keywords() {
        assert_eq!(classify("2 + 2"), Intent::Math);
        assert_eq!(classify("17*3"), Intent::Math);
        assert_eq!(classify("5 / 0"), Intent::Math);
        assert_eq!(classify("2 ^ 3"), Intent::Math);
        assert_eq!(classify("calculate the total"), Intent::Math);
        assert_eq!(classify("subtract it from the rest"), Intent::Math);
    }

    #[test]
    fn test_capability_inquiry_without_question_words() {
        assert_eq!(classify("capabilities"), Intent::CapabilityInquiry);
        assert_eq!(classify("list your capabilities"), Intent::CapabilityInquiry);
    }

    #[test]
    fn test_question_outranks_capability_phrasing() {
        // "what" pulls this into the question branch; the question handler
        // owns routing it to the capability enumeration.
        assert_eq!(classify("what can you do"), Intent::Question);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("the sky is blue today"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }

    #[test]
    fn test_order_is_pinned() {
        let order: Vec<Intent> = RULES.iter().map(|(intent, _)| *intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Question,
                Intent::Greeting,
                Intent::TaskRequest,
                Intent::Math,
                Intent::CapabilityInquiry,
                Intent::Fallback,
            ]
        );
    }
}
