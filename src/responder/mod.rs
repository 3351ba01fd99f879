//! The rule-based responder.
//!
//! `respond` is a pure classify-and-template function modulo two effects:
//! wall-clock reads in the time/date answer and the seedable RNG behind the
//! insight filler. Every call appends exactly two turns to the conversation
//! log — the user input, then the reply — no matter which branch fires.

pub mod classify;
pub mod math;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;
use crate::memory::{ConversationLog, Role};
use self::classify::{classify, is_capability_inquiry, Intent};

/// Fixed greeting returned for salutations.
const GREETING: &str =
    "Hello! Ask me a question, hand me some arithmetic, or just say what's on your mind.";

/// Fixed explanation returned when asked about being an agent/AI.
const AGENT_EXPLANATION: &str = "I'm a software agent, yes — but not a learned one. \
     Every reply you get is picked by matching your words against a fixed set of rules.";

/// Fixed reply when the math branch fires but nothing is extractable.
const MATH_PROMPT: &str =
    "I can do arithmetic, but I need two numbers and an operation — something like \"12 * 3\".";

/// Fixed reply for expressions with no defined value.
const UNDEFINED_RESULT: &str =
    "That expression has no defined value — dividing by zero is undefined.";

/// Closing sentence appended to the capability enumeration.
const CAPABILITIES_CLOSING: &str =
    "That's the whole list — every reply comes from a rule, not a model.";

/// The five insight fillers for open-ended questions, chosen uniformly at
/// random.
const INSIGHTS: [&str; 5] = [
    "the framing of a question often matters more than the answer",
    "most problems shrink once you split them in two",
    "a good follow-up question beats a quick answer",
    "the obvious reading is usually the right place to start",
    "saying a problem out loud is half of solving it",
];

/// Maps an input string to a reply string via ordered pattern
/// classification, keeping an append-only log of every exchange.
pub struct Responder {
    /// Unique identifier for this responder instance.
    pub id: Uuid,
    knowledge: KnowledgeBase,
    history: ConversationLog,
    rng: StdRng,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Create a responder with entropy-seeded randomness.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a responder with a deterministic insight sequence.
    ///
    /// Only the random-insight sub-branch is affected; every other branch
    /// is deterministic regardless of seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            id: Uuid::new_v4(),
            knowledge: KnowledgeBase::new(),
            history: ConversationLog::new(),
            rng,
        }
    }

    /// The append-only log of every exchange so far.
    pub fn history(&self) -> &ConversationLog {
        &self.history
    }

    /// Produce a reply for the input.
    ///
    /// Never fails and always returns a non-empty string; unparseable math
    /// and division by zero are replies, not errors.
    pub fn respond(&mut self, input: &str) -> String {
        self.history.record(Role::User, input);

        let reply = match classify(input) {
            Intent::Question => self.answer_question(input),
            Intent::Greeting => GREETING.to_string(),
            Intent::TaskRequest => self.acknowledge_task(input),
            Intent::Math => self.answer_math(input),
            Intent::CapabilityInquiry => self.enumerate_capabilities(),
            Intent::Fallback => self.fallback(input),
        };

        self.history.record(Role::Agent, &reply);
        reply
    }

    /// Question sub-dispatch, first-match-wins: identity → time/date →
    /// agent/AI → capabilities → random insight.
    fn answer_question(&mut self, input: &str) -> String {
        let lower = input.to_lowercase();

        if lower.contains("who are you") || lower.contains("what are you") {
            return self.identity();
        }

        if lower.contains("time") || lower.contains("date") {
            let now = Local::now();
            return format!(
                "It's {} on {} ({}).",
                now.format("%-I:%M %p"),
                now.format("%A, %B %-d, %Y"),
                now.format("%Z"),
            );
        }

        if lower.contains("agent") || lower.contains("ai") {
            return AGENT_EXPLANATION.to_string();
        }

        // Capability phrasings that arrive as questions ("what can you do")
        // are routed to the enumeration instead of the insight filler.
        if is_capability_inquiry(&lower) {
            return self.enumerate_capabilities();
        }

        let insight = INSIGHTS[self.rng.gen_range(0..INSIGHTS.len())];
        format!("That's a thoughtful question. I'd offer this much: {}.", insight)
    }

    fn identity(&self) -> String {
        let p = &self.knowledge.personality;
        format!(
            "I'm a rule-based assistant — no model behind me, just ordered patterns. \
             I aim to be {} in tone, {} in approach, and {} in style.",
            p.tone, p.approach, p.style
        )
    }

    fn acknowledge_task(&self, input: &str) -> String {
        format!(
            "I hear you asking for help with \"{}\". I'm limited to simple things — \
             questions, arithmetic, the time — but fire away.",
            input
        )
    }

    fn answer_math(&self, input: &str) -> String {
        let expr = match math::extract(input) {
            Some(expr) => expr,
            None => return MATH_PROMPT.to_string(),
        };

        let value = math::evaluate(expr);
        if value.is_nan() {
            return UNDEFINED_RESULT.to_string();
        }

        format!("{} {} {} = {}", expr.lhs, expr.op, expr.rhs, value)
    }

    fn enumerate_capabilities(&self) -> String {
        let mut lines = vec!["Here's what I can do:".to_string()];
        for (i, capability) in self.knowledge.capabilities.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, capability));
        }
        lines.push(CAPABILITIES_CLOSING.to_string());
        lines.join("\n")
    }

    fn fallback(&self, input: &str) -> String {
        format!(
            "You said \"{}\". I don't have a rule for that yet — try a question, \
             a greeting, or some arithmetic.",
            input
        )
    }
}
