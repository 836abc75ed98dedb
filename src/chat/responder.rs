//! Keyword-triggered canned responses for the society assistant.
//!
//! Input is lowercased and checked against five keyword sets in a fixed
//! priority order: events, membership, equipment, training, history. The
//! first set with any keyword contained in the input picks the topic, so
//! "when does training start" is an events question. Nothing matching falls
//! back to a "contact us" pool.
//!
//! Randomness is always injected; pass a seeded `StdRng` for deterministic
//! output.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Response category selected by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Events,
    Membership,
    Equipment,
    Training,
    History,
    Fallback,
}

impl Topic {
    /// Keyword-bearing topics in match priority order.
    pub const PRIORITY: [Self; 5] = [
        Self::Events,
        Self::Membership,
        Self::Equipment,
        Self::Training,
        Self::History,
    ];

    /// Substrings that select this topic. Empty for [`Topic::Fallback`].
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Events => &["event", "festival", "when", "calendar", "date"],
            Self::Membership => &["join", "membership", "member", "sign up", "cost"],
            Self::Equipment => &["equipment", "armor", "weapon", "uniform", "costume"],
            Self::Training => &["train", "practice", "skill", "learn", "class"],
            Self::History => &["history", "roman", "legion", "auxiliary", "empire"],
            Self::Fallback => &[],
        }
    }

    /// Fixed reply pool for this topic.
    #[must_use]
    pub const fn responses(self) -> &'static [&'static str] {
        match self {
            Self::Events => &[
                "Our next major event is the Summer Roman Festival on June 15-16, 2025 in Hyde Park. We also have weekly training sessions every Saturday at our headquarters. Would you like details on any specific event?",
                "We have several upcoming events! The Annual Reenactment is scheduled for May 20th, and our Educational Workshop Series begins on June 2nd. You can view our full calendar on the Events page.",
            ],
            Self::Membership => &[
                "Joining S.C.E.A.R. is easy! We offer several membership types starting at £25/year. Benefits include training sessions, equipment loans, and participation in events. Visit our Join Us page to apply, or I can guide you through the membership options.",
                "To become a member, you can apply through our Join Us page. We offer Standard, Student, Family, and Supporter memberships with different benefits. Would you like me to explain each type?",
            ],
            Self::Equipment => &[
                "Members typically need to acquire or create authentic Roman equipment. For beginners, we offer equipment loans and workshops on creating your own gear. We also provide guidance and resources on historical accuracy.",
                "We recommend starting with basic items like a tunic and caligae (Roman boots). The society can help with loaning equipment to new members and provide guidance on purchasing or crafting authentic items.",
            ],
            Self::Training => &[
                "We hold regular training sessions every Saturday from 10am to 2pm. These cover formation drills, equipment use, and historical context. No experience is necessary for beginners - we welcome all skill levels!",
                "Our training program covers all aspects of Roman military reenactment, from basic drill to complex formations. Sessions are held weekly, and we also offer specialized workshops throughout the year.",
            ],
            Self::History => &[
                "The Roman auxiliary forces (auxilia) were non-citizen troops attached to the Roman legions. They provided specialized skills such as archery, cavalry, and scouting. By the end of their service, many auxiliaries were granted Roman citizenship.",
                "Roman military history spans over 1000 years, from the early Republic to the Byzantine era. Our society focuses primarily on the Imperial period (27 BCE - 476 CE), which featured the professional standing army and the famous legions.",
            ],
            Self::Fallback => &[
                "I don't have specific information on that topic. Perhaps you could email us at info@scear.org or visit our Contact page for more assistance?",
                "I'm not sure about that, but our team would be happy to help. Would you like me to direct you to our Contact page?",
                "That's beyond my current knowledge. Please consider reaching out through our Contact form for more detailed information.",
            ],
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Events => "events",
            Self::Membership => "membership",
            Self::Equipment => "equipment",
            Self::Training => "training",
            Self::History => "history",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

const GREETINGS: [&str; 2] = [
    "Ave! Welcome to S.C.E.A.R. How may I assist you today?",
    "Salve! I'm the S.C.E.A.R. assistant. How can I help you with our Roman historical society?",
];

/// Picks the topic for `text`: the first in [`Topic::PRIORITY`] with a
/// keyword contained in the lowercased input, else [`Topic::Fallback`].
#[must_use]
pub fn classify(text: &str) -> Topic {
    let lower = text.to_lowercase();

    Topic::PRIORITY
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(Topic::Fallback)
}

/// Returns a reply for `text`, chosen uniformly from its topic's pool.
///
/// # Example
///
/// ```
/// use legio::chat::{respond, Topic};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let reply = respond("When is the next festival?", &mut rng);
/// assert!(Topic::Events.responses().contains(&reply));
/// ```
pub fn respond<R: Rng + ?Sized>(text: &str, rng: &mut R) -> &'static str {
    let topic = classify(text);
    tracing::debug!(%topic, input_len = text.len(), "chat topic classified");
    pick(topic.responses(), rng)
}

/// Opening line shown when the chat window first opens.
pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(&GREETINGS, rng)
}

fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
