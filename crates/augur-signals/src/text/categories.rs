//! Word-stem patterns for every keyword category.
//!
//! Patterns are matched against individual tokens, so each is anchored at
//! the token start. A pattern that fails to compile matches nothing.

use std::sync::LazyLock;

use augur_core::models::{EmotionalState, Persona, SituationalState, Theme};
use regex::Regex;

macro_rules! stem_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Themes ─────────────────────────────────────────────────────────────────
stem_pattern!(RE_CHANGE, r"(?i)^(?:chang|transform|shift|evolv|revolution|becom|renew|different)");
stem_pattern!(RE_TIMING, r"(?i)^(?:time|timing|when$|wait|patien|moment|soon$|later$|ready|delay)");
stem_pattern!(RE_BALANCE, r"(?i)^(?:balanc|harmon|equilib|stabl|stabil|centere?d?$|moderat|middle)");
stem_pattern!(RE_RELATIONSHIPS, r"(?i)^(?:relation|partner|friend|famil|love|together|colleague|connect)");
stem_pattern!(RE_GROWTH, r"(?i)^(?:grow|develop|progress|improv|expand|advanc|flourish)");
stem_pattern!(RE_WISDOM, r"(?i)^(?:wisdom|wise|understand|insight|know|truth|meaning|clarity)");
stem_pattern!(RE_CONFLICT_THEME, r"(?i)^(?:conflict|fight|argu|disput|tension|oppos|struggl|clash)");
stem_pattern!(RE_RETREAT, r"(?i)^(?:retreat|withdraw|rest$|resting|pause|alone|quiet|solitud|hide|hiding)");

// ── Personas ───────────────────────────────────────────────────────────────
stem_pattern!(RE_MULTIPLICITY, r"(?i)^(?:multipl|many|several|selves|parts$|plural|divided|split)");
stem_pattern!(RE_CONTEXT_SWITCHING, r"(?i)^(?:switch|context|toggl|juggl|modes?$|compartment)");
stem_pattern!(RE_ROLE_FLEXIBILITY, r"(?i)^(?:roles?$|hats?$|flexib|versatil|wear|persona)");
stem_pattern!(RE_AUTHENTICITY, r"(?i)^(?:authentic|genuine|real$|really$|true$|honest|myself|identit)");
stem_pattern!(RE_ADAPTATION, r"(?i)^(?:adapt|adjust|cope|coping|accommodat|bend|fit$|fitting)");

// ── Emotional states ───────────────────────────────────────────────────────
stem_pattern!(RE_ANXIETY, r"(?i)^(?:anxi|worr|fear|afraid|nervous|stress|scare|panic|uneas)");
stem_pattern!(RE_HOPE, r"(?i)^(?:hope|hoping|optimis|wish|eager|aspir|looking)");
stem_pattern!(RE_SADNESS, r"(?i)^(?:sad|grie|loss$|lonel|depress|sorrow|unhapp|heartbr|cry|crying)");
stem_pattern!(RE_FRUSTRATION, r"(?i)^(?:frustrat|annoy|stuck|angr|anger|irritat|blocked|fed$)");
stem_pattern!(RE_CONFUSION, r"(?i)^(?:confus|unsure|uncertain|lost$|unclear|puzzl|torn$|doubt)");
stem_pattern!(RE_CALM, r"(?i)^(?:calm|peace|seren|relax|tranquil|content|still$|steady)");
stem_pattern!(RE_JOY, r"(?i)^(?:joy|happ|delight|glad|grateful|celebrat|excit|thrill)");

// ── Situational states ─────────────────────────────────────────────────────
stem_pattern!(RE_CAREER, r"(?i)^(?:career|jobs?$|work|boss|promot|business|profession|office|employ)");
stem_pattern!(RE_RELATIONSHIP, r"(?i)^(?:relationship|marri|dating|spouse|boyfriend|girlfriend|husband|wife|breakup)");
stem_pattern!(RE_DECISION, r"(?i)^(?:decid|decision|choice|choos|option|dilemma|should)");
stem_pattern!(RE_TRANSITION, r"(?i)^(?:move$|moving|transition|leav|begin|start|relocat|graduat)");
stem_pattern!(RE_CONFLICT_SITUATION, r"(?i)^(?:conflict|argument|fight|disagree|dispute|quarrel|feud)");
stem_pattern!(RE_HEALTH, r"(?i)^(?:health|sick|ill$|illness|body|doctor|heal|tired|exhaust|energy)");
stem_pattern!(RE_LEARNING, r"(?i)^(?:learn|study|studi|school|course|teach|skill|educat|student)");

/// Pattern for a thematic category.
pub fn theme(theme: Theme) -> &'static LazyLock<Option<Regex>> {
    match theme {
        Theme::Change => &RE_CHANGE,
        Theme::Timing => &RE_TIMING,
        Theme::Balance => &RE_BALANCE,
        Theme::Relationships => &RE_RELATIONSHIPS,
        Theme::Growth => &RE_GROWTH,
        Theme::Wisdom => &RE_WISDOM,
        Theme::Conflict => &RE_CONFLICT_THEME,
        Theme::Retreat => &RE_RETREAT,
    }
}

pub fn persona(persona: Persona) -> &'static LazyLock<Option<Regex>> {
    match persona {
        Persona::Multiplicity => &RE_MULTIPLICITY,
        Persona::ContextSwitching => &RE_CONTEXT_SWITCHING,
        Persona::RoleFlexibility => &RE_ROLE_FLEXIBILITY,
        Persona::Authenticity => &RE_AUTHENTICITY,
        Persona::Adaptation => &RE_ADAPTATION,
    }
}

pub fn emotion(emotion: EmotionalState) -> &'static LazyLock<Option<Regex>> {
    match emotion {
        EmotionalState::Anxiety => &RE_ANXIETY,
        EmotionalState::Hope => &RE_HOPE,
        EmotionalState::Sadness => &RE_SADNESS,
        EmotionalState::Frustration => &RE_FRUSTRATION,
        EmotionalState::Confusion => &RE_CONFUSION,
        EmotionalState::Calm => &RE_CALM,
        EmotionalState::Joy => &RE_JOY,
    }
}

pub fn situation(situation: SituationalState) -> &'static LazyLock<Option<Regex>> {
    match situation {
        SituationalState::Career => &RE_CAREER,
        SituationalState::Relationship => &RE_RELATIONSHIP,
        SituationalState::Decision => &RE_DECISION,
        SituationalState::Transition => &RE_TRANSITION,
        SituationalState::Conflict => &RE_CONFLICT_SITUATION,
        SituationalState::Health => &RE_HEALTH,
        SituationalState::Learning => &RE_LEARNING,
    }
}

/// Number of tokens matching `pattern`.
pub fn count_matches(pattern: &LazyLock<Option<Regex>>, tokens: &[String]) -> usize {
    match &**pattern {
        Some(re) => tokens.iter().filter(|t| re.is_match(t)).count(),
        None => 0,
    }
}
