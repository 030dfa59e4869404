//! Built-in corpus covering the full King Wen sequence.

use augur_core::models::{HexagramId, HexagramRecord, Trigram};
use augur_core::traits::IHexagramCorpus;

/// (id, name, classical meaning, judgment, modern interpretation)
const ENTRIES: &[(u8, &str, &str, &str, &str)] = &[
    (1, "The Creative", "creative power", "Sublime success, furthered by perseverance.", "Take the initiative and sustain it."),
    (2, "The Receptive", "receptive devotion", "Success through the perseverance of a mare.", "Support, yield, and let others lead."),
    (3, "Difficulty at the Beginning", "initial chaos", "Do not act rashly; appoint helpers.", "A messy start that rewards patience."),
    (4, "Youthful Folly", "inexperience", "The young fool seeks the teacher, not the reverse.", "Ask good questions and accept guidance."),
    (5, "Waiting", "nourished patience", "Sincerity brings light and success.", "Prepare quietly until the moment is right."),
    (6, "Conflict", "dispute", "Halt halfway; going through to the end brings misfortune.", "Seek mediation rather than victory."),
    (7, "The Army", "disciplined collective", "The army needs perseverance and a strong leader.", "Organize people around a clear purpose."),
    (8, "Holding Together", "union", "Inquire of the oracle whether you are sublime and constant.", "Join the group that shares your values."),
    (9, "The Taming Power of the Small", "gentle restraint", "Dense clouds, no rain yet.", "Small adjustments before large moves."),
    (10, "Treading", "conduct", "Treading on the tail of the tiger; it does not bite.", "Act with courtesy in risky situations."),
    (11, "Peace", "harmony of heaven and earth", "The small departs, the great approaches.", "A period of alignment; use it well."),
    (12, "Standstill", "stagnation", "The great departs, the small approaches.", "Withdraw and keep integrity while blocked."),
    (13, "Fellowship with Men", "community", "Fellowship in the open succeeds.", "Build openly shared alliances."),
    (14, "Possession in Great Measure", "abundance held", "Supreme success.", "Steward resources generously."),
    (15, "Modesty", "humility", "Modesty creates success; the superior man carries things through.", "Understate, then deliver."),
    (16, "Enthusiasm", "inspired readiness", "It furthers one to install helpers and set armies marching.", "Rally energy around a shared vision."),
    (17, "Following", "adaptive following", "Supreme success; perseverance furthers.", "Adapt to the times to lead later."),
    (18, "Work on What Has Been Spoiled", "repair", "Before the starting point three days, after it three days.", "Fix inherited problems at the root."),
    (19, "Approach", "advance", "At the eighth month there will be misfortune.", "Move forward while conditions favor you."),
    (20, "Contemplation", "viewing", "The ablution has been made, but not yet the offering.", "Observe widely before acting."),
    (21, "Biting Through", "decisive justice", "It is favorable to let justice be administered.", "Remove the obstacle directly."),
    (22, "Grace", "adornment", "Grace has success in small matters.", "Form matters, but substance matters more."),
    (23, "Splitting Apart", "decay", "It does not further one to go anywhere.", "Let what is failing fall; conserve."),
    (24, "Return", "turning point", "Return; success. Going out and coming in without error.", "A natural comeback after a low point."),
    (25, "Innocence", "the unexpected", "Supreme success through perseverance; not right brings misfortune.", "Act without ulterior motives."),
    (26, "The Taming Power of the Great", "great restraint", "It furthers one not to eat at home.", "Hold strength in reserve and study."),
    (27, "The Corners of the Mouth", "nourishment", "Pay heed to the providing of nourishment.", "Attend to what you consume and provide."),
    (28, "Preponderance of the Great", "critical mass", "The ridgepole sags to the breaking point.", "An overloaded structure needs bold relief."),
    (29, "The Abysmal", "danger repeated", "If you are sincere, you have success in your heart.", "Keep flowing through repeated danger."),
    (30, "The Clinging", "clarity", "Care of the cow brings good fortune.", "Clarity depends on what you attach to."),
    (31, "Influence", "attraction", "To take a maiden to wife brings good fortune.", "Mutual attraction opens the way."),
    (32, "Duration", "endurance", "Duration; success without blame.", "Stay consistent while adapting form."),
    (33, "Retreat", "withdrawal", "In what is small, perseverance furthers.", "Step back strategically, not in defeat."),
    (34, "The Power of the Great", "great strength", "Perseverance furthers.", "Use strength with restraint."),
    (35, "Progress", "rapid advance", "The powerful prince is honored with horses in large numbers.", "Recognition follows visible progress."),
    (36, "Darkening of the Light", "concealed brilliance", "It furthers one to be persevering in adversity.", "Protect your light in hostile settings."),
    (37, "The Family", "clan", "The perseverance of the woman furthers.", "Clear roles make a household thrive."),
    (38, "Opposition", "polarity", "In small matters, good fortune.", "Difference can coexist without rupture."),
    (39, "Obstruction", "impasse", "The southwest furthers, the northeast does not.", "Turn inward and seek allies when blocked."),
    (40, "Deliverance", "release", "If there is still something to go to, hastening brings good fortune.", "Resolve tension and move on quickly."),
    (41, "Decrease", "simplification", "Decrease combined with sincerity brings supreme good fortune.", "Reduce excess to strengthen the core."),
    (42, "Increase", "gain", "It furthers one to undertake something.", "Invest while resources grow."),
    (43, "Break-through", "resoluteness", "One must resolutely make the matter known at court.", "Name the problem openly and firmly."),
    (44, "Coming to Meet", "temptation", "The maiden is powerful; one should not marry such a maiden.", "Notice small influences before they grow."),
    (45, "Gathering Together", "assembly", "The king approaches his temple.", "Gather people around a shared center."),
    (46, "Pushing Upward", "ascent", "Pushing upward has supreme success.", "Steady effort compounds into growth."),
    (47, "Oppression", "exhaustion", "Perseverance; the great man brings about good fortune.", "Endure scarcity with inner resolve."),
    (48, "The Well", "source", "The town may be changed, but the well cannot be changed.", "Return to the shared source of renewal."),
    (49, "Revolution", "molting", "On your own day you are believed.", "Change form when the time is ripe."),
    (50, "The Cauldron", "transformation of offerings", "Supreme good fortune; success.", "Refine raw material into culture."),
    (51, "The Arousing", "shock", "Shock brings success; laughing words, ha ha.", "A jolt that clarifies priorities."),
    (52, "Keeping Still", "stillness", "Keeping his back still so that he no longer feels his body.", "Pause and let the mind settle."),
    (53, "Development", "gradual progress", "The maiden is given in marriage; good fortune.", "Grow step by step."),
    (54, "The Marrying Maiden", "subordinate union", "Undertakings bring misfortune.", "Know your position in unequal bonds."),
    (55, "Abundance", "fullness", "Be not sad; be like the sun at midday.", "Enjoy the peak, knowing it passes."),
    (56, "The Wanderer", "the stranger", "Through smallness, success.", "Travel light and keep good conduct."),
    (57, "The Gentle", "penetration", "Success through what is small.", "Persistent gentle influence."),
    (58, "The Joyous", "joy", "Success; perseverance is favorable.", "Share joy through open exchange."),
    (59, "Dispersion", "dissolution", "The king approaches his temple; it furthers one to cross the great water.", "Dissolve rigid barriers."),
    (60, "Limitation", "measure", "Galling limitation must not be persevered in.", "Set limits that can be sustained."),
    (61, "Inner Truth", "sincerity", "Pigs and fishes; good fortune.", "Lead from genuine conviction."),
    (62, "Preponderance of the Small", "small exceeding", "Small things may be done; great things should not be done.", "Attend to details; avoid overreach."),
    (63, "After Completion", "completion", "Success in small matters; at the beginning good fortune, at the end disorder.", "Maintain what is done; guard against decline."),
    (64, "Before Completion", "transition", "The little fox, nearly across, gets its tail wet.", "On the verge; proceed with care."),
];

fn capitalized(trigram: Trigram) -> String {
    let name = trigram.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Built-in reference corpus. Element, season, and direction come from the
/// upper trigram; the image line names both trigrams.
#[derive(Debug, Clone)]
pub struct StaticCorpus {
    records: Vec<HexagramRecord>,
}

impl StaticCorpus {
    pub fn new() -> Self {
        let records = ENTRIES
            .iter()
            .filter_map(|(id, name, meaning, judgment, modern)| {
                let id = HexagramId::new(u32::from(*id)).ok()?;
                let (upper, lower) = id.trigrams();
                Some(HexagramRecord {
                    id,
                    name: (*name).to_string(),
                    upper,
                    lower,
                    element: Some(upper.element().to_string()),
                    season: Some(upper.season().to_string()),
                    direction: Some(upper.direction().to_string()),
                    classical_meaning: Some((*meaning).to_string()),
                    modern_interpretation: Some((*modern).to_string()),
                    judgment: Some((*judgment).to_string()),
                    image: Some(format!(
                        "{} above, {} below",
                        capitalized(upper),
                        lower.name()
                    )),
                })
            })
            .collect();
        Self { records }
    }
}

impl Default for StaticCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl IHexagramCorpus for StaticCorpus {
    fn get(&self, id: HexagramId) -> Option<HexagramRecord> {
        // Records are stored in sequence order.
        self.records
            .get(usize::from(id.get()) - 1)
            .filter(|r| r.id == id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
