use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use augur_core::config::TextConfig;
use augur_core::constants::MAX_DOMINANT_PERSONAS;
use augur_core::errors::{DependencyError, ValidationError};
use augur_core::models::{
    CategoryMatch, DegradationEvent, EmotionalState, Persona, PersonaEstimate, PipelineStage,
    SituationalState, TextSignal, Theme, TokenSource,
};
use augur_core::traits::{ILinguisticAnalyzer, IPersonaMapper};
use regex::Regex;

use super::{analyzer, categories, tokenizer};

/// A text signal plus any optional stages that fell back along the way.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub signal: TextSignal,
    pub degradations: Vec<DegradationEvent>,
}

impl Extraction {
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}

/// Keyword-category scanner for free text.
///
/// Tokens come from the linguistic analyzer when one is attached and
/// answers in time, otherwise from the local tokenizer. Persona estimates
/// come from the persona mapper when attached, otherwise from keyword hits.
/// Neither collaborator can fail the extraction.
#[derive(Clone)]
pub struct TextSignalExtractor {
    config: TextConfig,
    analyzer: Option<Arc<dyn ILinguisticAnalyzer>>,
    analyzer_gate: analyzer::WorkerGate,
    persona_mapper: Option<Arc<dyn IPersonaMapper>>,
}

impl TextSignalExtractor {
    pub fn new(config: TextConfig) -> Self {
        Self {
            analyzer_gate: analyzer::WorkerGate::new(config.max_analyzer_workers),
            config,
            analyzer: None,
            persona_mapper: None,
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn ILinguisticAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn with_persona_mapper(mut self, mapper: Arc<dyn IPersonaMapper>) -> Self {
        self.persona_mapper = Some(mapper);
        self
    }

    /// Length check on trimmed input, counted in codepoints.
    pub fn validate(&self, text: &str) -> Result<(), ValidationError> {
        let length = text.trim().chars().count();
        if length < self.config.min_chars {
            return Err(ValidationError::TextTooShort {
                length,
                minimum: self.config.min_chars,
            });
        }
        Ok(())
    }

    pub fn extract(&self, text: &str) -> Result<Extraction, ValidationError> {
        self.validate(text)?;
        let trimmed = text.trim();
        let mut degradations = Vec::new();

        let (tokens, token_source) = match self.analyzer_tokens(trimmed) {
            Some(Ok(tokens)) => (tokens, TokenSource::Analyzer),
            Some(Err(err)) => {
                degradations.push(DegradationEvent::new(
                    PipelineStage::LinguisticAnalyzer,
                    err.to_string(),
                    "local_tokenizer",
                ));
                (
                    tokenizer::tokenize(trimmed, self.config.min_token_len),
                    TokenSource::LocalTokenizer,
                )
            }
            None => (
                tokenizer::tokenize(trimmed, self.config.min_token_len),
                TokenSource::LocalTokenizer,
            ),
        };

        let saturation = self.config.relevance_saturation;
        let themes = scan(Theme::ALL, &tokens, saturation, categories::theme);
        let personas = scan(Persona::ALL, &tokens, saturation, categories::persona);
        let emotions = scan(EmotionalState::ALL, &tokens, saturation, categories::emotion);
        let situations = scan(SituationalState::ALL, &tokens, saturation, categories::situation);

        let mut signal = TextSignal {
            dominant_personas: keyword_personas(&personas),
            themes,
            personas,
            emotions,
            situations,
            tokens,
            token_source,
        };

        if let Some(mapper) = &self.persona_mapper {
            match mapper.map(&signal) {
                Ok(estimates) => signal.dominant_personas = normalize_estimates(estimates),
                Err(err) => degradations.push(DegradationEvent::new(
                    PipelineStage::PersonaMapper,
                    err.to_string(),
                    "keyword_personas",
                )),
            }
        }

        tracing::debug!(
            tokens = signal.tokens.len(),
            token_source = ?signal.token_source,
            themes = signal.themes.len(),
            personas = signal.personas.len(),
            emotions = signal.emotions.len(),
            situations = signal.situations.len(),
            degraded = degradations.len(),
            "text signal extracted"
        );

        Ok(Extraction {
            signal,
            degradations,
        })
    }

    fn analyzer_tokens(&self, text: &str) -> Option<Result<Vec<String>, DependencyError>> {
        let analyzer = self.analyzer.as_ref()?;
        let timeout = Duration::from_millis(self.config.analyzer_timeout_ms);
        Some(
            analyzer::tokenize_with_timeout(analyzer, &self.analyzer_gate, text, timeout)
                .map(|tokens| tokens.into_iter().map(|t| t.to_lowercase()).collect()),
        )
    }
}

impl std::fmt::Debug for TextSignalExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSignalExtractor")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.as_ref().map(|a| a.name().to_string()))
            .field("analyzer_in_flight", &self.analyzer_gate.in_flight())
            .field(
                "persona_mapper",
                &self.persona_mapper.as_ref().map(|m| m.name().to_string()),
            )
            .finish()
    }
}

fn scan<K, F>(
    keys: &[K],
    tokens: &[String],
    saturation: f64,
    pattern: F,
) -> BTreeMap<K, CategoryMatch>
where
    K: Copy + Ord,
    F: Fn(K) -> &'static LazyLock<Option<Regex>>,
{
    keys.iter()
        .filter_map(|&key| {
            let match_count = categories::count_matches(pattern(key), tokens);
            (match_count > 0).then(|| {
                let relevance = (match_count as f64 / saturation).min(1.0);
                (
                    key,
                    CategoryMatch {
                        match_count,
                        relevance,
                    },
                )
            })
        })
        .collect()
}

/// Persona hits ranked by relevance; ties keep declaration order.
fn keyword_personas(personas: &BTreeMap<Persona, CategoryMatch>) -> Vec<PersonaEstimate> {
    normalize_estimates(
        personas
            .iter()
            .map(|(persona, m)| PersonaEstimate {
                persona: *persona,
                strength: m.relevance,
            })
            .collect(),
    )
}

/// Clamp strengths into [0, 1], drop empty ones, keep one estimate per
/// persona, sort strongest first, and cap the list.
fn normalize_estimates(estimates: Vec<PersonaEstimate>) -> Vec<PersonaEstimate> {
    let mut best: BTreeMap<Persona, f64> = BTreeMap::new();
    for e in estimates {
        if !e.strength.is_finite() || e.strength <= 0.0 {
            continue;
        }
        let strength = e.strength.min(1.0);
        let slot = best.entry(e.persona).or_insert(0.0);
        if strength > *slot {
            *slot = strength;
        }
    }
    let mut out: Vec<PersonaEstimate> = best
        .into_iter()
        .map(|(persona, strength)| PersonaEstimate { persona, strength })
        .collect();
    // Stable sort keeps declaration order among equal strengths.
    out.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    out.truncate(MAX_DOMINANT_PERSONAS);
    out
}
