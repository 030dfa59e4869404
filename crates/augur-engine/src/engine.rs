//! [`DivinationEngine`]: validates input, consults the cache, runs the
//! selection pipeline under the degradation controller, and assembles the
//! reading.
//!
//! Stage order: validation → cache lookup → feature extraction →
//! candidate generation → scoring → selection → changing lines → assembly.
//! Only validation can fail the call; everything after it produces a
//! reading, FALLBACK in the worst case.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use augur_cache::{answers_fingerprint, text_fingerprint, Fingerprint, PutOutcome, ResultCache};
use augur_core::config::AugurConfig;
use augur_core::errors::{AugurResult, ComputationError, ValidationError};
use augur_core::models::{
    Answer, DegradationEvent, PipelineStage, Reading, ReadingMetadata, SelectionResult,
    SignalFeatures,
};
use augur_core::traits::{
    ICandidateGenerator, ICandidateScorer, IChangingLinePolicy, IHexagramCorpus,
    ILinguisticAnalyzer, IPersonaMapper,
};
use augur_corpus::StaticCorpus;
use augur_selection::{CandidateGenerator, MultiFactorScorer, Selector, ThreePowersPolicy};
use augur_signals::{aggregate, features, validate_answers, TextSignalExtractor};
use uuid::Uuid;

use crate::assembler::Assembler;
use crate::degradation::{
    DegradationController, DegradationTracker, StageFailure, TrackedDegradation,
};
use crate::tracing_setup::events;

/// Fallback label recorded when the changing-line policy fails.
const NO_CHANGING_LINES: &str = "no_changing_lines";
/// Fallback label recorded when a required stage fails.
const DEFAULT_READING: &str = "default_reading";

#[derive(Clone, Copy)]
enum Input<'a> {
    Answers(&'a [Answer]),
    Text(&'a str),
}

impl Input<'_> {
    fn path(&self) -> &'static str {
        match self {
            Input::Answers(_) => "answers",
            Input::Text(_) => "text",
        }
    }
}

/// Builder for [`DivinationEngine`]. Every collaborator has a default.
pub struct EngineBuilder {
    config: AugurConfig,
    corpus: Option<Arc<dyn IHexagramCorpus>>,
    cache: Option<Arc<ResultCache>>,
    analyzer: Option<Arc<dyn ILinguisticAnalyzer>>,
    persona_mapper: Option<Arc<dyn IPersonaMapper>>,
    generator: Option<Box<dyn ICandidateGenerator>>,
    scorer: Option<Box<dyn ICandidateScorer>>,
    policy: Option<Box<dyn IChangingLinePolicy>>,
}

impl EngineBuilder {
    pub fn new(config: AugurConfig) -> Self {
        Self {
            config,
            corpus: None,
            cache: None,
            analyzer: None,
            persona_mapper: None,
            generator: None,
            scorer: None,
            policy: None,
        }
    }

    /// Reference corpus. Defaults to the built-in [`StaticCorpus`].
    pub fn corpus(mut self, corpus: Arc<dyn IHexagramCorpus>) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Shared result cache. Ignored when `cache.enabled` is false.
    pub fn cache(mut self, cache: Arc<ResultCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn analyzer(mut self, analyzer: Arc<dyn ILinguisticAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn persona_mapper(mut self, mapper: Arc<dyn IPersonaMapper>) -> Self {
        self.persona_mapper = Some(mapper);
        self
    }

    pub fn generator(mut self, generator: Box<dyn ICandidateGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn scorer(mut self, scorer: Box<dyn ICandidateScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Changing-line policy. Defaults to [`ThreePowersPolicy`].
    pub fn changing_line_policy(mut self, policy: Box<dyn IChangingLinePolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Validate the configuration and assemble the engine.
    pub fn build(self) -> AugurResult<DivinationEngine> {
        self.config.validate()?;
        let config = self.config;

        let mut extractor = TextSignalExtractor::new(config.text.clone());
        let has_analyzer = self.analyzer.is_some();
        let has_persona_mapper = self.persona_mapper.is_some();
        if let Some(analyzer) = self.analyzer {
            extractor = extractor.with_analyzer(analyzer);
        }
        if let Some(mapper) = self.persona_mapper {
            extractor = extractor.with_persona_mapper(mapper);
        }

        let cache = if config.cache.enabled {
            self.cache
        } else {
            if self.cache.is_some() {
                tracing::info!("cache supplied but disabled by configuration");
            }
            None
        };
        let policy: Option<Box<dyn IChangingLinePolicy>> = if config.changing_lines.enabled {
            Some(
                self.policy
                    .unwrap_or_else(|| Box::new(ThreePowersPolicy::new(&config.changing_lines))),
            )
        } else {
            None
        };

        Ok(DivinationEngine {
            corpus: self.corpus.unwrap_or_else(|| Arc::new(StaticCorpus::new())),
            cache,
            extractor,
            has_analyzer,
            has_persona_mapper,
            generator: self
                .generator
                .unwrap_or_else(|| Box::new(CandidateGenerator::new(&config.candidates))),
            scorer: self
                .scorer
                .unwrap_or_else(|| Box::new(MultiFactorScorer::new(&config.scoring))),
            selector: Selector::new(&config.selection),
            policy,
            assembler: Assembler::new(&config.selection),
            tracker: Mutex::new(DegradationTracker::new()),
            config,
        })
    }
}

/// The selection engine. `Send + Sync`; share it behind an `Arc`.
pub struct DivinationEngine {
    config: AugurConfig,
    corpus: Arc<dyn IHexagramCorpus>,
    cache: Option<Arc<ResultCache>>,
    extractor: TextSignalExtractor,
    has_analyzer: bool,
    has_persona_mapper: bool,
    generator: Box<dyn ICandidateGenerator>,
    scorer: Box<dyn ICandidateScorer>,
    selector: Selector,
    policy: Option<Box<dyn IChangingLinePolicy>>,
    assembler: Assembler,
    tracker: Mutex<DegradationTracker>,
}

impl DivinationEngine {
    pub fn builder(config: AugurConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    /// Engine over the built-in corpus with no cache.
    pub fn new(config: AugurConfig) -> AugurResult<Self> {
        EngineBuilder::new(config).build()
    }

    pub fn config(&self) -> &AugurConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&Arc<ResultCache>> {
        self.cache.as_ref()
    }

    /// Reading for a set of structured answers.
    pub fn divine_answers(&self, answers: &[Answer]) -> Result<Reading, ValidationError> {
        let span = crate::reading_span!("answers");
        let _guard = span.enter();
        validate_answers(answers)
            .inspect_err(|e| events::input_rejected("answers", &e.to_string()))?;
        Ok(self.run(Input::Answers(answers)))
    }

    /// Reading for free text.
    pub fn divine_text(&self, text: &str) -> Result<Reading, ValidationError> {
        let span = crate::reading_span!("text");
        let _guard = span.enter();
        self.extractor
            .validate(text)
            .inspect_err(|e| events::input_rejected("text", &e.to_string()))?;
        Ok(self.run(Input::Text(text)))
    }

    /// Every degradation recorded so far, oldest first.
    pub fn degradation_events(&self) -> Vec<TrackedDegradation> {
        self.tracker().events().to_vec()
    }

    /// Degradations whose stage has not completed normally since.
    pub fn active_degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker()
            .active_degradations()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Events for `stage` in the last `window_secs` seconds.
    pub fn recent_degradations(&self, stage: PipelineStage, window_secs: i64) -> usize {
        self.tracker().count_recent(stage, window_secs)
    }

    /// How long `stage` has been degraded without recovering.
    pub fn degraded_for(&self, stage: PipelineStage) -> Option<chrono::Duration> {
        self.tracker().degraded_duration(stage)
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        // The tracker is an append-only log; a panic mid-update cannot break it.
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn run(&self, input: Input<'_>) -> Reading {
        let started = Instant::now();
        let mut controller = DegradationController::new();
        let key = self.fingerprint(input);

        let cached = match (&self.cache, &key) {
            (Some(cache), Some(key)) => cache.get(key),
            _ => None,
        };
        let cache_hit = cached.is_some();
        let metadata = ReadingMetadata {
            reading_id: Uuid::new_v4().to_string(),
            processing_time_ms: 0,
            cache_hit,
            cached_at: cached.as_ref().map(|entry| entry.cached_at),
        };

        let selection = match cached {
            Some(entry) => {
                tracing::debug!(path = input.path(), "cache hit");
                Ok(entry.selection)
            }
            None => self.select(input, &mut controller),
        };

        let outcome = selection.and_then(|selection| {
            let assembly_metadata = metadata.clone();
            let reading = controller.required(PipelineStage::Assembly, || {
                self.assembler
                    .assemble(&selection, self.corpus.as_ref(), assembly_metadata)
            })?;
            if !cache_hit {
                self.store(key, selection);
            }
            Ok(reading)
        });

        let mut reading = match outcome {
            Ok(reading) => {
                self.track(controller.events(), controller.completed(), None);
                reading
            }
            Err(failure) => {
                self.track(controller.events(), controller.completed(), Some(&failure));
                self.assembler.fallback(
                    self.corpus.as_ref(),
                    &failure,
                    controller.degraded_stages(),
                    metadata,
                )
            }
        };

        reading.metadata.processing_time_ms =
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        events::reading_completed(
            &reading.metadata.reading_id,
            reading.winner.id,
            reading.degradation_tier,
            reading.metadata.cache_hit,
            reading.metadata.processing_time_ms,
        );
        reading
    }

    fn fingerprint(&self, input: Input<'_>) -> Option<Fingerprint> {
        self.cache.as_ref()?;
        Some(match input {
            Input::Answers(answers) => answers_fingerprint(answers),
            Input::Text(text) => text_fingerprint(text, self.config.cache.fingerprint_prefix_chars),
        })
    }

    fn store(&self, key: Option<Fingerprint>, selection: SelectionResult) {
        let (Some(cache), Some(key)) = (&self.cache, key) else {
            return;
        };
        match cache.put(key, selection) {
            PutOutcome::InsertedWithEviction(victim) => {
                events::cache_evicted(victim.as_str(), cache.len());
            }
            PutOutcome::Faulted => {
                tracing::debug!("selection not cached after cache fault");
            }
            _ => {}
        }
    }

    fn select(
        &self,
        input: Input<'_>,
        controller: &mut DegradationController,
    ) -> Result<SelectionResult, StageFailure> {
        let features = self.features(input, controller)?;

        let pool = controller.required(PipelineStage::CandidateGeneration, || {
            self.generator.generate(&features)
        })?;
        let scored = controller.required(PipelineStage::Scoring, || {
            self.scorer.score_all(&pool, &features, self.corpus.as_ref())
        })?;
        let ranking = controller.required(PipelineStage::Selection, || self.selector.rank(scored))?;

        let changing_lines = match &self.policy {
            Some(policy) => controller
                .optional(PipelineStage::ChangingLines, NO_CHANGING_LINES, || {
                    policy
                        .changing_lines(ranking.winner.id, &features)
                        .and_then(checked_lines)
                })
                .unwrap_or_default(),
            None => Vec::new(),
        };

        tracing::debug!(
            pool = pool.len(),
            winner = ranking.winner.id.get(),
            score = ranking.winner.score,
            "selection computed"
        );

        Ok(SelectionResult {
            winner: ranking.winner,
            alternates: ranking.alternates,
            changing_lines,
            low_confidence: ranking.low_confidence,
            default_reason: ranking.default_reason,
            tier: controller.tier(),
            degraded_stages: controller.degraded_stages(),
        })
    }

    fn features(
        &self,
        input: Input<'_>,
        controller: &mut DegradationController,
    ) -> Result<SignalFeatures, StageFailure> {
        match input {
            Input::Answers(answers) => controller.required(PipelineStage::Aggregation, || {
                let profile = aggregate(answers).map_err(|e| ComputationError::ExtractionFailed {
                    reason: e.to_string(),
                })?;
                Ok(features::from_profile(&profile))
            }),
            Input::Text(text) => {
                let extraction = controller.required(PipelineStage::TextExtraction, || {
                    self.extractor
                        .extract(text)
                        .map_err(|e| ComputationError::ExtractionFailed {
                            reason: e.to_string(),
                        })
                })?;
                for event in extraction.degradations {
                    controller.absorb(event);
                }
                for (attached, stage) in [
                    (self.has_analyzer, PipelineStage::LinguisticAnalyzer),
                    (self.has_persona_mapper, PipelineStage::PersonaMapper),
                ] {
                    if attached && !controller.has_degraded(stage) {
                        controller.complete(stage);
                    }
                }
                Ok(features::from_text(&extraction.signal))
            }
        }
    }

    /// Push this reading's outcomes into the cross-reading log.
    fn track(
        &self,
        events: &[DegradationEvent],
        completed: &[PipelineStage],
        failure: Option<&StageFailure>,
    ) {
        let mut tracker = self.tracker();
        for &stage in completed {
            if tracker.is_degraded(stage) {
                tracker.mark_recovered(stage);
            }
        }
        for event in events {
            tracker.record(event.clone());
        }
        if let Some(failure) = failure {
            tracker.record(DegradationEvent::new(
                failure.stage,
                failure.error.to_string(),
                DEFAULT_READING,
            ));
        }
    }
}

/// Accept a policy's lines only when ascending, unique, and within 1..=6.
fn checked_lines(lines: Vec<u8>) -> Result<Vec<u8>, ComputationError> {
    let in_range = lines.iter().all(|l| (1..=6).contains(l));
    let ascending = lines.windows(2).all(|w| w[0] < w[1]);
    if in_range && ascending {
        Ok(lines)
    } else {
        Err(ComputationError::ChangingLinesFailed {
            reason: format!("malformed line positions {lines:?}"),
        })
    }
}

impl std::fmt::Debug for DivinationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DivinationEngine")
            .field("corpus_len", &self.corpus.len())
            .field("cache", &self.cache)
            .field("has_analyzer", &self.has_analyzer)
            .field("has_persona_mapper", &self.has_persona_mapper)
            .field("changing_lines", &self.policy.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_lines_rejected() {
        assert_eq!(checked_lines(vec![1, 4, 6]).unwrap(), vec![1, 4, 6]);
        assert!(checked_lines(vec![0]).is_err());
        assert!(checked_lines(vec![7]).is_err());
        assert!(checked_lines(vec![4, 2]).is_err());
        assert!(checked_lines(vec![3, 3]).is_err());
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DivinationEngine>();
    }

    #[test]
    fn disabled_cache_is_dropped() {
        let mut config = AugurConfig::default();
        config.cache.enabled = false;
        let cache = Arc::new(ResultCache::new(&config.cache).unwrap());
        let engine = DivinationEngine::builder(config).cache(cache).build().unwrap();
        assert!(engine.cache().is_none());
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = AugurConfig::default();
        config.scoring.weights.emotional_fit = 0.9;
        assert!(DivinationEngine::new(config).is_err());
    }
}
