// Single source of truth for all default values.

// --- Text ---
pub const DEFAULT_MIN_TEXT_CHARS: usize = 5;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;
pub const DEFAULT_ANALYZER_TIMEOUT_MS: u64 = 500;
pub const DEFAULT_MAX_ANALYZER_WORKERS: usize = 4;
pub const DEFAULT_RELEVANCE_SATURATION: f64 = 3.0;

// --- Candidates ---
pub const DEFAULT_MAX_CANDIDATES: usize = 12;

// --- Scoring ---
pub const DEFAULT_WEIGHT_EMOTIONAL_FIT: f64 = 0.25;
pub const DEFAULT_WEIGHT_SITUATIONAL_FIT: f64 = 0.25;
pub const DEFAULT_WEIGHT_KEYWORD_ALIGNMENT: f64 = 0.20;
pub const DEFAULT_WEIGHT_PHILOSOPHICAL: f64 = 0.20;
pub const DEFAULT_WEIGHT_AUTHENTICITY: f64 = 0.10;
pub const DEFAULT_NEUTRAL_SCORE: f64 = 50.0;

// --- Selection ---
pub const DEFAULT_MAX_ALTERNATES: usize = 3;
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 30.0;
pub const DEFAULT_EMPTY_POOL_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_PARTIAL_CONFIDENCE_FACTOR: f64 = 0.85;

// --- Changing lines ---
pub const DEFAULT_CHANGING_LINES_ENABLED: bool = true;
pub const DEFAULT_INNER_LINE_THRESHOLD: f64 = 0.10;
pub const DEFAULT_OUTER_LINE_THRESHOLD: f64 = 0.20;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 100;
pub const DEFAULT_FINGERPRINT_PREFIX_CHARS: usize = 200;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

/// Tolerance used when checking that factor weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
