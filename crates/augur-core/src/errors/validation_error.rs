/// Malformed or too-short input. Surfaced directly to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("text too short: {length} characters after trimming, minimum is {minimum}")]
    TextTooShort { length: usize, minimum: usize },

    #[error("answer sequence is empty")]
    EmptyAnswers,

    #[error("answer at position {position} has an empty question id")]
    MissingQuestionId { position: usize },

    #[error("duplicate question id: {question_id}")]
    DuplicateQuestion { question_id: String },

    #[error("question {question_id}: choice {choice} is outside 1..=5")]
    ChoiceOutOfRange { question_id: String, choice: u8 },

    #[error("trait component {index} is invalid: {value}")]
    InvalidTraitComponent { index: usize, value: f64 },

    #[error("hexagram id {id} is outside 1..=64")]
    HexagramOutOfRange { id: u32 },
}
