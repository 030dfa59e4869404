mod analyzer;
mod changing_lines;
mod corpus;
mod pipeline;

pub use analyzer::{ILinguisticAnalyzer, IPersonaMapper};
pub use changing_lines::IChangingLinePolicy;
pub use corpus::IHexagramCorpus;
pub use pipeline::{ICandidateGenerator, ICandidateScorer};
