// Model exports
pub mod profile;
pub mod requests;
pub mod score;

pub use profile::{Embedding, Photo, PrivateProfile, PublicProfile};
pub use requests::ScoringInput;
pub use score::{ChemistryScore, HostingScore, KinkOverlapScore, MatchResult, ScoreBreakdown};
