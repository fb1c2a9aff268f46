//! Velvet Match - compatibility scoring engine for the Velvet nightlife app
//!
//! This library implements the match probability calculation behind the
//! "% match" badge: ten pure dimension scorers combined into a 0-100
//! probability with a per-dimension breakdown. It performs no I/O and
//! holds no state; the HTTP boundary resolves profile bundles and travel
//! times, calls [`calculate_match_probability`] once per request, and
//! serializes the result.

pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    calculate_match_probability, chemistry_score, hosting_score, kink_overlap_score,
    role_compat_score, semantic_text_score, travel_time_score,
};
pub use crate::models::{
    ChemistryScore, Embedding, HostingScore, KinkOverlapScore, MatchResult, Photo, PrivateProfile,
    PublicProfile, ScoreBreakdown, ScoringInput,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let result = calculate_match_probability(&ScoringInput::default());
        assert!(result.match_probability <= 100);
    }
}
