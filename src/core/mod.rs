// Core algorithm exports
pub mod dimensions;
pub mod scoring;
pub mod similarity;
pub mod tables;

pub use dimensions::{
    activity_recency_score, chemistry_score, hosting_score, intent_alignment_score,
    kink_overlap_score, lifestyle_score, profile_completeness_score, recency_tier,
    role_compat_score, semantic_text_score, travel_time_score,
};
pub use scoring::calculate_match_probability;
pub use similarity::{cosine_similarity, jaccard, shared_tags};
