use tracing::debug;

use crate::core::dimensions::{
    activity_recency_score, chemistry_score, hosting_score, intent_alignment_score,
    kink_overlap_score, lifestyle_score, profile_completeness_score, role_compat_score,
    semantic_text_score, travel_time_score,
};
use crate::models::{MatchResult, PrivateProfile, ScoreBreakdown, ScoringInput};

/// Calculate the 0-100 match probability for a pair of users, with the
/// per-dimension breakdown.
///
/// The eight always-on dimensions (their maxima sum to exactly 100) are
/// computed unconditionally; missing private profiles are treated as
/// empty so every scorer degrades to its neutral default instead of
/// failing. The two optional dimensions (chemistry, hosting) join the
/// total only when the pair actually supplied the gated data, and the
/// final sum is clamped to 100.
///
/// Never panics and never produces NaN, regardless of how sparse the
/// input bundle is.
pub fn calculate_match_probability(input: &ScoringInput) -> MatchResult {
    let empty = PrivateProfile::default();
    let user_private = input.user_private_profile.as_ref().unwrap_or(&empty);
    let match_private = input.match_private_profile.as_ref().unwrap_or(&empty);

    // Public position wins; privately-stated roles fill the gap
    let user_position = input
        .user_profile
        .position
        .as_deref()
        .or(user_private.position.as_deref());
    let match_position = input
        .match_profile
        .position
        .as_deref()
        .or(match_private.position.as_deref());

    let travel_time = travel_time_score(input.travel_time_minutes);
    let role_compat = role_compat_score(user_position, match_position);
    let kink = kink_overlap_score(
        &user_private.kinks,
        &match_private.kinks,
        &user_private.hard_limits,
        &match_private.hard_limits,
    );
    let intent_alignment = intent_alignment_score(&input.user_profile, &input.match_profile);
    let semantic_text = semantic_text_score(
        input.user_embedding.as_deref(),
        input.match_embedding.as_deref(),
    );
    let lifestyle = lifestyle_score(&input.user_profile, &input.match_profile);
    let activity_recency = activity_recency_score(input.match_profile.last_seen);
    let profile_completeness = profile_completeness_score(&input.match_profile, match_private);

    let chemistry = chemistry_score(user_private, match_private);
    let hosting = hosting_score(
        user_private.hosting.as_deref(),
        match_private.hosting.as_deref(),
    );

    let breakdown = ScoreBreakdown {
        travel_time,
        role_compat,
        kink_overlap: kink.score,
        intent_alignment,
        semantic_text,
        lifestyle,
        activity_recency,
        profile_completeness,
        chemistry: chemistry.applicable.then_some(chemistry.score),
        hosting: hosting.map(|h| h.score),
    };

    let raw_total = travel_time as u32
        + role_compat as u32
        + kink.score as u32
        + intent_alignment as u32
        + semantic_text as u32
        + lifestyle as u32
        + activity_recency as u32
        + profile_completeness as u32
        + breakdown.chemistry.unwrap_or(0) as u32
        + breakdown.hosting.unwrap_or(0) as u32;

    let match_probability = raw_total.min(100) as u8;

    debug!(
        match_probability,
        hard_conflict = kink.has_hard_conflict,
        "match probability computed"
    );

    MatchResult {
        match_probability,
        breakdown,
    }
}
