//! The ten dimension scorers.
//!
//! Each scorer is a pure function over a narrow slice of profile data,
//! bounded by its dimension maximum from [`tables`](crate::core::tables).
//! None of them throw or return errors: missing or malformed data maps to
//! a documented neutral default so the combinator can always produce a
//! finite probability.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::core::similarity::{cosine_similarity, jaccard, shared_tags};
use crate::core::tables::{
    role_matrix, Role, HARD_CONFLICT_CAP, INTENT_ALIGNMENT_MAX, KINK_OVERLAP_MAX, LIFESTYLE_MAX,
    RECENCY_FLOOR, RECENCY_TIERS, ROLE_UNKNOWN, SEMANTIC_TEXT_MAX, TRAVEL_TIME_BUCKETS,
    TRAVEL_TIME_FLOOR, TRAVEL_TIME_UNKNOWN,
};
use crate::models::{ChemistryScore, HostingScore, KinkOverlapScore, PrivateProfile, PublicProfile};

/// Score how reachable the match is, bucketed by estimated travel time
/// in minutes (max 20). Unknown or non-finite estimates get a neutral 10.
#[inline]
pub fn travel_time_score(travel_time_minutes: Option<f64>) -> u8 {
    let minutes = match travel_time_minutes {
        Some(m) if m.is_finite() => m,
        _ => return TRAVEL_TIME_UNKNOWN,
    };

    for (bound, score) in TRAVEL_TIME_BUCKETS {
        if minutes <= bound {
            return score;
        }
    }
    TRAVEL_TIME_FLOOR
}

/// Score role compatibility from the two position labels (max 15).
///
/// Symmetric by construction; a missing or unrecognized label on either
/// side yields the neutral 10.
#[inline]
pub fn role_compat_score(user_position: Option<&str>, match_position: Option<&str>) -> u8 {
    let user_role = user_position.and_then(Role::from_label);
    let match_role = match_position.and_then(Role::from_label);

    match (user_role, match_role) {
        (Some(a), Some(b)) => role_matrix(a, b),
        _ => ROLE_UNKNOWN,
    }
}

/// Score shared kinks (max 15) and flag hard-limit conflicts.
///
/// The base score is the Jaccard overlap of the two kink sets scaled to
/// the dimension maximum. A kink of one party appearing in the other's
/// hard limits caps the score at 4, strictly below the neutral floors
/// used elsewhere, so conflicted pairs always sink. Soft limits are
/// reserved and not scored yet.
pub fn kink_overlap_score(
    user_kinks: &[String],
    match_kinks: &[String],
    user_hard_limits: &[String],
    match_hard_limits: &[String],
) -> KinkOverlapScore {
    let overlap = jaccard(user_kinks, match_kinks);
    let base = (KINK_OVERLAP_MAX as f64 * overlap).round() as u8;

    let user_limits: HashSet<&str> = user_hard_limits.iter().map(String::as_str).collect();
    let match_limits: HashSet<&str> = match_hard_limits.iter().map(String::as_str).collect();

    let has_hard_conflict = user_kinks
        .iter()
        .any(|kink| match_limits.contains(kink.as_str()))
        || match_kinks
            .iter()
            .any(|kink| user_limits.contains(kink.as_str()));

    let score = if has_hard_conflict {
        base.min(HARD_CONFLICT_CAP)
    } else {
        base
    };

    KinkOverlapScore {
        score,
        overlaps: shared_tags(user_kinks, match_kinks),
        has_hard_conflict,
    }
}

/// Score alignment of what both parties are looking for (max 12):
/// shared `looking_for` tags scaled to 6 points, plus 3 points each for
/// matching relationship status and time horizon. Absent fields simply
/// earn no bonus.
pub fn intent_alignment_score(user: &PublicProfile, candidate: &PublicProfile) -> u8 {
    let mut score = (6.0 * jaccard(&user.looking_for, &candidate.looking_for)).round() as u8;

    if user.relationship_status.is_some()
        && user.relationship_status == candidate.relationship_status
    {
        score += 3;
    }
    if user.time_horizon.is_some() && user.time_horizon == candidate.time_horizon {
        score += 3;
    }

    score.min(INTENT_ALIGNMENT_MAX)
}

/// Score semantic closeness of the two bios via their embeddings
/// (max 12). Profiles without a usable embedding pair (missing, empty,
/// or mismatched lengths) get a neutral 6; negative similarity floors
/// at 0 rather than going negative.
pub fn semantic_text_score(user: Option<&[f32]>, candidate: Option<&[f32]>) -> u8 {
    let (a, b) = match (user, candidate) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() && a.len() == b.len() => (a, b),
        _ => return SEMANTIC_TEXT_MAX / 2,
    };

    let similarity = cosine_similarity(a, b).max(0.0);
    (SEMANTIC_TEXT_MAX as f64 * similarity).round() as u8
}

/// Score lifestyle alignment (max 10): smoking and drinking matches are
/// worth 3 each, fitness 2, and shared scene affinity up to 2.
pub fn lifestyle_score(user: &PublicProfile, candidate: &PublicProfile) -> u8 {
    let mut score = 0u8;

    if user.smoking.is_some() && user.smoking == candidate.smoking {
        score += 3;
    }
    if user.drinking.is_some() && user.drinking == candidate.drinking {
        score += 3;
    }
    if user.fitness.is_some() && user.fitness == candidate.fitness {
        score += 2;
    }
    score += (2.0 * jaccard(&user.scene_affinity, &candidate.scene_affinity)).round() as u8;

    score.min(LIFESTYLE_MAX)
}

/// Score the mutually-gated chem preference (max 3, optional dimension).
///
/// Only applicable when both parties enabled chem visibility; the
/// combinator must drop an inapplicable result entirely instead of
/// counting it as zero.
pub fn chemistry_score(user: &PrivateProfile, candidate: &PrivateProfile) -> ChemistryScore {
    if !user.chem_visibility_enabled || !candidate.chem_visibility_enabled {
        return ChemistryScore {
            applicable: false,
            score: 0,
        };
    }

    let score = if user.chem_friendly.is_some() && user.chem_friendly == candidate.chem_friendly {
        3
    } else {
        0
    };

    ChemistryScore {
        applicable: true,
        score,
    }
}

/// Recency tier for a given elapsed time since last seen, in minutes.
/// Bounds are inclusive, so exactly 72 hours still earns the 2-point
/// tier. Negative elapsed times (clock skew) count as "just now".
#[inline]
pub fn recency_tier(elapsed_minutes: i64) -> u8 {
    let elapsed = elapsed_minutes.max(0);

    for (bound, score) in RECENCY_TIERS {
        if elapsed <= bound {
            return score;
        }
    }
    RECENCY_FLOOR
}

/// Score how recently the candidate was active (max 8), evaluated
/// against the wall clock at call time. Never-seen profiles get the
/// floor of 1.
pub fn activity_recency_score(last_seen: Option<DateTime<Utc>>) -> u8 {
    match last_seen {
        Some(seen) => recency_tier((Utc::now() - seen).num_minutes()),
        None => RECENCY_FLOOR,
    }
}

/// Score how filled-out a profile is (max 8): one point per check.
///
/// The position check is satisfied by either the public or the private
/// half, since some users only state a role privately.
pub fn profile_completeness_score(profile: &PublicProfile, private: &PrivateProfile) -> u8 {
    let has_text = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    };

    let checks = [
        !profile.photos.is_empty(),
        profile.bio.chars().count() >= 100,
        has_text(&profile.city),
        !profile.tags.is_empty(),
        !profile.looking_for.is_empty(),
        profile.verified,
        !private.kinks.is_empty(),
        has_text(&profile.position) || has_text(&private.position),
    ];

    checks.iter().filter(|&&passed| passed).count() as u8
}

/// Normalized hosting capability parsed from the profile's free-text
/// hosting statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostingStatus {
    CanHost,
    TravelOnly,
}

fn parse_hosting(statement: &str) -> Option<HostingStatus> {
    let normalized = statement.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let negated = normalized.contains("can't host")
        || normalized.contains("cannot host")
        || normalized.contains("can not host")
        || normalized.contains("don't host");

    if !negated && normalized.contains("host") {
        Some(HostingStatus::CanHost)
    } else if normalized.contains("travel") || normalized.contains("hotel") {
        Some(HostingStatus::TravelOnly)
    } else if negated {
        // "Can't host" with no travel mention still states a status
        Some(HostingStatus::TravelOnly)
    } else {
        None
    }
}

/// Score hosting logistics (max 3, optional dimension).
///
/// Returns `None` when either side supplies no recognizable hosting
/// statement, in which case the combinator leaves the dimension out.
/// Compatible whenever at least one side can host; incompatible when
/// both can only travel.
pub fn hosting_score(user: Option<&str>, candidate: Option<&str>) -> Option<HostingScore> {
    let user_status = user.and_then(parse_hosting)?;
    let candidate_status = candidate.and_then(parse_hosting)?;

    let compatible =
        user_status == HostingStatus::CanHost || candidate_status == HostingStatus::CanHost;

    Some(HostingScore {
        compatible,
        score: if compatible { 3 } else { 0 },
    })
}
