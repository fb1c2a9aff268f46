use serde::{Deserialize, Serialize};

/// Per-dimension scores backing a match probability.
///
/// The eight always-on dimensions are present in every breakdown; the two
/// optional dimensions (`chemistry`, `hosting`) appear only when their
/// applicability preconditions held for the scored pair, and are omitted
/// from the serialized form otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub travel_time: u8,
    pub role_compat: u8,
    pub kink_overlap: u8,
    pub intent_alignment: u8,
    pub semantic_text: u8,
    pub lifestyle: u8,
    pub activity_recency: u8,
    pub profile_completeness: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemistry: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting: Option<u8>,
}

/// Final scoring result returned to the boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "matchProbability")]
    pub match_probability: u8,
    pub breakdown: ScoreBreakdown,
}

/// Kink dimension result: the score plus the shared kinks and whether one
/// party's kink landed in the other's hard limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinkOverlapScore {
    pub score: u8,
    /// Sorted intersection of the two kink sets
    pub overlaps: Vec<String>,
    pub has_hard_conflict: bool,
}

/// Chemistry dimension result. Only applicable when both parties opted
/// into chem visibility; an inapplicable result must be excluded from the
/// total entirely, not folded in as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChemistryScore {
    pub applicable: bool,
    pub score: u8,
}

/// Hosting dimension result, tagged the same way as [`ChemistryScore`]:
/// the combinator includes it only when both sides stated a hosting status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostingScore {
    pub compatible: bool,
    pub score: u8,
}
