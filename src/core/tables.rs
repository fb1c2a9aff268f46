//! Static lookup data for the scoring dimensions.
//!
//! Everything here is hand-authored: the engine is not a learned model, so
//! the matrices and thresholds are plain constants that can be unit-tested
//! exhaustively.

/// Maximum score per dimension. The eight always-on maxima sum to exactly
/// 100; the optional dimensions sit on top and the combinator clamps.
pub const TRAVEL_TIME_MAX: u8 = 20;
pub const ROLE_COMPAT_MAX: u8 = 15;
pub const KINK_OVERLAP_MAX: u8 = 15;
pub const INTENT_ALIGNMENT_MAX: u8 = 12;
pub const SEMANTIC_TEXT_MAX: u8 = 12;
pub const LIFESTYLE_MAX: u8 = 10;
pub const ACTIVITY_RECENCY_MAX: u8 = 8;
pub const PROFILE_COMPLETENESS_MAX: u8 = 8;
pub const CHEMISTRY_MAX: u8 = 3;
pub const HOSTING_MAX: u8 = 3;

/// Neutral travel score when no estimate is available
pub const TRAVEL_TIME_UNKNOWN: u8 = 10;

/// Travel-time buckets as (upper bound in minutes, score), checked in
/// order. Anything beyond the last bound scores [`TRAVEL_TIME_FLOOR`].
pub const TRAVEL_TIME_BUCKETS: [(f64, u8); 5] =
    [(5.0, 20), (15.0, 18), (30.0, 15), (60.0, 10), (120.0, 5)];

/// Score for travel times beyond the last bucket
pub const TRAVEL_TIME_FLOOR: u8 = 2;

/// Neutral role score when either label is missing or unrecognized
pub const ROLE_UNKNOWN: u8 = 10;

/// Recency tiers as (upper bound in minutes since last seen, score),
/// inclusive bounds checked in order. Missing or older scores
/// [`RECENCY_FLOOR`].
pub const RECENCY_TIERS: [(i64, u8); 4] = [(15, 8), (60, 6), (1_440, 4), (4_320, 2)];

/// Score for profiles last seen beyond every tier, or never
pub const RECENCY_FLOOR: u8 = 1;

/// Hard kink conflicts cap the kink dimension here, deliberately below the
/// low-confidence floor of 5 used elsewhere so conflicted pairs always
/// rank under merely-unknown ones.
pub const HARD_CONFLICT_CAP: u8 = 4;

/// Normalized role labels used by the compatibility matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Top,
    Bottom,
    Vers,
    Flexible,
    Open,
    Side,
}

impl Role {
    /// Parse a free-text position label. Returns `None` for anything the
    /// matrix does not know, which the scorer maps to [`ROLE_UNKNOWN`].
    pub fn from_label(label: &str) -> Option<Role> {
        match label.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Role::Top),
            "bottom" => Some(Role::Bottom),
            "vers" | "versatile" => Some(Role::Vers),
            "flexible" => Some(Role::Flexible),
            "open" => Some(Role::Open),
            "side" => Some(Role::Side),
            _ => None,
        }
    }
}

/// Symmetric role-compatibility matrix.
///
/// Complementary pairs score highest, flexible/open pair well with
/// anyone, identical non-versatile pairs score low, and side mixes sit
/// between.
pub fn role_matrix(a: Role, b: Role) -> u8 {
    use Role::*;

    match (a, b) {
        // Complementary pairs
        (Top, Bottom) | (Bottom, Top) | (Vers, Vers) => 15,
        // Flexible/open pair well with anything, including each other
        (Flexible, _) | (_, Flexible) | (Open, _) | (_, Open) => 12,
        // Vers complements either fixed role
        (Vers, Top) | (Top, Vers) | (Vers, Bottom) | (Bottom, Vers) => 12,
        // Identical non-versatile pairs
        (Top, Top) | (Bottom, Bottom) | (Side, Side) => 5,
        // Side with a penetrative role
        (Side, _) | (_, Side) => 8,
    }
}
