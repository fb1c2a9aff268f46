use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A profile photo reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
}

/// Public half of a user's profile — everything visible on the grid
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicProfile {
    #[serde(default)]
    pub city: Option<String>,
    /// Role label ("top", "bottom", "vers", ...); free text, normalized at scoring time
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "lookingFor", default)]
    pub looking_for: Vec<String>,
    #[serde(rename = "relationshipStatus", default)]
    pub relationship_status: Option<String>,
    #[serde(rename = "timeHorizon", default)]
    pub time_horizon: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub fitness: Option<String>,
    #[serde(rename = "sceneAffinity", default)]
    pub scene_affinity: Vec<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "isVerified", default)]
    pub verified: bool,
    #[serde(rename = "lastSeen", default)]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Private half of a user's profile — only ever exchanged between the
/// data boundary and the scoring engine, never rendered to other users.
///
/// A missing private profile deserializes to `Default`, which makes every
/// private-data scorer fall back to its neutral/zero behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivateProfile {
    #[serde(default)]
    pub kinks: Vec<String>,
    /// Reserved for a future softer conflict tier; currently not scored
    #[serde(rename = "softLimits", default)]
    pub soft_limits: Vec<String>,
    #[serde(rename = "hardLimits", default)]
    pub hard_limits: Vec<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "chemVisibilityEnabled", default)]
    pub chem_visibility_enabled: bool,
    #[serde(rename = "chemFriendly", default)]
    pub chem_friendly: Option<bool>,
    /// One of a small set of free-text hosting statements ("Can host", ...)
    #[serde(default)]
    pub hosting: Option<String>,
}

/// Semantic embedding of a profile's free text. Absent for profiles that
/// have not been embedded yet; the semantic scorer treats empty or
/// length-mismatched vectors the same as absent ones.
pub type Embedding = Vec<f32>;
