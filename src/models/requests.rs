use serde::Deserialize;

use crate::models::profile::{Embedding, PrivateProfile, PublicProfile};

/// Everything the boundary resolves before asking for a score: the two
/// profile bundles, their optional private halves and embeddings, and the
/// routing collaborator's travel-time estimate.
///
/// Private profiles and embeddings are optional on the wire; the engine
/// degrades to neutral defaults for whatever is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringInput {
    #[serde(rename = "travelTimeMinutes", default)]
    pub travel_time_minutes: Option<f64>,
    #[serde(rename = "userProfile", default)]
    pub user_profile: PublicProfile,
    #[serde(rename = "matchProfile", default)]
    pub match_profile: PublicProfile,
    #[serde(rename = "userPrivateProfile", default)]
    pub user_private_profile: Option<PrivateProfile>,
    #[serde(rename = "matchPrivateProfile", default)]
    pub match_private_profile: Option<PrivateProfile>,
    #[serde(rename = "userEmbedding", default)]
    pub user_embedding: Option<Embedding>,
    #[serde(rename = "matchEmbedding", default)]
    pub match_embedding: Option<Embedding>,
}
