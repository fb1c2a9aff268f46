// Scenario tests for the Velvet Match scoring engine, driven through the
// public API the boundary uses.

use chrono::{Duration, Utc};
use velvet_match::core::{
    activity_recency_score, intent_alignment_score, lifestyle_score, profile_completeness_score,
};
use velvet_match::{
    calculate_match_probability, kink_overlap_score, role_compat_score, semantic_text_score,
    travel_time_score, PrivateProfile, PublicProfile, ScoringInput,
};

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_travel_time_contract_values() {
    assert_eq!(travel_time_score(Some(3.0)), 20);
    assert_eq!(travel_time_score(Some(25.0)), 15);
    assert_eq!(travel_time_score(Some(180.0)), 2);
    assert_eq!(travel_time_score(None), 10);
}

#[test]
fn test_role_compat_contract_values() {
    assert_eq!(role_compat_score(Some("top"), Some("bottom")), 15);
    assert_eq!(role_compat_score(Some("top"), Some("top")), 5);
    assert_eq!(role_compat_score(Some("flexible"), Some("bottom")), 12);
}

#[test]
fn test_role_compat_is_symmetric() {
    let labels = [
        Some("top"),
        Some("bottom"),
        Some("vers"),
        Some("flexible"),
        Some("open"),
        Some("side"),
        Some("unknown"),
        None,
    ];

    for a in labels {
        for b in labels {
            assert_eq!(role_compat_score(a, b), role_compat_score(b, a), "{:?}/{:?}", a, b);
        }
    }
}

#[test]
fn test_kink_overlap_contract_values() {
    let kinks = tags(&["bondage", "leather"]);
    let identical = kink_overlap_score(&kinks, &kinks, &[], &[]);
    assert_eq!(identical.score, 15);
    assert!(identical.overlaps.contains(&"bondage".to_string()));

    let conflicted = kink_overlap_score(&tags(&["bondage"]), &tags(&["leather"]), &[], &tags(&["bondage"]));
    assert!(conflicted.has_hard_conflict);
    assert!(conflicted.score < 5);
}

#[test]
fn test_semantic_contract_values() {
    let v = vec![0.4f32, -0.2, 0.9, 0.1];
    assert_eq!(semantic_text_score(Some(&v), Some(&v)), 12);

    let a = vec![1.0f32, 0.0, 0.0, 0.0, 0.0];
    let b = vec![0.0f32, 1.0, 0.0, 0.0, 0.0];
    assert_eq!(semantic_text_score(Some(&a), Some(&b)), 0);

    assert_eq!(semantic_text_score(None, None), 6);
}

#[test]
fn test_activity_recency_contract_values() {
    assert_eq!(activity_recency_score(Some(Utc::now() - Duration::minutes(2))), 8);
    // Exactly three days ago still lands in the 72h tier
    assert_eq!(activity_recency_score(Some(Utc::now() - Duration::days(3) + Duration::seconds(30))), 2);
}

#[test]
fn test_empty_profiles_produce_finite_probability() {
    let result = calculate_match_probability(&ScoringInput::default());

    assert!(result.match_probability <= 100);
    // The breakdown is fully populated even for empty inputs
    assert_eq!(result.breakdown.role_compat, 10);
}

#[test]
fn test_closer_candidate_outranks_farther_twin() {
    let near = calculate_match_probability(&ScoringInput {
        travel_time_minutes: Some(5.0),
        ..ScoringInput::default()
    });
    let far = calculate_match_probability(&ScoringInput {
        travel_time_minutes: Some(90.0),
        ..ScoringInput::default()
    });

    assert!(near.match_probability > far.match_probability);
}

#[test]
fn test_breakdown_serializes_with_wire_keys() {
    let result = calculate_match_probability(&ScoringInput::default());
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["matchProbability"].is_number());
    for key in [
        "travelTime",
        "roleCompat",
        "kinkOverlap",
        "intentAlignment",
        "semanticText",
        "lifestyle",
        "activityRecency",
        "profileCompleteness",
    ] {
        assert!(json["breakdown"][key].is_number(), "missing breakdown key {key}");
    }
    assert!(json["breakdown"].get("chemistry").is_none());
    assert!(json["breakdown"].get("hosting").is_none());
}

#[test]
fn test_end_to_end_json_request() {
    // The exact shape the HTTP boundary sends after resolving both users
    let payload = r#"{
        "travelTimeMinutes": 12,
        "userProfile": {
            "city": "Berlin",
            "position": "top",
            "lookingFor": ["dates"],
            "relationshipStatus": "single",
            "lastSeen": "2026-08-01T22:15:00Z"
        },
        "matchProfile": {
            "city": "Berlin",
            "position": "bottom",
            "lookingFor": ["dates"],
            "relationshipStatus": "single"
        },
        "userPrivateProfile": { "kinks": ["leather"], "hosting": "Can host" },
        "matchPrivateProfile": { "kinks": ["leather"], "hosting": "Can't host but can travel" }
    }"#;

    let input: ScoringInput = serde_json::from_str(payload).unwrap();
    let result = calculate_match_probability(&input);

    assert_eq!(result.breakdown.travel_time, 18);
    assert_eq!(result.breakdown.role_compat, 15);
    assert_eq!(result.breakdown.kink_overlap, 15);
    // Shared intent tag (6) plus matching relationship status (3)
    assert_eq!(result.breakdown.intent_alignment, 9);
    assert_eq!(result.breakdown.hosting, Some(3));
    assert!(result.breakdown.chemistry.is_none());
    assert!(result.match_probability <= 100);
}

#[test]
fn test_idempotent_for_identical_inputs() {
    let mut private = PrivateProfile::default();
    private.kinks = tags(&["leather", "gear"]);
    private.hosting = Some("Can host".to_string());

    let input = ScoringInput {
        travel_time_minutes: Some(22.0),
        user_private_profile: Some(private.clone()),
        match_private_profile: Some(private),
        ..ScoringInput::default()
    };

    let first = calculate_match_probability(&input);
    let second = calculate_match_probability(&input);

    assert_eq!(first, second);
}

#[test]
fn test_sparse_and_full_profiles_mix() {
    // One side complete, the other blank: everything still in range
    let mut profile = PublicProfile::default();
    profile.bio = "long enough bio ".repeat(10);
    profile.city = Some("Hamburg".to_string());
    profile.looking_for = tags(&["friends", "dates"]);
    profile.verified = true;

    let input = ScoringInput {
        match_profile: profile,
        ..ScoringInput::default()
    };

    let result = calculate_match_probability(&input);

    assert!(result.match_probability <= 100);
    assert!(result.breakdown.profile_completeness >= 3);
}

#[test]
fn test_completeness_and_intent_direct() {
    let mut profile = PublicProfile::default();
    profile.looking_for = tags(&["dates"]);
    profile.time_horizon = Some("this week".to_string());

    assert_eq!(intent_alignment_score(&profile, &profile.clone()), 9);
    assert_eq!(lifestyle_score(&profile, &profile.clone()), 0);
    assert_eq!(
        profile_completeness_score(&profile, &PrivateProfile::default()),
        1
    );
}
