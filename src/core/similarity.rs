use std::collections::HashSet;

/// Jaccard overlap of two string-tag sets: `|A∩B| / |A∪B|`
///
/// Duplicates within a slice count once. Returns 0.0 when the union is
/// empty so sparse profiles never produce NaN.
#[inline]
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Intersection of two string-tag sets, sorted for stable output
pub fn shared_tags(a: &[String], b: &[String]) -> Vec<String> {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let mut shared: Vec<String> = set_a
        .intersection(&set_b)
        .map(|tag| tag.to_string())
        .collect();
    shared.sort();
    shared
}

/// Cosine similarity of two equal-length vectors, in `[-1, 1]`
///
/// Returns 0.0 for mismatched lengths or zero-magnitude vectors rather
/// than dividing by zero. Callers that treat mismatched vectors as
/// "missing" must check lengths themselves first.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x as f64 * y as f64;
        norm_a += x as f64 * x as f64;
        norm_b += y as f64 * y as f64;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
