use crate::models::CuisineUniverse;
use strsim::jaro_winkler;

/// Find the best approximate match for a cuisine preference within the
/// universe of cuisine tags observed in one fetch.
///
/// Returns `None` when the preference is empty (or whitespace-only) or the
/// universe is empty. Otherwise the highest-scoring tag is returned with no
/// minimum-similarity threshold: even a poor match is still "the best
/// available". Scoring is Jaro-Winkler over lowercased strings.
///
/// Tie-break: the universe iterates in lexicographic order and a strictly
/// greater score is required to displace the current best, so among
/// equally-scoring candidates the lexicographically first one wins.
pub fn match_best(preference: &str, universe: &CuisineUniverse) -> Option<String> {
    let preference = preference.trim();
    if preference.is_empty() || universe.is_empty() {
        return None;
    }

    let needle = preference.to_lowercase();

    let mut best: Option<(&String, f64)> = None;
    for candidate in universe {
        let score = jaro_winkler(&needle, &candidate.to_lowercase());
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(candidate, _)| candidate.clone())
}
