use crate::models::Restaurant;
use rand::seq::SliceRandom;

/// Maximum number of restaurants presented for settling
pub const SHORTLIST_LIMIT: usize = 5;

/// Keep restaurants whose joined cuisine string contains either matched
/// cuisine (case-insensitive substring test), preserving fetch order, and
/// truncate to the shortlist limit. A `None` match never contributes.
pub fn filter_and_truncate(
    restaurants: Vec<Restaurant>,
    matched_a: Option<&str>,
    matched_b: Option<&str>,
) -> Vec<Restaurant> {
    let needle_a = matched_a.map(|m| m.to_lowercase());
    let needle_b = matched_b.map(|m| m.to_lowercase());

    let mut shortlist: Vec<Restaurant> = restaurants
        .into_iter()
        .filter(|restaurant| {
            let cuisines = restaurant.cuisines_joined().to_lowercase();
            let hit_a = needle_a.as_deref().is_some_and(|n| cuisines.contains(n));
            let hit_b = needle_b.as_deref().is_some_and(|n| cuisines.contains(n));
            hit_a || hit_b
        })
        .collect();

    shortlist.truncate(SHORTLIST_LIMIT);
    shortlist
}

/// Uniform random pick from the shortlist.
///
/// Returns `None` on an empty shortlist; callers must treat that as the
/// empty-shortlist condition, not as a pick.
pub fn settle_randomly(shortlist: &[Restaurant]) -> Option<&Restaurant> {
    shortlist.choose(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn restaurant(name: &str, cuisines: &[&str]) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
            address: "N/A".to_string(),
            coordinate: Coordinate::new(40.7128, -74.0060),
        }
    }

    #[test]
    fn test_keeps_either_match() {
        let restaurants = vec![
            restaurant("Roma", &["italian", "pizza"]),
            restaurant("Bangkok", &["thai"]),
            restaurant("Cantina", &["mexican"]),
        ];

        let shortlist = filter_and_truncate(restaurants, Some("italian"), Some("thai"));

        assert_eq!(shortlist.len(), 2);
        assert_eq!(shortlist[0].name, "Roma");
        assert_eq!(shortlist[1].name, "Bangkok");
    }

    #[test]
    fn test_case_insensitive_containment() {
        let restaurants = vec![restaurant("Roma", &["Italian", "Pizza"])];

        let shortlist = filter_and_truncate(restaurants, Some("italian"), None);
        assert_eq!(shortlist.len(), 1);
    }

    #[test]
    fn test_no_match_contributes_nothing() {
        let restaurants = vec![
            restaurant("Roma", &["italian"]),
            restaurant("Bangkok", &["thai"]),
        ];

        let shortlist = filter_and_truncate(restaurants, None, None);
        assert!(shortlist.is_empty());
    }

    #[test]
    fn test_truncates_to_limit_in_fetch_order() {
        let restaurants: Vec<Restaurant> = (0..10)
            .map(|i| restaurant(&format!("Place {}", i), &["italian"]))
            .collect();

        let shortlist = filter_and_truncate(restaurants, Some("italian"), None);

        assert_eq!(shortlist.len(), SHORTLIST_LIMIT);
        for (i, kept) in shortlist.iter().enumerate() {
            assert_eq!(kept.name, format!("Place {}", i));
        }
    }

    #[test]
    fn test_settle_returns_member() {
        let restaurants = vec![
            restaurant("Roma", &["italian"]),
            restaurant("Bangkok", &["thai"]),
        ];

        for _ in 0..20 {
            let pick = settle_randomly(&restaurants).expect("non-empty shortlist");
            assert!(restaurants.iter().any(|r| r.name == pick.name));
        }
    }

    #[test]
    fn test_settle_on_empty_is_none() {
        assert!(settle_randomly(&[]).is_none());
    }
}
