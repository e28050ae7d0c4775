use std::collections::HashMap;

use crate::models::{LanguageShare, Repository};

pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| u64::from(r.stargazers_count)).sum()
}

// Repository count per language, in the order each language was first seen
// while walking the listing. Repositories with no detected language are not
// counted here but still belong to the share denominator.
pub fn language_frequencies(repos: &[Repository]) -> Vec<(String, u32)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for repo in repos {
        if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            if !counts.contains_key(language) {
                order.push(language.to_string());
            }
            *counts.entry(language.to_string()).or_insert(0) += 1;
        }
    }

    order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            (name, count)
        })
        .collect()
}

// Shares are computed against the total repository count, not just the
// repositories that report a language, so they can sum to less than 100%.
pub fn language_shares(repos: &[Repository]) -> Vec<LanguageShare> {
    if repos.is_empty() {
        return Vec::new();
    }
    let total = repos.len() as f64;

    language_frequencies(repos)
        .into_iter()
        .map(|(name, count)| LanguageShare {
            name,
            percentage: format!("{:.2}%", f64::from(count) / total * 100.0),
        })
        .collect()
}

// Highest repository count wins; a tie keeps whichever language was seen
// first in the listing.
pub fn dominant_language(repos: &[Repository]) -> Option<LanguageShare> {
    let mut best: Option<(String, u32)> = None;

    for (name, count) in language_frequencies(repos) {
        let replace = match &best {
            Some((_, best_count)) => count > *best_count,
            None => true,
        };
        if replace {
            best = Some((name, count));
        }
    }

    let (name, count) = best?;
    let total = repos.len() as f64;

    Some(LanguageShare {
        name,
        percentage: format!("{:.2}%", f64::from(count) / total * 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(stars: u32, language: Option<&str>) -> Repository {
        Repository {
            name: "fixture".to_string(),
            stargazers_count: stars,
            language: language.map(String::from),
        }
    }

    #[test]
    fn total_stars_of_empty_listing_is_zero() {
        assert_eq!(total_stars(&[]), 0);
    }

    #[test]
    fn total_stars_sums_every_repository() {
        assert_eq!(total_stars(&[repo(7, None)]), 7);

        let repos: Vec<_> = [1, 2, 3, 4, 5].iter().map(|&s| repo(s, None)).collect();
        assert_eq!(total_stars(&repos), 15);

        // duplicate counts are summed, not deduplicated
        let repos: Vec<_> = [3, 3, 3].iter().map(|&s| repo(s, None)).collect();
        assert_eq!(total_stars(&repos), 9);
    }

    #[test]
    fn uniform_language_owns_the_full_share() {
        let repos: Vec<_> = (0..4).map(|_| repo(0, Some("Rust"))).collect();

        let dominant = dominant_language(&repos).unwrap();
        assert_eq!(dominant.name, "Rust");
        assert_eq!(dominant.percentage, "100.00%");
    }

    #[test]
    fn no_reported_languages_means_no_shares() {
        let repos = vec![repo(1, None), repo(2, None), repo(3, Some(""))];

        assert!(language_shares(&repos).is_empty());
        assert!(dominant_language(&repos).is_none());
    }

    #[test]
    fn empty_listing_produces_no_shares() {
        assert!(language_shares(&[]).is_empty());
        assert!(dominant_language(&[]).is_none());
    }

    #[test]
    fn shares_are_relative_to_the_whole_listing() {
        // two TS, one JS, two with no language: denominators stay at five
        let repos = vec![
            repo(0, Some("TypeScript")),
            repo(0, Some("TypeScript")),
            repo(0, Some("JavaScript")),
            repo(0, None),
            repo(0, None),
        ];

        let shares = language_shares(&repos);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].name, "TypeScript");
        assert_eq!(shares[0].percentage, "40.00%");
        assert_eq!(shares[1].name, "JavaScript");
        assert_eq!(shares[1].percentage, "20.00%");
    }

    #[test]
    fn percentages_always_carry_two_decimals() {
        let repos = vec![repo(0, Some("Go")), repo(0, Some("C")), repo(0, Some("C"))];

        let shares = language_shares(&repos);
        assert_eq!(shares[0].percentage, "33.33%");
        assert_eq!(shares[1].percentage, "66.67%");
    }

    #[test]
    fn dominant_is_highest_count_not_first_seen() {
        let repos = vec![
            repo(0, Some("JavaScript")),
            repo(0, Some("TypeScript")),
            repo(0, Some("TypeScript")),
        ];

        let dominant = dominant_language(&repos).unwrap();
        assert_eq!(dominant.name, "TypeScript");
        assert_eq!(dominant.percentage, "66.67%");
    }

    #[test]
    fn dominant_tie_keeps_first_seen_language() {
        let repos = vec![repo(0, Some("Go")), repo(0, Some("Rust"))];

        let dominant = dominant_language(&repos).unwrap();
        assert_eq!(dominant.name, "Go");
        assert_eq!(dominant.percentage, "50.00%");
    }

    #[test]
    fn frequencies_preserve_first_seen_order() {
        let repos = vec![
            repo(0, Some("TypeScript")),
            repo(0, Some("TypeScript")),
            repo(0, Some("JavaScript")),
            repo(0, Some("TypeScript")),
            repo(0, Some("Go")),
        ];

        let frequencies = language_frequencies(&repos);
        assert_eq!(
            frequencies,
            vec![
                ("TypeScript".to_string(), 3),
                ("JavaScript".to_string(), 1),
                ("Go".to_string(), 1),
            ]
        );
    }
}
