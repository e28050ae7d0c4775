use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeDescriptor {
    pub label: &'static str,
    pub icon: &'static str,
}

// Presentation configuration: each band is (inclusive upper bound, label,
// icon), first match wins. Counts above the last bound take TOP_BAND.
const LEVEL_BANDS: &[(u64, &str, &str)] = &[
    (49, "New Contributor", "badges/level-1.png"),
    (199, "Regular Committer", "badges/level-2.png"),
    (499, "Branch Veteran", "badges/level-3.png"),
    (1999, "Merge Specialist", "badges/level-4.png"),
];

const TOP_BAND: BadgeDescriptor = BadgeDescriptor {
    label: "Commit Legend",
    icon: "badges/level-5.png",
};

const UNRANKED: BadgeDescriptor = BadgeDescriptor {
    label: "Unranked",
    icon: "badges/unranked.png",
};

// Total over every input: an unknown count maps to the Unranked badge
// instead of failing.
pub fn classify(total_commits: Option<u64>) -> BadgeDescriptor {
    let commits = match total_commits {
        Some(count) => count,
        None => return UNRANKED,
    };

    for &(upper, label, icon) in LEVEL_BANDS {
        if commits <= upper {
            return BadgeDescriptor { label, icon };
        }
    }

    TOP_BAND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_count_is_unranked() {
        assert_eq!(classify(None).label, "Unranked");
    }

    #[test]
    fn every_band_boundary_lands_on_the_documented_side() {
        // upper bounds are inclusive
        assert_eq!(classify(Some(0)).label, "New Contributor");
        assert_eq!(classify(Some(49)).label, "New Contributor");
        assert_eq!(classify(Some(50)).label, "Regular Committer");
        assert_eq!(classify(Some(199)).label, "Regular Committer");
        assert_eq!(classify(Some(200)).label, "Branch Veteran");
        assert_eq!(classify(Some(499)).label, "Branch Veteran");
        assert_eq!(classify(Some(500)).label, "Merge Specialist");
        assert_eq!(classify(Some(1999)).label, "Merge Specialist");
        assert_eq!(classify(Some(2000)).label, "Commit Legend");
        assert_eq!(classify(Some(u64::MAX)).label, "Commit Legend");
    }

    #[test]
    fn every_badge_carries_an_icon() {
        for count in [None, Some(0), Some(100), Some(300), Some(700), Some(5000)] {
            assert!(classify(count).icon.ends_with(".png"));
        }
    }
}
