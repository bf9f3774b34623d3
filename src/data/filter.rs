use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Site selection – the value carried by the site dropdown
// ---------------------------------------------------------------------------

/// Current value of the launch-site selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// Aggregate over every site.
    All,
    /// Restrict to a single named site.
    Site(String),
}

impl SiteSelection {
    /// Text shown in the selector for this choice.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// Indices of records at the selected site.
pub fn site_indices(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(&rec.site))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records at the selected site whose payload mass lies within
/// the inclusive range.
///
/// The two range handles move independently, so the bounds may arrive in
/// either order; they are sorted before use.
pub fn payload_range_indices(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: (f64, f64),
) -> Vec<usize> {
    let (lo, hi) = sorted_range(range);
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.matches(&rec.site)
                && rec.payload_mass_kg >= lo
                && rec.payload_mass_kg <= hi
        })
        .map(|(i, _)| i)
        .collect()
}

fn sorted_range((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: "v1.0".to_string(),
        }
    }

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, Outcome::Success),
            record("CCAFS LC-40", 9000.0, Outcome::Failure),
            record("KSC LC-39A", 3000.0, Outcome::Success),
            record("VAFB SLC-4E", 6000.0, Outcome::Failure),
        ])
        .unwrap()
    }

    #[test]
    fn all_selection_keeps_every_record() {
        let ds = sample();
        assert_eq!(site_indices(&ds, &SiteSelection::All), vec![0, 1, 2, 3]);
    }

    #[test]
    fn site_selection_restricts_to_that_site() {
        let ds = sample();
        let selection = SiteSelection::Site("CCAFS LC-40".to_string());
        assert_eq!(site_indices(&ds, &selection), vec![0, 1]);
    }

    #[test]
    fn range_filter_is_commutative_in_handle_order() {
        let ds = sample();
        let forward = payload_range_indices(&ds, &SiteSelection::All, (500.0, 6000.0));
        let reversed = payload_range_indices(&ds, &SiteSelection::All, (6000.0, 500.0));
        assert_eq!(forward, reversed);
        assert_eq!(forward, vec![0, 2, 3]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = sample();
        let hits = payload_range_indices(&ds, &SiteSelection::All, (500.0, 9000.0));
        assert_eq!(hits.len(), ds.len());
    }

    #[test]
    fn narrowing_the_range_never_grows_the_view() {
        let ds = sample();
        let full = payload_range_indices(&ds, &SiteSelection::All, (0.0, 10_000.0));
        let narrower = payload_range_indices(&ds, &SiteSelection::All, (1000.0, 8000.0));
        let narrowest = payload_range_indices(&ds, &SiteSelection::All, (2000.0, 4000.0));
        assert!(narrower.len() <= full.len());
        assert!(narrowest.len() <= narrower.len());
        assert!(narrower.iter().all(|i| full.contains(i)));
        assert!(narrowest.iter().all(|i| narrower.contains(i)));
    }

    #[test]
    fn site_and_range_filters_compose() {
        let ds = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, Outcome::Success),
            record("CCAFS LC-40", 9000.0, Outcome::Failure),
        ])
        .unwrap();
        let selection = SiteSelection::Site("CCAFS LC-40".to_string());

        let wide = payload_range_indices(&ds, &selection, (0.0, 10_000.0));
        assert_eq!(wide, vec![0, 1]);

        let tight = payload_range_indices(&ds, &selection, (0.0, 1000.0));
        assert_eq!(tight, vec![0]);
    }
}
