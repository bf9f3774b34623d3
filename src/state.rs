use crate::chart::{self, PieSpec, ScatterSpec};
use crate::color::ColorMap;
use crate::data::filter::SiteSelection;
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering: the immutable base table,
/// the current control values, and the chart specifications derived from
/// them. The specifications are cached and recomputed only when a control
/// changes.
pub struct AppState {
    /// Base table, loaded once at startup and never mutated.
    pub dataset: LaunchDataset,

    /// Current value of the site selector.
    pub site: SiteSelection,

    /// Current payload-range handles, kilograms. The handles move
    /// independently and may cross; the chart handlers sort before use.
    pub payload_range: (f64, f64),

    /// Stable colour per booster version.
    pub booster_colors: ColorMap,

    /// Cached pie specification for the current selection.
    pub pie: PieSpec,

    /// Cached scatter specification for the current selection and range.
    pub scatter: ScatterSpec,
}

impl AppState {
    /// Build the initial state: all sites, full payload range.
    pub fn new(dataset: LaunchDataset) -> Self {
        let site = SiteSelection::All;
        let payload_range = (dataset.min_payload, dataset.max_payload);
        let booster_colors = ColorMap::new(&dataset.booster_versions);
        let pie = chart::success_pie(&dataset, &site);
        let scatter = chart::payload_scatter(&dataset, &site, payload_range);

        Self {
            dataset,
            site,
            payload_range,
            booster_colors,
            pie,
            scatter,
        }
    }

    /// The site selector changed.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.site != site {
            self.site = site;
            self.refresh_charts();
        }
    }

    /// A payload-range handle moved.
    pub fn set_payload_range(&mut self, range: (f64, f64)) {
        if self.payload_range != range {
            self.payload_range = range;
            self.refresh_charts();
        }
    }

    /// Re-run both chart handlers against the current control values.
    fn refresh_charts(&mut self) {
        self.pie = chart::success_pie(&self.dataset, &self.site);
        self.scatter = chart::payload_scatter(&self.dataset, &self.site, self.payload_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord, Outcome};

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "CCAFS LC-40".to_string(),
                payload_mass_kg: 500.0,
                outcome: Outcome::Success,
                booster_version: "v1.0".to_string(),
            },
            LaunchRecord {
                site: "KSC LC-39A".to_string(),
                payload_mass_kg: 9000.0,
                outcome: Outcome::Failure,
                booster_version: "FT".to_string(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn initial_state_shows_the_full_dataset() {
        let state = AppState::new(sample());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, (500.0, 9000.0));
        assert_eq!(state.scatter.point_count(), 2);
    }

    #[test]
    fn changing_a_control_recomputes_the_charts() {
        let mut state = AppState::new(sample());

        state.set_site(SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(state.pie.segments.len(), 2);
        assert_eq!(state.scatter.point_count(), 1);

        state.set_payload_range((0.0, 1000.0));
        assert_eq!(state.scatter.point_count(), 0);
    }
}
