use std::collections::BTreeMap;

use crate::data::filter::{payload_range_indices, site_indices, SiteSelection};
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Chart specifications – plain data consumed by the rendering layer
// ---------------------------------------------------------------------------

/// One pie segment: label plus the number of launches it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSegment {
    pub label: String,
    pub count: usize,
}

/// Declarative pie chart. Geometry and colours are the rendering layer's
/// business; the handler only decides segments and counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSpec {
    pub title: String,
    pub segments: Vec<PieSegment>,
}

impl PieSpec {
    /// Sum of all segment counts.
    pub fn total(&self) -> usize {
        self.segments.iter().map(|s| s.count).sum()
    }
}

/// One scatter series: every plotted point sharing a booster version.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub booster_version: String,
    /// `[payload mass kg, outcome as 0/1]` per launch.
    pub points: Vec<[f64; 2]>,
}

/// Declarative scatter chart, one series per booster version.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<ScatterSeries>,
}

impl ScatterSpec {
    /// Total number of plotted points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Pie handler
// ---------------------------------------------------------------------------

/// Build the success pie for the current site selection.
///
/// `All` aggregates success counts per site; a named site yields the
/// two-segment Success vs. Failure breakdown for that site. Pure function
/// of the selection and the immutable base table.
pub fn success_pie(dataset: &LaunchDataset, selection: &SiteSelection) -> PieSpec {
    match selection {
        SiteSelection::All => {
            // One segment per distinct site, value = successes at that site.
            let mut per_site: BTreeMap<&str, usize> = BTreeMap::new();
            for rec in &dataset.records {
                let successes = per_site.entry(rec.site.as_str()).or_default();
                if rec.outcome == Outcome::Success {
                    *successes += 1;
                }
            }
            PieSpec {
                title: "Success launches for all sites".to_string(),
                segments: per_site
                    .into_iter()
                    .map(|(site, count)| PieSegment {
                        label: site.to_string(),
                        count,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let mut success = 0;
            let mut failure = 0;
            for idx in site_indices(dataset, selection) {
                match dataset.records[idx].outcome {
                    Outcome::Success => success += 1,
                    Outcome::Failure => failure += 1,
                }
            }
            PieSpec {
                title: format!("Launches result for {site} launch site"),
                segments: vec![
                    PieSegment {
                        label: Outcome::Success.label().to_string(),
                        count: success,
                    },
                    PieSegment {
                        label: Outcome::Failure.label().to_string(),
                        count: failure,
                    },
                ],
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter handler
// ---------------------------------------------------------------------------

/// Build the payload-vs-outcome scatter for the current selection and
/// payload range. The range handles may arrive in either order; filtering
/// sorts them first. Pure function of its inputs and the base table.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: (f64, f64),
) -> ScatterSpec {
    let mut grouped: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for idx in payload_range_indices(dataset, selection, range) {
        let rec = &dataset.records[idx];
        grouped
            .entry(rec.booster_version.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_f64()]);
    }

    let title = match selection {
        SiteSelection::All => {
            "Correlation between Payload and Success for all sites".to_string()
        }
        SiteSelection::Site(site) => {
            format!("Correlation between Payload and Success for {site} launch site")
        }
    };

    ScatterSpec {
        title,
        x_label: "Payload Mass (kg)",
        y_label: "class",
        series: grouped
            .into_iter()
            .map(|(booster, points)| ScatterSeries {
                booster_version: booster.to_string(),
                points,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord};

    fn record(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: booster.to_string(),
        }
    }

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            record("CCAFS LC-40", 9000.0, Outcome::Failure, "v1.1"),
            record("KSC LC-39A", 3000.0, Outcome::Success, "FT"),
            record("VAFB SLC-4E", 4500.0, Outcome::Success, "FT"),
            record("VAFB SLC-4E", 6000.0, Outcome::Failure, "B4"),
        ])
        .unwrap()
    }

    #[test]
    fn all_sites_pie_has_one_segment_per_site_summing_to_total_successes() {
        let ds = sample();
        let pie = success_pie(&ds, &SiteSelection::All);

        assert_eq!(pie.segments.len(), 3);
        assert_eq!(pie.total(), 3);
        let ccafs = pie
            .segments
            .iter()
            .find(|s| s.label == "CCAFS LC-40")
            .unwrap();
        assert_eq!(ccafs.count, 1);
    }

    #[test]
    fn single_site_pie_is_exactly_success_and_failure() {
        let ds = sample();
        let selection = SiteSelection::Site("CCAFS LC-40".to_string());
        let pie = success_pie(&ds, &selection);

        assert_eq!(pie.segments.len(), 2);
        assert_eq!(pie.segments[0].label, "Success");
        assert_eq!(pie.segments[0].count, 1);
        assert_eq!(pie.segments[1].label, "Failure");
        assert_eq!(pie.segments[1].count, 1);
        // Segment counts sum to the site's total row count.
        assert_eq!(pie.total(), 2);
        assert_eq!(pie.title, "Launches result for CCAFS LC-40 launch site");
    }

    #[test]
    fn site_pie_keeps_a_zero_count_segment() {
        let ds = LaunchDataset::from_records(vec![record(
            "KSC LC-39A",
            3000.0,
            Outcome::Success,
            "FT",
        )])
        .unwrap();
        let pie = success_pie(&ds, &SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(pie.segments.len(), 2);
        assert_eq!(pie.segments[1].count, 0);
    }

    #[test]
    fn scatter_over_full_range_covers_every_record() {
        let ds = sample();
        let spec = payload_scatter(&ds, &SiteSelection::All, (ds.min_payload, ds.max_payload));
        assert_eq!(spec.point_count(), ds.len());
        assert_eq!(spec.title, "Correlation between Payload and Success for all sites");
    }

    #[test]
    fn scatter_ignores_handle_order() {
        let ds = sample();
        let forward = payload_scatter(&ds, &SiteSelection::All, (1000.0, 7000.0));
        let reversed = payload_scatter(&ds, &SiteSelection::All, (7000.0, 1000.0));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn scatter_groups_points_by_booster_version() {
        let ds = sample();
        let spec = payload_scatter(&ds, &SiteSelection::All, (0.0, 10_000.0));

        let ft = spec
            .series
            .iter()
            .find(|s| s.booster_version == "FT")
            .unwrap();
        assert_eq!(ft.points.len(), 2);
        assert!(ft.points.contains(&[3000.0, 1.0]));
        assert!(ft.points.contains(&[4500.0, 1.0]));
    }

    #[test]
    fn scatter_restricts_to_the_selected_site_and_range() {
        let ds = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            record("CCAFS LC-40", 9000.0, Outcome::Failure, "v1.1"),
        ])
        .unwrap();
        let selection = SiteSelection::Site("CCAFS LC-40".to_string());

        let wide = payload_scatter(&ds, &selection, (0.0, 10_000.0));
        assert_eq!(wide.point_count(), 2);
        assert_eq!(
            wide.title,
            "Correlation between Payload and Success for CCAFS LC-40 launch site"
        );

        let tight = payload_scatter(&ds, &selection, (0.0, 1000.0));
        assert_eq!(tight.point_count(), 1);
        assert_eq!(tight.series[0].points[0], [500.0, 1.0]);
    }
}
