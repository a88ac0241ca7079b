//! Chart specifications and widget configuration for the launch dashboard.
//!
//! This crate turns query results from `launch-db` into the serializable
//! figure objects handed to the D3.js renderers, and describes the
//! dropdown and slider widgets.

/// Dropdown option lists.
pub mod options {
    use launch_records::ALL_SITES;
    use serde::Serialize;

    /// Label shown for the `ALL` sentinel option.
    pub const ALL_SITES_LABEL: &str = "All Sites";
    pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";

    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct DropdownOption {
        pub label: String,
        pub value: String,
    }

    /// Build the site dropdown: `All Sites` first, then one option per site.
    pub fn site_options(sites: &[String]) -> Vec<DropdownOption> {
        let mut options = Vec::with_capacity(sites.len() + 1);
        options.push(DropdownOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        });
        options.extend(sites.iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));
        options
    }

    /// Case-insensitive substring filter used by the searchable dropdown.
    /// An empty query keeps every option.
    pub fn search_options<'a>(
        options: &'a [DropdownOption],
        query: &str,
    ) -> Vec<&'a DropdownOption> {
        let needle = query.trim().to_lowercase();
        options
            .iter()
            .filter(|opt| needle.is_empty() || opt.label.to_lowercase().contains(&needle))
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn sites() -> Vec<String> {
            vec!["CCAFS LC-40".to_string(), "VAFB SLC-4E".to_string()]
        }

        #[test]
        fn all_sites_option_comes_first() {
            let options = site_options(&sites());
            assert_eq!(options.len(), 3);
            assert_eq!(options[0].label, "All Sites");
            assert_eq!(options[0].value, "ALL");
            assert_eq!(options[1].value, "CCAFS LC-40");
            assert_eq!(options[2].label, "VAFB SLC-4E");
        }

        #[test]
        fn empty_site_list_still_offers_all() {
            let options = site_options(&[]);
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].value, "ALL");
        }

        #[test]
        fn search_matches_label_substring() {
            let options = site_options(&sites());
            let hits = search_options(&options, "vafb");
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].value, "VAFB SLC-4E");

            assert_eq!(search_options(&options, "  ").len(), 3);
            assert!(search_options(&options, "boca").is_empty());
        }
    }
}

/// Payload range slider configuration.
pub mod slider {
    use launch_db::models::PayloadBounds;
    use launch_records::PayloadRange;
    use serde::Serialize;

    /// A labelled tick on the slider track.
    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct SliderMark {
        pub value: f64,
        pub label: String,
    }

    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct PayloadSlider {
        pub min: f64,
        pub max: f64,
        pub step: f64,
        pub marks: Vec<SliderMark>,
    }

    impl Default for PayloadSlider {
        /// 0 to 10000 kg in 1000 kg steps, marked every 2500 kg.
        fn default() -> Self {
            Self {
                min: 0.0,
                max: 10000.0,
                step: 1000.0,
                marks: [0.0, 2500.0, 5000.0, 7500.0]
                    .into_iter()
                    .map(|value| SliderMark {
                        value,
                        label: format!("{}", value),
                    })
                    .collect(),
            }
        }
    }

    impl PayloadSlider {
        /// Round to the nearest step and clamp into the slider bounds.
        pub fn snap(&self, value: f64) -> f64 {
            if !value.is_finite() {
                return self.min;
            }
            let steps = ((value - self.min) / self.step).round();
            (self.min + steps * self.step).clamp(self.min, self.max)
        }

        /// Slider value after a thumb moves. Both thumbs are snapped to the
        /// step grid and put in ascending order, so crossing thumbs swap
        /// roles instead of producing an inverted range.
        pub fn range_from_thumbs(&self, a: f64, b: f64) -> PayloadRange {
            let (a, b) = (self.snap(a), self.snap(b));
            PayloadRange::new(a.min(b), a.max(b))
        }

        /// Initial slider value: the dataset's payload bounds, falling back
        /// to the full track for an empty dataset. The bounds are used as-is
        /// so the initial selection covers every launch.
        pub fn initial_range(&self, bounds: Option<PayloadBounds>) -> PayloadRange {
            match bounds {
                Some(b) => PayloadRange::new(b.min, b.max),
                None => PayloadRange::new(self.min, self.max),
            }
        }
    }

}

/// Figure objects consumed by the D3.js pie and scatter renderers.
pub mod figure {
    use launch_db::models::{PieSlice, ScatterPoint};
    use launch_db::Database;
    use launch_records::{PayloadRange, SiteSelection};
    use serde::Serialize;

    pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches by Site";
    pub const SCATTER_TITLE: &str = "Payload vs Launch Outcome";
    pub const PAYLOAD_LABEL: &str = "Payload Mass (kg)";
    pub const OUTCOME_LABEL: &str = "Launch Outcome";
    pub const BOOSTER_LABEL: &str = "Booster Version Category";

    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct PieFigureSlice {
        pub label: String,
        pub value: i64,
        /// Share of the pie in percent, 0 when the pie is empty.
        pub percent: f64,
    }

    #[derive(Debug, Clone, Serialize, PartialEq)]
    pub struct PieFigure {
        pub title: String,
        pub slices: Vec<PieFigureSlice>,
        pub total: i64,
    }

    impl PieFigure {
        /// True when there is nothing to draw (every slice is zero).
        pub fn is_empty(&self) -> bool {
            self.total == 0
        }
    }

    #[derive(Debug, Clone, Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct ScatterFigure {
        pub title: String,
        pub x_label: String,
        pub y_label: String,
        pub color_label: String,
        /// Distinct booster categories in first-appearance order; the
        /// renderer assigns one color per entry.
        pub categories: Vec<String>,
        pub points: Vec<ScatterPoint>,
    }

    /// Build the pie figure for the current site selection.
    pub fn pie_chart(selection: &SiteSelection, slices: Vec<PieSlice>) -> PieFigure {
        let title = match selection {
            SiteSelection::All => ALL_SITES_PIE_TITLE.to_string(),
            SiteSelection::Site(site) => format!("Success vs Failure for {}", site),
        };
        let total: i64 = slices.iter().map(|s| s.value).sum();
        let slices = slices
            .into_iter()
            .map(|s| PieFigureSlice {
                percent: if total > 0 {
                    s.value as f64 * 100.0 / total as f64
                } else {
                    0.0
                },
                label: s.label,
                value: s.value,
            })
            .collect();
        PieFigure {
            title,
            slices,
            total,
        }
    }

    /// Build the payload/outcome scatter figure, colored by booster category.
    pub fn scatter_chart(points: Vec<ScatterPoint>) -> ScatterFigure {
        let mut categories: Vec<String> = Vec::new();
        for point in &points {
            if !categories.contains(&point.booster_category) {
                categories.push(point.booster_category.clone());
            }
        }
        ScatterFigure {
            title: SCATTER_TITLE.to_string(),
            x_label: PAYLOAD_LABEL.to_string(),
            y_label: OUTCOME_LABEL.to_string(),
            color_label: BOOSTER_LABEL.to_string(),
            categories,
            points,
        }
    }

    /// Pie chart for the current dropdown value, computed against `db`.
    pub fn success_pie(db: &Database, selection: &SiteSelection) -> anyhow::Result<PieFigure> {
        let slices = db.query_site_outcomes(selection)?;
        Ok(pie_chart(selection, slices))
    }

    /// Scatter chart for the current dropdown and slider values.
    pub fn payload_scatter(
        db: &Database,
        selection: &SiteSelection,
        range: Option<PayloadRange>,
    ) -> anyhow::Result<ScatterFigure> {
        let points = db.query_payload_outcomes(selection, range)?;
        Ok(scatter_chart(points))
    }

}
