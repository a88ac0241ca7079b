//! Typed query methods behind the dashboard widgets.
//!
//! Ordering convention: wherever a list of categories is returned (sites,
//! booster categories, pie slices for all sites) it follows the order in
//! which each category first appears in the dataset, so the dropdown and
//! the chart legends line up with the source file.

use crate::models::{PayloadBounds, PieSlice, ScatterPoint};
use crate::Database;
use launch_records::{Outcome, PayloadRange, SiteSelection};
use rusqlite::params;

impl Database {
    /// Distinct launch site names in first-appearance order.
    pub fn query_launch_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site FROM launches
             GROUP BY launch_site
             ORDER BY MIN(row_id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("query: query_launch_sites returned {} sites", rows.len());
        Ok(rows)
    }

    /// Number of launches in the table.
    pub fn query_launch_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Smallest and largest payload mass, or `None` for an empty table.
    pub fn query_payload_bounds(&self) -> anyhow::Result<Option<PayloadBounds>> {
        let conn = self.conn.borrow();
        let (min, max) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get::<_, Option<f64>>(0)?, row.get::<_, Option<f64>>(1)?)),
        )?;
        Ok(match (min, max) {
            (Some(min), Some(max)) => Some(PayloadBounds { min, max }),
            _ => None,
        })
    }

    /// Pie chart aggregation.
    ///
    /// - `All`: one slice per site holding that site's success count.
    ///   Sites without a single success get no slice.
    /// - `Site(name)`: exactly two slices, `Success` then `Failure`.
    ///   An unknown site yields two zero-valued slices rather than an error.
    pub fn query_site_outcomes(&self, selection: &SiteSelection) -> anyhow::Result<Vec<PieSlice>> {
        let conn = self.conn.borrow();
        let slices = match selection {
            SiteSelection::All => {
                let mut stmt = conn.prepare(
                    "SELECT l.launch_site, COUNT(*) FROM launches l
                     WHERE l.class = 1
                     GROUP BY l.launch_site
                     ORDER BY (SELECT MIN(f.row_id) FROM launches f
                               WHERE f.launch_site = l.launch_site)",
                )?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok(PieSlice {
                            label: row.get(0)?,
                            value: row.get(1)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            SiteSelection::Site(site) => {
                let (successes, failures): (i64, i64) = conn.query_row(
                    "SELECT COALESCE(SUM(class = 1), 0), COALESCE(SUM(class = 0), 0)
                     FROM launches
                     WHERE launch_site = ?1",
                    params![site],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )?;
                if successes + failures == 0 {
                    log::warn!("query: no launches recorded for site '{}'", site);
                }
                vec![
                    PieSlice {
                        label: Outcome::Success.label().to_string(),
                        value: successes,
                    },
                    PieSlice {
                        label: Outcome::Failure.label().to_string(),
                        value: failures,
                    },
                ]
            }
        };
        log::info!(
            "query: query_site_outcomes({}) returned {} slices",
            selection,
            slices.len()
        );
        Ok(slices)
    }

    /// Scatter filter: launches at the selected site (every site for
    /// `All`) whose payload lies inside `range`, inclusive on both ends.
    ///
    /// A `None` range applies no payload filter. A NaN bound contains no
    /// payload, so it yields no points. Points come back in dataset order.
    pub fn query_payload_outcomes(
        &self,
        selection: &SiteSelection,
        range: Option<PayloadRange>,
    ) -> anyhow::Result<Vec<ScatterPoint>> {
        // SQLite binds NaN as NULL, which would drop that side of the filter
        if range.is_some_and(|r| r.low.is_nan() || r.high.is_nan()) {
            log::warn!("query: payload range {:?} has a NaN bound", range);
            return Ok(Vec::new());
        }
        let site = match selection {
            SiteSelection::All => None,
            SiteSelection::Site(name) => Some(name.as_str()),
        };
        let low = range.map(|r| r.low);
        let high = range.map(|r| r.high);

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, payload_mass_kg, class,
                    booster_version, booster_category
             FROM launches
             WHERE (?1 IS NULL OR launch_site = ?1)
               AND (?2 IS NULL OR payload_mass_kg >= ?2)
               AND (?3 IS NULL OR payload_mass_kg <= ?3)
             ORDER BY row_id",
        )?;
        let rows = stmt
            .query_map(params![site, low, high], |row| {
                Ok(ScatterPoint {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    payload_mass_kg: row.get(2)?,
                    class: row.get(3)?,
                    booster_version: row.get(4)?,
                    booster_category: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_payload_outcomes({}, {:?}) returned {} points",
            selection,
            range,
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three rows from the worked example: two at SiteA, one at SiteB.
    fn example_db() -> Database {
        Database::from_csv(
            "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteA,500,v1.1,1
SiteA,1500,FT,0
SiteB,2000,FT,1
",
        )
        .unwrap()
    }

    /// A larger table with a site that never succeeded.
    fn sample_db() -> Database {
        Database::from_csv(
            "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,20,CCAFS LC-40,1,2034.0,F9 FT B1019,FT
3,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,29,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
5,31,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
6,32,KSC LC-39A,0,5600.0,F9 FT B1030,FT
7,33,KSC LC-39A,1,5300.0,F9 FT  B1021.2,FT
8,43,KSC LC-39A,1,5200.0,F9 B4 B1042.1,B4
9,51,CCAFS SLC-40,0,362.0,F9 B4 B1040.2,B4
10,52,CCAFS SLC-40,0,5384.0,F9 B5 B1046.2,B5
",
        )
        .unwrap()
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    fn slice(label: &str, value: i64) -> PieSlice {
        PieSlice {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn worked_example_all_sites() {
        let db = example_db();
        let slices = db.query_site_outcomes(&SiteSelection::All).unwrap();
        assert_eq!(slices, vec![slice("SiteA", 1), slice("SiteB", 1)]);
    }

    #[test]
    fn worked_example_single_site() {
        let db = example_db();
        let slices = db.query_site_outcomes(&site("SiteA")).unwrap();
        assert_eq!(slices, vec![slice("Success", 1), slice("Failure", 1)]);
    }

    #[test]
    fn all_sites_counts_only_sites_with_successes() {
        let db = sample_db();
        let slices = db.query_site_outcomes(&SiteSelection::All).unwrap();
        // CCAFS SLC-40 has no successes, so it has no slice
        assert_eq!(
            slices,
            vec![
                slice("CCAFS LC-40", 1),
                slice("VAFB SLC-4E", 1),
                slice("KSC LC-39A", 3),
            ]
        );
    }

    #[test]
    fn site_slices_sum_to_site_row_count() {
        let db = sample_db();
        for (name, rows) in [
            ("CCAFS LC-40", 3),
            ("VAFB SLC-4E", 2),
            ("KSC LC-39A", 4),
            ("CCAFS SLC-40", 2),
        ] {
            let slices = db.query_site_outcomes(&site(name)).unwrap();
            assert_eq!(slices.len(), 2);
            let total: i64 = slices.iter().map(|s| s.value).sum();
            assert_eq!(total, rows, "slice sum for {}", name);
        }
    }

    #[test]
    fn site_with_no_successes_has_zero_success_slice() {
        let db = sample_db();
        let slices = db.query_site_outcomes(&site("CCAFS SLC-40")).unwrap();
        assert_eq!(slices, vec![slice("Success", 0), slice("Failure", 2)]);
    }

    #[test]
    fn unknown_site_yields_zero_slices() {
        let db = sample_db();
        let slices = db.query_site_outcomes(&site("Boca Chica")).unwrap();
        assert_eq!(slices, vec![slice("Success", 0), slice("Failure", 0)]);
    }

    #[test]
    fn empty_table_all_sites_has_no_slices() {
        let db = Database::new().unwrap();
        assert!(db
            .query_site_outcomes(&SiteSelection::All)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn scatter_respects_site_and_inclusive_range() {
        let db = sample_db();
        let range = PayloadRange::new(2490.0, 5300.0);
        for selection in [
            SiteSelection::All,
            site("KSC LC-39A"),
            site("CCAFS LC-40"),
            site("VAFB SLC-4E"),
        ] {
            let points = db.query_payload_outcomes(&selection, Some(range)).unwrap();
            for p in &points {
                assert!(range.contains(p.payload_mass_kg), "{:?} outside range", p);
                if let SiteSelection::Site(name) = &selection {
                    assert_eq!(&p.launch_site, name, "{:?} wrong site", p);
                }
            }
        }

        let ksc = db
            .query_payload_outcomes(&site("KSC LC-39A"), Some(range))
            .unwrap();
        let masses: Vec<f64> = ksc.iter().map(|p| p.payload_mass_kg).collect();
        // Both endpoints are included
        assert_eq!(masses, vec![2490.0, 5300.0, 5200.0]);
    }

    #[test]
    fn scatter_all_sites_without_range_returns_every_row() {
        let db = sample_db();
        let points = db.query_payload_outcomes(&SiteSelection::All, None).unwrap();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0].flight_number, Some(1));
        assert_eq!(points[10].flight_number, Some(52));
    }

    #[test]
    fn scatter_points_carry_outcome_and_category() {
        let db = example_db();
        let points = db
            .query_payload_outcomes(&site("SiteA"), Some(PayloadRange::new(0.0, 10000.0)))
            .unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].class, 1);
        assert_eq!(points[0].booster_category, "v1.1");
        assert_eq!(points[1].class, 0);
        assert_eq!(points[1].booster_category, "FT");
    }

    #[test]
    fn scatter_inverted_range_is_empty() {
        let db = sample_db();
        let points = db
            .query_payload_outcomes(&SiteSelection::All, Some(PayloadRange::new(6000.0, 1000.0)))
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn scatter_nan_bound_matches_nothing() {
        let db = example_db();
        for range in [
            PayloadRange::new(f64::NAN, 1000.0),
            PayloadRange::new(0.0, f64::NAN),
            PayloadRange::new(f64::NAN, f64::NAN),
        ] {
            let points = db
                .query_payload_outcomes(&SiteSelection::All, Some(range))
                .unwrap();
            assert!(
                points.iter().all(|p| range.contains(p.payload_mass_kg)),
                "{:?} let through {:?}",
                range,
                points
            );
            assert!(points.is_empty());
        }
    }

    #[test]
    fn scatter_unknown_site_is_empty() {
        let db = sample_db();
        let points = db.query_payload_outcomes(&site("Boca Chica"), None).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn operations_are_idempotent() {
        let db = sample_db();
        let range = Some(PayloadRange::new(0.0, 6000.0));
        for selection in [SiteSelection::All, site("KSC LC-39A"), site("nowhere")] {
            assert_eq!(
                db.query_site_outcomes(&selection).unwrap(),
                db.query_site_outcomes(&selection).unwrap()
            );
            assert_eq!(
                db.query_payload_outcomes(&selection, range).unwrap(),
                db.query_payload_outcomes(&selection, range).unwrap()
            );
        }
    }

    #[test]
    fn launch_sites_in_first_appearance_order() {
        let db = sample_db();
        assert_eq!(
            db.query_launch_sites().unwrap(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn launch_count_matches_rows() {
        assert_eq!(sample_db().query_launch_count().unwrap(), 11);
        assert_eq!(Database::new().unwrap().query_launch_count().unwrap(), 0);
    }

    #[test]
    fn payload_bounds_cover_table() {
        let db = sample_db();
        assert_eq!(
            db.query_payload_bounds().unwrap(),
            Some(PayloadBounds {
                min: 0.0,
                max: 9600.0
            })
        );
    }
}
