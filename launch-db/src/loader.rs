//! CSV loading for populating the in-memory launch table.

use crate::Database;
use anyhow::Context;
use launch_records::parse_launch_csv;
use rusqlite::params;

impl Database {
    /// Load launch records from a CSV string.
    ///
    /// Rows are appended in file order; `row_id` keeps that order for the
    /// queries. The whole load runs in one transaction, so a malformed row
    /// leaves the table untouched.
    ///
    /// # Example CSV
    /// ```text
    /// ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
    /// 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
    /// ```
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = parse_launch_csv(csv_data).context("failed to parse launch CSV")?;

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO launches
                 (flight_number, launch_site, payload_mass_kg, booster_version, booster_category, class)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for record in &records {
                stmt.execute(params![
                    record.flight_number,
                    record.launch_site,
                    record.payload_mass_kg,
                    record.booster_version,
                    record.booster_category,
                    record.outcome.class(),
                ])?;
            }
        }
        tx.commit()?;

        log::info!("loader: loaded {} launches", records.len());
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_launches_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,29,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
";
        let loaded = db.load_launches(csv).unwrap();
        assert_eq!(loaded, 2);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let (site, class): (String, i64) = conn
            .query_row(
                "SELECT launch_site, class FROM launches WHERE flight_number = 29",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(site, "VAFB SLC-4E");
        assert_eq!(class, 1);
    }

    #[test]
    fn load_preserves_file_order() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteB,100,FT,1
SiteA,200,FT,0
SiteC,300,B4,1
";
        db.load_launches(csv).unwrap();

        let conn = db.conn.borrow();
        let mut stmt = conn
            .prepare("SELECT launch_site FROM launches ORDER BY row_id")
            .unwrap();
        let sites: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(sites, vec!["SiteB", "SiteA", "SiteC"]);
    }

    #[test]
    fn malformed_row_leaves_table_empty() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteA,100,FT,1
SiteA,lots,FT,0
";
        assert!(db.load_launches(csv).is_err());

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
