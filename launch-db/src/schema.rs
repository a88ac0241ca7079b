//! SQL schema for the in-memory launch table.

/// Returns the full SQL schema as a single batch string.
///
/// `row_id` is assigned in load order and is how every query recovers the
/// dataset's original row order (first-appearance ordering of sites and
/// booster categories, scatter point order).
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        row_id INTEGER PRIMARY KEY,
        flight_number INTEGER,
        launch_site TEXT NOT NULL,
        payload_mass_kg REAL NOT NULL,
        booster_version TEXT,
        booster_category TEXT NOT NULL,
        class INTEGER NOT NULL CHECK (class IN (0, 1))
    );
    CREATE INDEX IF NOT EXISTS idx_launch_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launch_payload ON launches(payload_mass_kg);
    "#
}
