//! In-memory SQLite table of SpaceX launch records.
//!
//! The launch CSV is parsed by [`launch_records::parse_launch_csv`] and
//! inserted into a single `launches` table. The two dashboard operations
//! (the pie aggregation and the scatter filter) and the option-list
//! queries are typed methods on [`Database`] returning serializable
//! structs from [`models`].
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data embedded via `include_str!` in the dashboard crate, or read
//!   from disk by the CLI
//! - The table is loaded once and only read afterwards
//!
//! # Usage
//!
//! ```rust
//! use launch_db::Database;
//! use launch_records::SiteSelection;
//!
//! let db = Database::from_csv(
//!     "Launch Site,Payload Mass (kg),Booster Version Category,class\nSiteA,500,FT,1\n",
//! )
//! .unwrap();
//! let slices = db.query_site_outcomes(&SiteSelection::All).unwrap();
//! assert_eq!(slices.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the launch table.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new, empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load the launch CSV into it.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_launches(csv_data)?;
        Ok(db)
    }
}
