pub mod launch;
pub mod selection;

pub use launch::{parse_launch_csv, LaunchRecord, Outcome};
pub use selection::{PayloadRange, SiteSelection, ALL_SITES};
