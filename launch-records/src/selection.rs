//! Widget input values: the site dropdown selection and the payload range.

use std::fmt;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Current value of the launch site dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value. Anything other than the `ALL`
    /// sentinel is treated as a concrete site name, known or not.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The dropdown value this selection corresponds to.
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Inclusive payload mass interval in kilograms.
///
/// Not validated: an inverted range (`low > high`) simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}
