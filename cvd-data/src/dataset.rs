//! Dataset kinds and indicator-label rename maps.
//!
//! Both upstream CSV pairs carry the same raw indicator labels ("Total
//! cases", "Growth Rate", ...). The dashboards show cases and deaths side
//! by side, so labels are disambiguated at ingest: deaths metrics get
//! "cases" rewritten to "deaths", and metrics whose name mentions neither
//! get a "(cases)" / "(deaths)" suffix. After renaming, no label may appear
//! in both datasets.

/// Which upstream dataset a table or CSV pair belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Cases,
    Deaths,
}

/// Raw-to-canonical indicator renames for the cases dataset.
///
/// Metrics that don't mention "cases" in their raw label are suffixed so
/// they cannot collide with the deaths dataset after both are loaded.
const CASES_RENAMES: &[(&str, &str)] = &[
    ("Slope of power-law", "Slope of power-law (cases)"),
    ("Acceleration of power-law", "Acceleration of power-law (cases)"),
    ("Growth Rate", "Growth Rate (cases)"),
    ("Average Growth Rate", "Average Growth Rate (cases)"),
    ("Doubling time", "Doubling time (cases)"),
];

/// Raw-to-canonical indicator renames for the deaths dataset.
const DEATHS_RENAMES: &[(&str, &str)] = &[
    ("Total cases", "Total deaths"),
    ("New cases", "New deaths"),
    ("Total cases per million", "Total deaths per million"),
    ("New cases per million", "New deaths per million"),
    ("New cases per week per million", "New deaths per week per million"),
    ("New cases per week", "New deaths per week"),
    ("log10(Total cases)", "log10(Total deaths)"),
    ("log10(New cases per week)", "log10(New deaths per week)"),
    ("Slope of power-law", "Slope of power-law (deaths)"),
    ("Acceleration of power-law", "Acceleration of power-law (deaths)"),
    ("Growth Rate", "Growth Rate (deaths)"),
    ("Days since first case", "Days since first death"),
    ("Average Growth Rate", "Average Growth Rate (deaths)"),
    ("Doubling time", "Doubling time (deaths)"),
];

impl DatasetKind {
    /// Stable key used in the database `dataset` column and CLI flags.
    pub fn key(&self) -> &'static str {
        match self {
            DatasetKind::Cases => "cases",
            DatasetKind::Deaths => "deaths",
        }
    }

    /// Human-readable name for headings ("Cases" / "Deaths").
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Cases => "Cases",
            DatasetKind::Deaths => "Deaths",
        }
    }

    /// The rename map applied to this dataset's indicator labels at ingest.
    pub fn rename_map(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            DatasetKind::Cases => CASES_RENAMES,
            DatasetKind::Deaths => DEATHS_RENAMES,
        }
    }

    /// Canonicalize a raw indicator label for this dataset.
    ///
    /// Labels absent from the rename map pass through unchanged.
    pub fn canonical_label(&self, raw: &str) -> String {
        self.rename_map()
            .iter()
            .find(|(from, _)| *from == raw)
            .map(|(_, to)| (*to).to_string())
            .unwrap_or_else(|| raw.to_string())
    }

    /// Default x/y dropdown selections for this dataset's scatter panel.
    pub fn default_indicators(&self) -> (&'static str, &'static str) {
        match self {
            DatasetKind::Cases => ("Total cases", "New cases"),
            DatasetKind::Deaths => ("Total deaths", "New deaths"),
        }
    }
}
