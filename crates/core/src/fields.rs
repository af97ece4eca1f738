//! Section names, field names and placeholder values of the summary record.

/// Sentinel for a missing or null single-cell field.
pub const EMPTY: &str = "empty";
/// Stands in for Growth Rate until it can be derived.
pub const GROWTH_RATE_PLACEHOLDER: &str = "put calc here";
/// Initial value of the free-text Notes column.
pub const NOTES_PLACEHOLDER: &str = "put notes here";

pub const OVERVIEW: &str = "Overview";
pub const GROWTH_RUN: &str = "GrowthRun";
pub const AFM_REFLECTANCE_SEM: &str = "AFMReflectanceSEM";
pub const HRXRD: &str = "HRXRD";
pub const SAMPLE_CUT: &str = "SampleCut";

pub const SAMPLE: &str = "Sample";
pub const GROWTH_TIME: &str = "Growth Time";
pub const THICKNESS: &str = "Thickness";
pub const GROWTH_RATE: &str = "Growth Rate";
pub const PHASE: &str = "Phase";
pub const COLLABORATOR: &str = "Collaborator";
pub const NOTES: &str = "Notes";

/// Fields copied from the Overview section, in output order.
pub const OVERVIEW_FIELDS: [&str; 7] = [
    SAMPLE,
    "Date",
    "Film",
    "Substrate",
    "Substrate T",
    "Carrier Gas",
    GROWTH_TIME,
];

/// A GrowthRun column is copied when its name contains one of these.
pub const GROWTH_RUN_QUANTITIES: [&str; 3] = [
    "Bubbler Material",
    "Gas Cylinder Material",
    "Partial Pressure",
];
