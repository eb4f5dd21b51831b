//! Status words shown in front of progress lines

pub const USING: &str = "Using";
pub const SCANNING: &str = "Scanning";
pub const UPDATED: &str = "Updated";
pub const REPLACED: &str = "Replaced";
pub const NO_MATCH: &str = "No match";
pub const OUTDATED: &str = "Outdated";
pub const UP_TO_DATE: &str = "Up to date";
pub const FAILED: &str = "Failed";
pub const WROTE: &str = "Wrote";
pub const DONE: &str = "Done";
