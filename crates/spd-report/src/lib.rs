//! Report and figure output for the SPD plasma lab.

pub mod plots;
pub mod report;
