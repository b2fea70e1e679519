mod summary;
pub mod views;

pub use summary::HiringReport;
pub use views::{FillVerdict, HiringReportSummary};
