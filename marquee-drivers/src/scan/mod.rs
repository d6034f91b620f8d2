//! Panel scan and brightness control
//!
//! The panel is refreshed from a fixed-period timer, independently of the
//! render loop. Brightness is set by time-division: the output-enable line
//! is held on for a fraction of the scan steps in each period.

pub mod brightness;
pub mod task;

pub use brightness::BrightnessCycle;
pub use task::ScanTask;
