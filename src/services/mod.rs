pub mod attendance;
pub mod clock;
pub mod export;
pub mod resolver;
pub mod roster;
pub mod time;

pub use attendance::{AttendanceService, ManualAdjustment, ScanOutcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use time::LocalScan;
