pub mod attendance;
pub mod device;
pub mod instructor;
pub mod report;
pub mod session;
pub mod student;

pub use attendance::{AdjustAction, AttendanceLogEntry, AttendanceStatus, Enrollment, ManualAdjustmentRequest, ScanRequest};
pub use device::Device;
pub use instructor::{ClassSummary, InstructorCredential};
pub use report::{StatisticsResponse, StatisticsRow};
pub use session::ClassSession;
pub use student::{RosterEntry, Student};
