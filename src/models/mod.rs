pub mod attendance;
pub mod identity;
pub mod recovery;

pub use attendance::{AttendanceCheck, CourseAttendance};
pub use identity::LocalUserData;
pub use recovery::{ChangePasswordPayload, VerifyOtpPayload};
