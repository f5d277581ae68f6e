pub mod message;
pub mod monitor;
pub mod recovery;

pub use message::{Message, MessageAction, MessageSeverity, MessageSlot};
pub use monitor::{build_attendance_check, MonitorAction, MonitorState};
pub use recovery::{RecoveryAction, RecoveryState, RecoveryStep};
