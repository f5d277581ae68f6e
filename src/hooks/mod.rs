pub mod use_attendance_monitor;
pub mod use_recovery_wizard;
pub mod use_transient_message;

pub use use_attendance_monitor::{use_attendance_monitor, UseAttendanceMonitorHandle};
pub use use_recovery_wizard::{use_recovery_wizard, UseRecoveryWizardHandle};
pub use use_transient_message::{use_transient_message, UseTransientMessageHandle};
