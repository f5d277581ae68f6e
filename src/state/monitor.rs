// ============================================================================
// ATTENDANCE MONITOR STATE - polled session snapshot + check-in inputs
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{AttendanceCheck, CourseAttendance};
use crate::utils::validators::{is_valid_default_id, is_valid_student_code};

/// Read model of the home screen: the ongoing attendance (replaced
/// wholesale on every poll), the most-recent-session shortcut, and the
/// check-in form inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorState {
    pub current: Option<CourseAttendance>,
    /// Displayed student count; always paired with the session it was
    /// fetched for because both arrive in one `SessionLoaded` action.
    pub student_count: String,
    pub recent_attendance_id: Option<String>,
    /// Sticky info shown while no session is open; cleared by the next
    /// successful fetch, not by a timer.
    pub status_key: Option<String>,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub workplace_id: String,
    pub submitting: bool,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self {
            current: None,
            student_count: "0".to_string(),
            recent_attendance_id: None,
            status_key: None,
            student_code: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            workplace_id: String::new(),
            submitting: false,
        }
    }
}

pub enum MonitorAction {
    SessionLoaded {
        session: CourseAttendance,
        student_count: String,
    },
    SessionUnavailable {
        reason: String,
    },
    RecentLoaded {
        attendance_id: String,
    },
    SetStudentCode(String),
    SetFirstName(String),
    SetLastName(String),
    SetWorkplaceId(String),
    SubmitStarted,
    /// A check-in attempt finished, successfully or not: the student code
    /// and workplace id are cleared, the name fields are kept.
    SubmitSettled,
}

impl Reducible for MonitorState {
    type Action = MonitorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            MonitorAction::SessionLoaded {
                session,
                student_count,
            } => {
                next.current = Some(session);
                next.student_count = student_count;
                next.status_key = None;
            }
            MonitorAction::SessionUnavailable { reason } => {
                next.current = None;
                next.student_count = "0".to_string();
                next.status_key = Some(reason);
            }
            MonitorAction::RecentLoaded { attendance_id } => {
                next.recent_attendance_id = Some(attendance_id);
            }
            MonitorAction::SetStudentCode(value) => next.student_code = value,
            MonitorAction::SetFirstName(value) => next.first_name = value,
            MonitorAction::SetLastName(value) => next.last_name = value,
            MonitorAction::SetWorkplaceId(value) => next.workplace_id = value,
            MonitorAction::SubmitStarted => next.submitting = true,
            MonitorAction::SubmitSettled => {
                next.student_code.clear();
                next.workplace_id.clear();
                next.submitting = false;
            }
        }
        Rc::new(next)
    }
}

impl MonitorState {
    /// Gate for the add-student button.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.current.is_some() && is_valid_student_code(&self.student_code)
    }
}

/// Build the check-in record for the displayed session. A non-empty
/// workplace id that fails the six-digit format rejects the submission
/// before any network call is made.
pub fn build_attendance_check(state: &MonitorState) -> Result<AttendanceCheck, String> {
    let session = state
        .current
        .as_ref()
        .ok_or_else(|| "no-active-attendance".to_string())?;

    if !state.workplace_id.is_empty() && !is_valid_default_id(&state.workplace_id) {
        return Err("wrong-workplace-id".to_string());
    }

    Ok(AttendanceCheck {
        student_code: state.student_code.clone(),
        full_name: format!("{} {}", state.first_name.trim(), state.last_name.trim()),
        course_attendance_id: session.attendance_id.clone(),
        workplace_id: state.workplace_id.parse::<i64>().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: MonitorState, action: MonitorAction) -> MonitorState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn session(id: &str) -> CourseAttendance {
        CourseAttendance {
            attendance_id: id.to_string(),
            course_name: "Programming I".to_string(),
            course_code: "ITI0101".to_string(),
        }
    }

    #[test]
    fn session_and_count_arrive_together() {
        let state = reduce(
            MonitorState::default(),
            MonitorAction::SessionLoaded {
                session: session("42"),
                student_count: "17".to_string(),
            },
        );
        assert_eq!(
            state.current.as_ref().map(|s| s.attendance_id.as_str()),
            Some("42")
        );
        assert_eq!(state.student_count, "17");
        assert_eq!(state.status_key, None);

        // the next poll replaces the snapshot wholesale; the count can
        // never belong to a different session than the displayed one
        let state = reduce(
            state,
            MonitorAction::SessionLoaded {
                session: session("43"),
                student_count: "3".to_string(),
            },
        );
        assert_eq!(
            state.current.as_ref().map(|s| s.attendance_id.as_str()),
            Some("43")
        );
        assert_eq!(state.student_count, "3");
    }

    #[test]
    fn unavailable_session_clears_the_snapshot_and_sets_the_status() {
        let state = reduce(
            MonitorState::default(),
            MonitorAction::SessionLoaded {
                session: session("42"),
                student_count: "17".to_string(),
            },
        );
        let state = reduce(
            state,
            MonitorAction::SessionUnavailable {
                reason: "no-active-attendance".to_string(),
            },
        );
        assert!(state.current.is_none());
        assert_eq!(state.student_count, "0");
        assert_eq!(state.status_key.as_deref(), Some("no-active-attendance"));
    }

    #[test]
    fn failed_count_keeps_the_session_visible_with_zero_count() {
        // the hook maps a count failure to SessionLoaded with "0"
        let state = reduce(
            MonitorState::default(),
            MonitorAction::SessionLoaded {
                session: session("42"),
                student_count: "0".to_string(),
            },
        );
        assert!(state.current.is_some());
        assert_eq!(state.student_count, "0");
    }

    #[test]
    fn submit_is_gated_on_the_student_code_pattern_and_a_session() {
        let state = reduce(
            MonitorState::default(),
            MonitorAction::SetStudentCode("123456ABCD".to_string()),
        );
        // valid code but no session yet
        assert!(!state.can_submit());

        let state = reduce(
            state,
            MonitorAction::SessionLoaded {
                session: session("42"),
                student_count: "0".to_string(),
            },
        );
        assert!(state.can_submit());

        let state = reduce(state, MonitorAction::SetStudentCode("1234".to_string()));
        assert!(!state.can_submit());
    }

    #[test]
    fn submitting_blocks_a_second_submission() {
        let state = reduce(
            MonitorState::default(),
            MonitorAction::SessionLoaded {
                session: session("42"),
                student_count: "0".to_string(),
            },
        );
        let state = reduce(state, MonitorAction::SetStudentCode("123456ABCD".to_string()));
        let state = reduce(state, MonitorAction::SubmitStarted);
        assert!(!state.can_submit());
    }

    #[test]
    fn settled_submission_clears_code_and_workplace_but_keeps_names() {
        let state = MonitorState {
            student_code: "123456ABCD".to_string(),
            first_name: "Mari".to_string(),
            last_name: "Maasikas".to_string(),
            workplace_id: "654321".to_string(),
            submitting: true,
            ..MonitorState::default()
        };
        let state = reduce(state, MonitorAction::SubmitSettled);
        assert!(state.student_code.is_empty());
        assert!(state.workplace_id.is_empty());
        assert_eq!(state.first_name, "Mari");
        assert_eq!(state.last_name, "Maasikas");
        assert!(!state.submitting);
    }

    #[test]
    fn malformed_workplace_id_short_circuits_the_check() {
        let state = MonitorState {
            current: Some(session("42")),
            student_code: "123456ABCD".to_string(),
            workplace_id: "abc".to_string(),
            ..MonitorState::default()
        };
        assert_eq!(
            build_attendance_check(&state),
            Err("wrong-workplace-id".to_string())
        );
    }

    #[test]
    fn empty_workplace_id_builds_a_record_without_one() {
        let state = MonitorState {
            current: Some(session("42")),
            student_code: "123456ABCD".to_string(),
            first_name: "Mari".to_string(),
            last_name: "Maasikas".to_string(),
            ..MonitorState::default()
        };
        let check = build_attendance_check(&state).unwrap();
        assert_eq!(check.course_attendance_id, "42");
        assert_eq!(check.full_name, "Mari Maasikas");
        assert_eq!(check.workplace_id, None);
    }

    #[test]
    fn six_digit_workplace_id_is_parsed_into_the_record() {
        let state = MonitorState {
            current: Some(session("42")),
            student_code: "123456ABCD".to_string(),
            workplace_id: "007001".to_string(),
            ..MonitorState::default()
        };
        let check = build_attendance_check(&state).unwrap();
        assert_eq!(check.workplace_id, Some(7001));
    }

    #[test]
    fn no_session_rejects_the_check() {
        let state = MonitorState {
            student_code: "123456ABCD".to_string(),
            ..MonitorState::default()
        };
        assert!(build_attendance_check(&state).is_err());
    }
}
