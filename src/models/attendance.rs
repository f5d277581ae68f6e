use serde::{Deserialize, Serialize};

/// The ongoing (or most recent) attendance session of a course.
/// Immutable snapshot, replaced wholesale on every poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseAttendance {
    #[serde(rename = "attendanceId")]
    pub attendance_id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(rename = "courseCode")]
    pub course_code: String,
}

/// One check-in submission. Built fresh per submit, not retained after.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceCheck {
    #[serde(rename = "studentCode")]
    pub student_code: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "courseAttendanceId")]
    pub course_attendance_id: String,
    #[serde(rename = "workplaceId")]
    pub workplace_id: Option<i64>,
}
