use gloo_net::http::Request;

use crate::models::{AttendanceCheck, CourseAttendance};
use crate::services::reason_key;
use crate::utils::BACKEND_URL;

/// Currently open attendance for the user's courses.
/// `Err` carries a reason key; "no open session" is an expected outcome
/// and arrives here as an error key, not as a panic-worthy condition.
pub async fn get_current_attendance(uni_id: &str) -> Result<CourseAttendance, String> {
    let url = format!("{}/attendances/current/{}", BACKEND_URL, uni_id);
    fetch_attendance(&url).await
}

/// Most recent attendance of the user, open or not.
pub async fn get_most_recent_attendance(uni_id: &str) -> Result<CourseAttendance, String> {
    let url = format!("{}/attendances/recent/{}", BACKEND_URL, uni_id);
    fetch_attendance(&url).await
}

async fn fetch_attendance(url: &str) -> Result<CourseAttendance, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ Attendance fetch error: {}", e);
            "connection-error".to_string()
        })?;

    if !response.ok() {
        return Err(reason_key(response).await);
    }

    response
        .json::<CourseAttendance>()
        .await
        .map_err(|e| {
            log::error!("❌ Attendance parse error: {}", e);
            "connection-error".to_string()
        })
}

/// Number of students already checked in under an attendance.
pub async fn get_student_count_by_attendance_id(attendance_id: i64) -> Result<u32, String> {
    let url = format!("{}/attendances/{}/student-count", BACKEND_URL, attendance_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ Student count fetch error: {}", e);
            "connection-error".to_string()
        })?;

    if !response.ok() {
        return Err(reason_key(response).await);
    }

    response
        .json::<u32>()
        .await
        .map_err(|_| "connection-error".to_string())
}

/// Submit one student check-in against an open attendance.
pub async fn add_attendance_check(check: &AttendanceCheck) -> Result<(), String> {
    let url = format!("{}/attendance-checks", BACKEND_URL);
    let response = Request::post(&url)
        .json(check)
        .map_err(|_| "connection-error".to_string())?
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ Attendance check submit error: {}", e);
            "connection-error".to_string()
        })?;

    if !response.ok() {
        return Err(reason_key(response).await);
    }
    log::info!("✅ Attendance check added for {}", check.student_code);
    Ok(())
}
