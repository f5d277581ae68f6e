// ============================================================================
// INPUT VALIDATORS - pure format predicates over raw input
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

/// Six-digit identifier: OTP codes and workplace ids share this format.
static DEFAULT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Student code, e.g. "123456ABCD".
static STUDENT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}[A-Za-z]{4}$").unwrap());

/// Best-effort uni-id shape, e.g. "student1" or "mari.maasikas".
static UNI_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

pub fn is_valid_default_id(input: &str) -> bool {
    DEFAULT_ID.is_match(input)
}

pub fn is_valid_student_code(input: &str) -> bool {
    STUDENT_CODE.is_match(input)
}

pub fn is_valid_uni_id(input: &str) -> bool {
    UNI_ID.is_match(input)
}

pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
}

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Gate for the final wizard step: length and confirmation together.
pub fn is_password_form_valid(password: &str, confirm: &str) -> bool {
    is_strong_password(password) && passwords_match(password, confirm)
}
