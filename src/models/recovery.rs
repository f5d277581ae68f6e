use serde::{Deserialize, Serialize};

/// Request body for the OTP verification call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyOtpPayload {
    #[serde(rename = "uniId")]
    pub uni_id: String,
    pub otp: String,
}

/// Request body for the password change call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangePasswordPayload {
    #[serde(rename = "uniId")]
    pub uni_id: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}
