use gloo_net::http::Request;
use serde_json::json;

use crate::models::{ChangePasswordPayload, VerifyOtpPayload};
use crate::services::reason_key;
use crate::utils::BACKEND_URL;

/// Ask the backend to mail a one-time key to the account's address.
pub async fn request_otp(uni_id: &str) -> Result<(), String> {
    let url = format!("{}/users/request-otp", BACKEND_URL);
    let response = Request::post(&url)
        .json(&json!({ "uniId": uni_id }))
        .map_err(|e| {
            log::error!("❌ OTP request build error: {}", e);
            "connection-error".to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ OTP request error: {}", e);
            "connection-error".to_string()
        })?;

    if !response.ok() {
        return Err(reason_key(response).await);
    }
    log::info!("📤 One-time key requested for {}", uni_id);
    Ok(())
}

/// Confirm the one-time key the user typed in.
pub async fn verify_otp(payload: &VerifyOtpPayload) -> Result<(), String> {
    let url = format!("{}/users/verify-otp", BACKEND_URL);
    let response = Request::post(&url)
        .json(payload)
        .map_err(|_| "connection-error".to_string())?
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ OTP verification error: {}", e);
            "connection-error".to_string()
        })?;

    if !response.ok() {
        return Err(reason_key(response).await);
    }
    log::info!("✅ One-time key accepted for {}", payload.uni_id);
    Ok(())
}

/// Replace the account password after a verified recovery.
pub async fn change_user_password(payload: &ChangePasswordPayload) -> Result<(), String> {
    let url = format!("{}/users/change-password", BACKEND_URL);
    let response = Request::post(&url)
        .json(payload)
        .map_err(|_| "connection-error".to_string())?
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ Password change error: {}", e);
            "connection-error".to_string()
        })?;

    if !response.ok() {
        return Err(reason_key(response).await);
    }
    log::info!("✅ Password changed for {}", payload.uni_id);
    Ok(())
}

/// Permanently delete the account on the backend.
pub async fn delete_user(uni_id: &str) -> Result<(), String> {
    let url = format!("{}/users/{}", BACKEND_URL, uni_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| {
            log::error!("❌ Account deletion error: {}", e);
            "connection-error".to_string()
        })?;

    if !response.ok() {
        return Err(reason_key(response).await);
    }
    log::info!("🗑️ Account deleted: {}", uni_id);
    Ok(())
}
