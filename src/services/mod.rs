pub mod attendance_service;
pub mod offline_service;
pub mod user_service;

pub use attendance_service::*;
pub use offline_service::*;
pub use user_service::*;

use gloo_net::http::Response;
use serde::Deserialize;

/// Error body the backend attaches to non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "messageCode")]
    message_code: Option<String>,
}

/// Extract the localization reason key from a failed response.
/// Falls back to a generic key when the body carries none.
pub(crate) async fn reason_key(response: Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) => body
            .message_code
            .unwrap_or_else(|| "connection-error".to_string()),
        Err(_) => "connection-error".to_string(),
    }
}
