//! HTTP handlers for the two resources.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod appointment;
pub mod consultant;

/// Maps a service failure onto the wire: every user-input failure is a 400
/// with a short message, internal failures are logged and withheld.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Internal(e) => {
            log::error!("Request failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "internal error"}))
        }
        other => HttpResponse::BadRequest().json(json!({"error": other.to_string()})),
    }
}
