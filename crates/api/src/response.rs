//! Shared response envelope for API handlers.
//!
//! Every successful response is a flat JSON object with `success: true`
//! next to the endpoint's own fields. Use [`SuccessResponse`] instead of
//! ad-hoc `serde_json::json!` to get compile-time type safety.

use serde::Serialize;

/// `{ "success": true, ...fields of T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(SuccessResponse::new(DeletedPayload { deleted: id })))
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
