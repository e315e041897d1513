//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{success, message, data}` envelope returned by every resource route.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

pub fn created<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::CREATED,
        Json(Envelope {
            success: true,
            message,
            data,
        }),
    )
}

pub fn ok<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            success: true,
            message,
            data,
        }),
    )
}

pub fn error_body(message: String) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "message": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_envelope_shape() {
        let (status, Json(body)) = created("Todo created successfully!", serde_json::json!({"id": 1}));
        assert_eq!(status, StatusCode::CREATED);
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["message"], "Todo created successfully!");
        assert_eq!(v["data"]["id"], 1);
    }

    #[test]
    fn ok_envelope_keeps_lists() {
        let (status, Json(body)) = ok("Users retrieved successfully", Vec::<i32>::new());
        assert_eq!(status, StatusCode::OK);
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["data"], serde_json::json!([]));
    }

    #[test]
    fn error_body_is_never_successful() {
        let v = error_body("boom".into());
        assert_eq!(v, serde_json::json!({"success": false, "message": "boom"}));
    }
}
