use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// `{"message": "..."}` envelope for mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Compact JSON with a trailing newline.
pub fn build_json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(buf) => json_bytes(status, buf),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Four-space indented JSON with a trailing newline, used for record bodies.
pub fn build_pretty_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    match value.serialize(&mut ser) {
        Ok(()) => json_bytes(status, buf),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

fn json_bytes(status: StatusCode, mut buf: Vec<u8>) -> Response {
    buf.push(b'\n');
    (status, [(header::CONTENT_TYPE, "application/json")], buf).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn message_is_compact() {
        let resp = build_json_response(
            StatusCode::CREATED,
            &MessageResponse {
                message: "User created successfully",
            },
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_string(resp).await,
            "{\"message\":\"User created successfully\"}\n"
        );
    }

    #[tokio::test]
    async fn pretty_uses_four_spaces() {
        let resp = build_pretty_response(StatusCode::OK, &serde_json::json!({"id": 1}));
        assert_eq!(body_string(resp).await, "{\n    \"id\": 1\n}\n");
    }

    #[tokio::test]
    async fn empty_list_is_brackets() {
        let empty: Vec<u8> = Vec::new();
        let resp = build_pretty_response(StatusCode::OK, &empty);
        assert_eq!(body_string(resp).await, "[]\n");
    }
}
