//! Response types

use http::StatusCode;
use serde::Serialize;

/// Invocation result handed back to the Lambda runtime.
///
/// Serializes to the API Gateway proxy response shape: a JSON object
/// with a numeric `statusCode` and a `body` string. The body is carried
/// as a string, so embedded JSON is escaped rather than inlined.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: i64,
    pub body: String,
}

impl Response {
    /// Build a `200 OK` response around the given body.
    pub fn ok(body: String) -> Self {
        Response {
            status_code: i64::from(StatusCode::OK.as_u16()),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Response;

    #[test]
    fn serialize_ok_response() {
        let resp = Response::ok("foo".to_string());
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"statusCode":200,"body":"foo"}"#
        );
    }

    #[test]
    fn serialize_escapes_json_body() {
        let resp = Response::ok(r#"{"message":"Hello from Lambda!"}"#.to_string());
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"statusCode":200,"body":"{\"message\":\"Hello from Lambda!\"}"}"#
        );
    }
}
