//! The invocation handler.

use lamedh_runtime::{Context, Error};
use serde_json::{json, Value};

use crate::response::Response;

/// Handle one invocation.
///
/// The event payload is ignored; every call logs `Running...` and then
/// resolves with the same fixed response.
pub async fn handler(_event: Value, _: Context) -> Result<Response, Error> {
    log::info!("Running...");

    Ok(Response::ok(
        json!({ "message": "Hello from Lambda!" }).to_string(),
    ))
}
