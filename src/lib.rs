//! A minimal AWS Lambda function.
//!
//! Every invocation logs a single diagnostic line and resolves with a
//! fixed `200 OK` payload in the API Gateway proxy shape. The event is
//! accepted in any shape and never inspected.

mod handler;
mod response;

pub use crate::handler::handler;
pub use crate::response::Response;
