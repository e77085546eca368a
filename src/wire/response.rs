//! Response record and wire envelope

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The handler's result, consumed exactly once by the framer
#[derive(Debug)]
pub struct Response {
    /// Response payload
    pub body: String,
    /// HTTP status code
    pub code: u16,
    /// HTTP headers; multi-valued, order within a name preserved
    pub header: HashMap<String, Vec<String>>,
}

/// The exact structure serialized to the output stream
///
/// Not the same object as [`Response`]: it additionally carries the
/// identifier of the *request*, injected by the framer. Handlers never see
/// this type; it exists on the guest side only for the moment between
/// handler return and write-out, and on the host side to read the wire
/// document back.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Response payload, verbatim from the handler
    pub body: String,
    /// HTTP status code, verbatim from the handler
    pub code: u16,
    /// Identifier of the original request, never of the response
    pub request_id: String,
    /// HTTP headers, verbatim from the handler
    pub header: HashMap<String, Vec<String>>,
}
