//! Request schema and decoder

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One inbound call context, decoded once per process lifetime
///
/// Every field is populated after decoding: a key that is absent from the
/// input document (or carries a value of the wrong type) resolves to the
/// field's zero value, never to a null the handler has to check for.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request payload
    pub body: String,
    /// HTTP method of the originating call
    pub method: String,
    /// URL of the originating call
    pub url: String,
    /// Endpoint the host routed this call to
    pub endpoint_id: String,
    /// Environment variables the host exposes to the handler
    pub env: HashMap<String, String>,
    /// HTTP headers; multi-valued, order within a name preserved
    pub header: HashMap<String, Vec<String>>,
    /// Runtime the host selected for this deployment
    pub runtime: String,
    /// Deployment the handler blob belongs to
    pub deployment_id: String,
    /// Host-assigned request identifier, echoed back on the wire
    pub id: String,
}

impl Request {
    /// Decode a request from the raw bytes of the input stream.
    ///
    /// The bytes must form one well-formed JSON object; anything else is
    /// fatal and the handler is never invoked. Field extraction itself is
    /// permissive: each known key is looked up by name and defaulted when
    /// missing, unknown keys are ignored.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let document: Value = serde_json::from_slice(raw).map_err(Error::Decode)?;
        let Value::Object(fields) = document else {
            return Err(Error::NotAnObject);
        };

        Ok(Self {
            body: string_field(&fields, "body"),
            method: string_field(&fields, "method"),
            url: string_field(&fields, "url"),
            endpoint_id: string_field(&fields, "endpoint_id"),
            env: env_field(&fields, "env"),
            header: header_field(&fields, "header"),
            runtime: string_field(&fields, "runtime"),
            deployment_id: string_field(&fields, "deployment_id"),
            id: string_field(&fields, "id"),
        })
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(value)) => value.clone(),
        _ => String::new(),
    }
}

fn env_field(fields: &Map<String, Value>, key: &str) -> HashMap<String, String> {
    let Some(Value::Object(entries)) = fields.get(key) else {
        return HashMap::new();
    };
    entries
        .iter()
        .filter_map(|(name, value)| match value {
            Value::String(value) => Some((name.clone(), value.clone())),
            _ => None,
        })
        .collect()
}

fn header_field(fields: &Map<String, Value>, key: &str) -> HashMap<String, Vec<String>> {
    let Some(Value::Object(entries)) = fields.get(key) else {
        return HashMap::new();
    };
    entries
        .iter()
        .map(|(name, values)| {
            let values = match values {
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
                _ => Vec::new(),
            };
            (name.clone(), values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let request = Request::decode(b"{}").unwrap();

        assert_eq!(request.body, "");
        assert_eq!(request.method, "");
        assert_eq!(request.url, "");
        assert_eq!(request.endpoint_id, "");
        assert!(request.env.is_empty());
        assert!(request.header.is_empty());
        assert_eq!(request.runtime, "");
        assert_eq!(request.deployment_id, "");
        assert_eq!(request.id, "");
    }

    #[test]
    fn test_present_fields_pass_through_verbatim() {
        let raw = br#"{
            "body": "hello",
            "method": "POST",
            "url": "/orders",
            "endpoint_id": "ep-1",
            "env": {"MODE": "test"},
            "header": {"X-Trace": ["1", "2"]},
            "runtime": "go",
            "deployment_id": "dep-7",
            "id": "abc123"
        }"#;

        let request = Request::decode(raw).unwrap();

        assert_eq!(request.body, "hello");
        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "/orders");
        assert_eq!(request.endpoint_id, "ep-1");
        assert_eq!(request.env["MODE"], "test");
        assert_eq!(request.header["X-Trace"], vec!["1", "2"]);
        assert_eq!(request.runtime, "go");
        assert_eq!(request.deployment_id, "dep-7");
        assert_eq!(request.id, "abc123");
    }

    #[test]
    fn test_header_value_order_preserved() {
        let request =
            Request::decode(br#"{"header":{"Accept":["text/html","application/json","*/*"]}}"#)
                .unwrap();

        assert_eq!(
            request.header["Accept"],
            vec!["text/html", "application/json", "*/*"]
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let request = Request::decode(br#"{"id":"x","color":"green","retries":3}"#).unwrap();

        assert_eq!(request.id, "x");
        assert_eq!(request.body, "");
    }

    #[test]
    fn test_wrong_typed_field_falls_back_to_default() {
        let request = Request::decode(br#"{"body":42,"env":["not","a","map"],"id":null}"#).unwrap();

        assert_eq!(request.body, "");
        assert!(request.env.is_empty());
        assert_eq!(request.id, "");
    }

    #[test]
    fn test_malformed_syntax_rejected() {
        let result = Request::decode(b"{\"body\": ");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_non_object_document_rejected() {
        let result = Request::decode(b"[1, 2, 3]");
        assert!(matches!(result, Err(Error::NotAnObject)));
    }
}
