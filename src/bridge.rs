//! Guest lifetime orchestration
//!
//! One invocation is one process lifetime: read the request stream to
//! exhaustion, decode, hand off to the handler, frame the response, exit.
//! Nothing here is concurrent and nothing survives the exchange.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use crate::error::{Error, Result};
use crate::handler::Handler;
use crate::wire::{Request, encode_and_write};

/// Run one full exchange over the given streams.
///
/// Stream-generic so tests can drive it in memory; real guests go through
/// [`serve`]. The request identifier is cloned out before the request moves
/// into the handler; it is the only state that flows from the decode phase
/// to the encode phase.
pub fn exchange<R, W, H>(mut input: R, mut output: W, handler: H) -> Result<()>
where
    R: Read,
    W: Write,
    H: Handler,
{
    let mut raw = Vec::new();
    input.read_to_end(&mut raw).map_err(Error::Read)?;

    let request = Request::decode(&raw)?;
    let request_id = request.id.clone();
    tracing::debug!(id = %request_id, method = %request.method, url = %request.url, "request decoded");

    let response = handler.handle(request);
    tracing::debug!(code = response.code, "handler returned");

    encode_and_write(&mut output, response, request_id)
}

/// Run one full exchange over the process's standard streams.
///
/// This is the guest's entire lifetime: call it from `main` and return its
/// exit code. Standard output belongs exclusively to the wire response;
/// diagnostics go to standard error.
pub fn serve<H: Handler>(handler: H) -> ExitCode {
    match exchange(io::stdin().lock(), io::stdout().lock(), handler) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;

    use super::*;
    use crate::wire::{Response, ResponseEnvelope, split_frame};

    fn ok_response() -> Response {
        Response {
            body: "ok".to_string(),
            code: 200,
            header: HashMap::new(),
        }
    }

    #[test]
    fn test_minimal_exchange_produces_exact_frame() {
        let mut out = Vec::new();
        exchange(Cursor::new(b"{}"), &mut out, |_: Request| ok_response()).unwrap();

        let document = br#"{"body":"ok","code":200,"request_id":"","header":{}}"#;
        let mut expected = document.to_vec();
        expected.extend_from_slice(&(document.len() as u16).to_le_bytes());
        assert_eq!(out, expected);
    }

    #[test]
    fn test_handler_sees_fully_defaulted_request() {
        let mut out = Vec::new();
        exchange(Cursor::new(b"{}"), &mut out, |request: Request| {
            assert_eq!(request.method, "");
            assert_eq!(request.body, "");
            assert!(request.env.is_empty());
            assert!(request.header.is_empty());
            ok_response()
        })
        .unwrap();
    }

    #[test]
    fn test_request_identifier_reaches_the_wire() {
        let mut out = Vec::new();
        exchange(
            Cursor::new(br#"{"id":"abc123","body":"hi"}"#.as_slice()),
            &mut out,
            |_: Request| ok_response(),
        )
        .unwrap();

        let frame = split_frame(&out).unwrap();
        let envelope: ResponseEnvelope = serde_json::from_slice(frame.document).unwrap();
        assert_eq!(envelope.request_id, "abc123");
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let mut out = Vec::new();
        let result = exchange(Cursor::new(b"not a document"), &mut out, |_: Request| {
            unreachable!("handler must not run on a decode failure")
        });

        assert!(matches!(result, Err(Error::Decode(_))));
        assert!(out.is_empty());
    }
}
