//! Encoder/framer for the response side of the exchange
//!
//! The guest writes exactly twice: the serialized envelope, then a 2-byte
//! little-endian marker holding the envelope's byte length. The host relies
//! on byte-exact framing, so a write that lands short is fatal on the spot;
//! it is never retried or papered over.

use std::io::Write;

use crate::error::{Error, Result};
use crate::wire::response::{Response, ResponseEnvelope};

/// Width of the trailing length marker in bytes.
///
/// Fixed by the host protocol; the marker is not self-describing, so both
/// sides agree on this width out of band.
pub const MARKER_WIDTH: usize = 2;

/// Serialize the response and write it to the output stream, framed.
///
/// `request_id` must be the identifier of the original request; the
/// response side carries no authoritative identifier of its own. The
/// marker write is only attempted once the document write is verified
/// complete, and both are flushed before returning: a buffered but
/// unflushed response is indistinguishable from no response to the host.
pub fn encode_and_write<W: Write>(
    out: &mut W,
    response: Response,
    request_id: String,
) -> Result<()> {
    let envelope = ResponseEnvelope {
        body: response.body,
        code: response.code,
        request_id,
        header: response.header,
    };

    let document = serde_json::to_vec(&envelope).map_err(Error::Encode)?;
    if document.len() > u16::MAX as usize {
        return Err(Error::FrameTooLarge {
            len: document.len(),
        });
    }

    write_exact(out, &document)?;

    let marker = (document.len() as u16).to_le_bytes();
    write_exact(out, &marker)?;

    out.flush().map_err(Error::Flush)?;

    tracing::debug!(len = document.len(), "response framed");
    Ok(())
}

/// Write `bytes` with a single write call and verify the reported count.
fn write_exact<W: Write>(out: &mut W, bytes: &[u8]) -> Result<()> {
    let written = out.write(bytes).map_err(Error::Write)?;
    if written != bytes.len() {
        return Err(Error::ShortWrite {
            expected: bytes.len(),
            written,
        });
    }
    Ok(())
}

/// A guest's standard-output capture, split at the frame boundaries
#[derive(Debug)]
pub struct Frame<'a> {
    /// The serialized response envelope
    pub document: &'a [u8],
    /// Whatever the handler printed to standard output before the framer ran
    pub logs: &'a [u8],
}

/// Split a complete output capture into logs, document, and marker.
///
/// Host-side counterpart of [`encode_and_write`]: the last [`MARKER_WIDTH`]
/// bytes declare the document length, the declared bytes immediately before
/// them are the document, and any remaining prefix is handler log output.
/// A capture whose marker disagrees with the bytes actually present is
/// rejected; the host must treat the whole invocation as invalid.
pub fn split_frame(raw: &[u8]) -> Result<Frame<'_>> {
    if raw.len() < MARKER_WIDTH {
        return Err(Error::TruncatedFrame { len: raw.len() });
    }

    let marker_start = raw.len() - MARKER_WIDTH;
    let declared = u16::from_le_bytes([raw[marker_start], raw[marker_start + 1]]) as usize;
    if declared > marker_start {
        return Err(Error::MarkerMismatch {
            declared,
            available: marker_start,
        });
    }

    let document_start = marker_start - declared;
    Ok(Frame {
        document: &raw[document_start..marker_start],
        logs: &raw[..document_start],
    })
}
