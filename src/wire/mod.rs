//! Wire protocol for the single-shot invocation exchange
//!
//! Wire format:
//! ```text
//! Request (host -> guest, standard input):
//!   [JSON object, read to end-of-stream]
//!
//! Response (guest -> host, standard output):
//!   [JSON document: {"body", "code", "request_id", "header"}]
//!   [2 bytes: document length (u16 LE)]
//! ```
//!
//! The trailing marker lets the host stream the guest's output without
//! knowing the document length up front, then use the last two bytes purely
//! as a completion check. Anything the handler prints to standard output
//! before the framer runs ends up ahead of the document; [`split_frame`]
//! separates it back out on the host side.

mod framer;
mod request;
mod response;

pub use framer::{Frame, MARKER_WIDTH, encode_and_write, split_frame};
pub use request::Request;
pub use response::{Response, ResponseEnvelope};
