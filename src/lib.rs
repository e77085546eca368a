//! Tether - guest-side bridge for sandboxed request handlers
//!
//! A host launches the guest process once per invocation, writes one JSON
//! request document to its standard input, and reads one JSON response
//! envelope plus a 2-byte little-endian length marker from its standard
//! output before the process exits. This crate is the guest side of that
//! exchange: it decodes the request, invokes the user-supplied handler
//! exactly once, and frames the response with byte-exact write
//! verification.
//!
//! # Example
//!
//! ```rust,ignore
//! use tether::{Request, Response};
//!
//! fn handler(request: Request) -> Response {
//!     Response {
//!         body: format!("hello, {}", request.url),
//!         code: 200,
//!         header: Default::default(),
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     tether::serve(handler)
//! }
//! ```
//!
//! Launching and sandboxing the process, timeouts, and retries all belong
//! to the host: the guest does one request in, one response out, then
//! terminates. A non-zero exit code tells the host which phase failed;
//! see [`Error::exit_code`].

mod bridge;
mod error;
mod handler;
pub mod wire;

pub use bridge::{exchange, serve};
pub use error::{Error, Result};
pub use handler::Handler;
pub use wire::{Request, Response};
