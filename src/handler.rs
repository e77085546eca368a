//! Handler contract

use crate::wire::{Request, Response};

/// A user-supplied request handler
///
/// The handler is the only piece of user code in the guest process. It is
/// invoked exactly once per process lifetime, which the signature encodes by
/// consuming `self`. Plain closures work through the blanket
/// implementation:
///
/// ```rust,ignore
/// use tether::{Request, Response};
///
/// fn main() -> std::process::ExitCode {
///     tether::serve(|request: Request| Response {
///         body: format!("you asked for {}", request.url),
///         code: 200,
///         header: Default::default(),
///     })
/// }
/// ```
///
/// A handler that panics aborts the process before anything reaches the
/// output stream; the host observes empty output and an abnormal exit.
pub trait Handler {
    /// Produce the response for the decoded request
    fn handle(self, request: Request) -> Response;
}

impl<F> Handler for F
where
    F: FnOnce(Request) -> Response,
{
    fn handle(self, request: Request) -> Response {
        self(request)
    }
}
