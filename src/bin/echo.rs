//! Demo guest: reflects the request body back at the host

use std::collections::HashMap;
use std::io;
use std::process::ExitCode;

use tether::{Request, Response};

fn main() -> ExitCode {
    // Standard output carries the wire response; diagnostics must stay on
    // standard error.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("tether=info,tether_echo=info")
                }),
        )
        .with_writer(io::stderr)
        .init();

    tether::serve(echo)
}

fn echo(request: Request) -> Response {
    tracing::info!(method = %request.method, url = %request.url, "handling request");

    let mut header = HashMap::new();
    header.insert(
        "Content-Type".to_string(),
        vec!["text/plain".to_string()],
    );

    Response {
        body: request.body,
        code: 200,
        header,
    }
}
