//! Host-side harness for driving one guest invocation
//!
//! Usage:
//!   tether-harness --request request.json ./my-guest arg1 arg2
//!   echo '{"id":"r1","body":"hi"}' | tether-harness ./my-guest
//!
//! Plays the host for a single exchange: spawns the guest with piped
//! standard streams, writes the request document, captures the guest's
//! output, validates the trailing length marker, and pretty-prints the
//! decoded envelope. Log bytes the handler leaked onto standard output are
//! forwarded to standard error instead of being discarded.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Command, ExitCode, Stdio};

use clap::Parser;

use tether::wire::{ResponseEnvelope, split_frame};

/// Drive one guest invocation over its standard streams
#[derive(Parser)]
#[command(name = "tether-harness")]
#[command(about = "Send one request to a tether guest and print its response")]
struct Cli {
    /// Request document file; reads standard input when omitted
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Guest command and its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    guest: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let request = read_request(cli)?;

    let Some((program, args)) = cli.guest.split_first() else {
        return Err("missing guest command".to_string());
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| format!("failed to spawn guest: {e}"))?;

    // Write the request, then drop the pipe so the guest sees end-of-stream.
    {
        let Some(mut stdin) = child.stdin.take() else {
            return Err("guest standard input not piped".to_string());
        };
        stdin
            .write_all(&request)
            .map_err(|e| format!("failed to write request: {e}"))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("failed to collect guest output: {e}"))?;

    if !output.status.success() {
        return Err(format!("guest exited with {}", output.status));
    }

    let frame = split_frame(&output.stdout).map_err(|e| format!("invalid response frame: {e}"))?;

    if !frame.logs.is_empty() {
        let _ = io::stderr().write_all(frame.logs);
    }

    let envelope: ResponseEnvelope = serde_json::from_slice(frame.document)
        .map_err(|e| format!("failed to decode response envelope: {e}"))?;

    let pretty = serde_json::to_string_pretty(&envelope)
        .map_err(|e| format!("JSON encoding failed: {e}"))?;
    println!("{pretty}");

    Ok(())
}

fn read_request(cli: &Cli) -> Result<Vec<u8>, String> {
    match &cli.request {
        Some(path) => {
            fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("failed to read request from stdin: {e}"))?;
            Ok(buf)
        }
    }
}
