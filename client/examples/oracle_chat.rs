//! Oracle Chat Example
//!
//! A minimal question/answer loop against the oracle endpoint.

use anyhow::Result;
use skirmish_client::{HttpBackend, SkirmishApp};
use tokio::io::{AsyncBufReadExt, BufReader};

const BACKEND_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = SkirmishApp::new(HttpBackend::new(BACKEND_URL)?);

    println!("Ask the oracle anything (empty line to quit):");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            break;
        }

        if let Err(e) = app.oracle.ask(&line).await {
            println!("The oracle is silent: {}", e);
            continue;
        }

        if let Some(entry) = app.oracle.transcript().entries().last() {
            println!("{}: {}", entry.speaker, entry.text);
        }
    }

    Ok(())
}
