//! Operator-facing UI sink.
//!
//! Status output and interactive prompts go through [`UiSink`] rather than
//! straight to stdio, so headless runs and tests can substitute their own
//! sink. `ask` is the single blocking boundary of the whole engine: a
//! non-interactive sink returns an error (or a canned answer) instead of
//! waiting on an operator.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::errors::{HvError, HvResult};

#[async_trait]
pub trait UiSink: Send + Sync {
    /// Primary status line.
    fn info(&self, message: &str);

    /// Secondary, indented detail line.
    fn detail(&self, message: &str);

    /// Prompt the operator and wait for a line of input.
    ///
    /// Blocks indefinitely on an interactive sink. No timeout.
    async fn ask(&self, prompt: &str) -> HvResult<String>;
}

/// Console sink: status lines to stdout, prompts answered from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleUi;

#[async_trait]
impl UiSink for ConsoleUi {
    fn info(&self, message: &str) {
        println!("==> {message}");
    }

    fn detail(&self, message: &str) {
        println!("    {message}");
    }

    async fn ask(&self, prompt: &str) -> HvResult<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await?;
        if read == 0 {
            return Err(HvError::Ui("stdin closed while waiting for input".into()));
        }
        Ok(line.trim().to_string())
    }
}
