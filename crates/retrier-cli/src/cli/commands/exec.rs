//! `retrier exec -- <program> [args...]` – rerun a program until it exits 0.

use anyhow::{anyhow, Context, Result};
use retrier_core::retry::{Retrier, RetryError};
use std::process::Command;

/// Run `command` under `retrier`.
///
/// A non-zero exit is retried unless its code is in `stop_on`. A program
/// that cannot be spawned is not retried. Death by signal is retried.
pub fn run_exec(retrier: &Retrier, command: &[String], stop_on: &[i32]) -> Result<()> {
    let (program, args) = command.split_first().context("no program given")?;

    let outcome = retrier.run(|attempt| {
        tracing::info!(attempt, program = %program, "starting attempt");
        match Command::new(program).args(args).status() {
            Err(e) => (false, Err(anyhow!(e).context(format!("spawn {}", program)))),
            Ok(status) if status.success() => (false, Ok(())),
            Ok(status) => {
                let stop = status.code().is_some_and(|code| stop_on.contains(&code));
                tracing::warn!(attempt, %status, "program failed");
                (!stop, Err(anyhow!("{} exited with {}", program, status)))
            }
        }
    });

    match outcome {
        Ok(()) => Ok(()),
        Err(RetryError::Operation(e)) => Err(e),
        Err(err @ RetryError::MaxRetries { .. }) => Err(anyhow!("{}: {}", program, err)),
    }
}
