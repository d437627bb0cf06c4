//! REPL driver
//!
//! Reads commands line by line, dispatches them and prints the result.
//! Command failures are printed and the loop continues; only I/O errors on
//! the input or output stream end it early.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::commands::{dispatch, Reply, Session};

pub const PROMPT: &str = "Pokedex > ";

const GOODBYE: &str = "Closing the Pokedex... Goodbye!";

/// Runs the loop until `exit` or end of input.
pub async fn run<R, W>(session: &mut Session, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut input = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = input.next_line().await.context("Failed to read input")? else {
            debug!("End of input");
            output.write_all(b"\n").await?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match dispatch(session, &line).await {
            Ok(Reply::Lines(lines)) => {
                for line in lines {
                    write_line(&mut output, &line).await?;
                }
            }
            Ok(Reply::Exit) => {
                write_line(&mut output, GOODBYE).await?;
                break;
            }
            Err(err) => {
                debug!(error = ?err, "Command failed");
                write_line(&mut output, &err.to_string()).await?;
            }
        }
    }

    output.flush().await?;
    info!("REPL finished");
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PokeApiClient;
    use crate::cache::Cache;
    use std::time::Duration;

    fn offline_session() -> Session {
        Session::new(
            Cache::new(Duration::from_secs(60)),
            PokeApiClient::new("http://127.0.0.1:9/api/v2", 20),
        )
    }

    async fn run_script(session: &mut Session, script: &str) -> String {
        let mut output = Vec::new();
        run(session, script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_command_does_not_stop_loop() {
        let mut session = offline_session();

        let output = run_script(&mut session, "fly away\n\nhelp\nexit\n").await;

        assert!(output.contains("fly away is not a valid command"));
        assert!(output.contains("Welcome to the Pokedex!"));
        assert!(output.ends_with("Closing the Pokedex... Goodbye!\n"));
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_ignores_remaining_input() {
        let mut session = offline_session();

        let output = run_script(&mut session, "exit\nhelp\n").await;

        assert!(!output.contains("Welcome"));
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_of_input_ends_loop() {
        let mut session = offline_session();

        let output = run_script(&mut session, "pokedex").await;

        assert!(output.contains("Your Pokedex is empty"));
        assert!(output.ends_with("Pokedex > \n"));
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_errors_are_printed() {
        let mut session = offline_session();

        let script = "mapb\ncatch pikachu\ninspect pikachu\nexplore\n";
        let output = run_script(&mut session, script).await;

        assert!(output.contains("There are no locations to go back to"));
        assert!(output.contains("You have to explore an area before catching pokemon"));
        assert!(output.contains("pikachu is not in your pokedex"));
        assert!(output.contains("Missing argument, usage: explore <area>"));
        session.shutdown().await;
    }
}
