use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, Lines};
use tokio::signal;

/// Source of user interrupts, pluggable the same way the line reader is.
#[allow(async_fn_in_trait)]
pub trait InterruptSource {
    /// Resolves when the user interrupts; may be awaited repeatedly.
    async fn interrupted(&mut self);
}

/// Ctrl+C from the real terminal.
pub struct CtrlC;

impl InterruptSource for CtrlC {
    async fn interrupted(&mut self) {
        // If the handler cannot be registered there will never be an
        // interrupt to observe; park instead of resolving in a loop.
        if signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MultilineInput {
    Message(String),
    /// Ctrl+D with nothing buffered; the session is over.
    EndOfInput,
}

/// Collects one multi-line message: lines accumulate until an empty line
/// is entered. An interrupt discards whatever was typed and restarts
/// collection; Ctrl+D sends the buffered lines, or ends the session if
/// there are none.
pub async fn read_multiline<R, I>(
    lines: &mut Lines<R>,
    interrupts: &mut I,
    header: &str,
) -> Result<MultilineInput>
where
    R: AsyncBufRead + Unpin,
    I: InterruptSource,
{
    println!("{}", header);
    let mut collected: Vec<String> = Vec::new();

    loop {
        tokio::select! {
            _ = interrupts.interrupted() => {
                collected.clear();
                println!("\n[input cleared - start typing your message again]");
            }
            line = lines.next_line() => {
                match line.context("Failed to read console input")? {
                    Some(line) => {
                        if line.trim().is_empty() {
                            if !collected.is_empty() {
                                break;
                            }
                        } else {
                            collected.push(line);
                        }
                    }
                    None => {
                        if collected.is_empty() {
                            return Ok(MultilineInput::EndOfInput);
                        }
                        break;
                    }
                }
            }
        }
    }

    Ok(MultilineInput::Message(collected.join("\n")))
}

/// Reads one menu line. `None` means end-of-input or an interrupt,
/// both of which end the program cleanly.
pub async fn read_menu_choice<R, I>(
    lines: &mut Lines<R>,
    interrupts: &mut I,
) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    I: InterruptSource,
{
    tokio::select! {
        _ = interrupts.interrupted() => Ok(None),
        line = lines.next_line() => {
            Ok(line.context("Failed to read console input")?)
        }
    }
}
