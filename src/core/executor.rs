//! Streaming subprocess execution.
//!
//! [`execute_streaming`] runs a command with piped stdout and stderr and
//! turns its output into an ordered stream of [`CommandEvent`]s: any number
//! of [`CommandEvent::Output`] lines followed by exactly one terminal
//! [`CommandEvent::Completed`] or [`CommandEvent::Failed`].
//!
//! Two reader threads live inside a `std::thread::scope`, so the terminal
//! event can only be sent after both have drained their pipe and the child
//! has exited. No line is ever delivered after the terminal event.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub line: String,
    /// Line came from stderr
    pub is_err: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCompleted {
    pub command: String,
    pub exit_code: i32,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailed {
    pub command: String,
    pub error: String,
    /// Whatever the process printed before failing
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    Output(OutputLine),
    Completed(CommandCompleted),
    Failed(CommandFailed),
}

impl CommandEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CommandEvent::Output(_))
    }
}

/// Receiving end of a running command's events.
#[derive(Debug)]
pub struct CommandStream {
    command: String,
    receiver: Receiver<CommandEvent>,
}

impl CommandStream {
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Blocks until the command finishes and returns the terminal event.
    pub fn wait(self) -> CommandEvent {
        let command = self.command.clone();
        self.into_iter()
            .find(CommandEvent::is_terminal)
            .unwrap_or_else(|| {
                CommandEvent::Failed(CommandFailed {
                    command,
                    error: "command stream closed unexpectedly".to_string(),
                    output: String::new(),
                })
            })
    }
}

impl Iterator for CommandStream {
    type Item = CommandEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}

/// Human readable command line, e.g. `terraform init -upgrade`.
pub fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

/// Starts `program` and returns the stream of its output events.
///
/// A launch failure is reported as a single [`CommandEvent::Failed`].
pub fn execute_streaming(program: &str, args: &[String], working_dir: Option<&Path>) -> CommandStream {
    let command = command_line(program, args);
    let (events, receiver) = mpsc::channel();

    let mut process = Command::new(program);
    process
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = working_dir {
        process.current_dir(dir);
    }

    log::debug!("Running '{command}'");
    let mut child = match process.spawn() {
        Ok(child) => child,
        Err(e) => {
            log::warn!("Failed to start '{command}': {e}");
            let _ = events.send(CommandEvent::Failed(CommandFailed {
                command: command.clone(),
                error: format!("failed to start command: {e}"),
                output: String::new(),
            }));
            return CommandStream { command, receiver };
        }
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let thread_command = command.clone();

    thread::spawn(move || {
        let (lines_tx, lines_rx) = mpsc::channel::<OutputLine>();

        let output = thread::scope(|scope| {
            if let Some(stdout) = stdout {
                let tx = lines_tx.clone();
                scope.spawn(move || forward_lines(stdout, false, tx));
            }
            if let Some(stderr) = stderr {
                let tx = lines_tx.clone();
                scope.spawn(move || forward_lines(stderr, true, tx));
            }
            drop(lines_tx);

            // Ends once both readers have dropped their senders
            let mut combined = String::new();
            for line in lines_rx {
                combined.push_str(&line.line);
                combined.push('\n');
                let _ = events.send(CommandEvent::Output(line));
            }
            combined
        });

        let terminal = match child.wait() {
            Ok(status) if status.success() => CommandEvent::Completed(CommandCompleted {
                command: thread_command,
                exit_code: status.code().unwrap_or(0),
                output,
            }),
            Ok(status) => CommandEvent::Failed(CommandFailed {
                error: match status.code() {
                    Some(code) => format!("exited with status {code}"),
                    None => "terminated by signal".to_string(),
                },
                command: thread_command,
                output,
            }),
            Err(e) => CommandEvent::Failed(CommandFailed {
                command: thread_command,
                error: format!("failed to wait for command: {e}"),
                output,
            }),
        };
        log::debug!("Command finished: {terminal:?}");
        let _ = events.send(terminal);
    });

    CommandStream { command, receiver }
}

fn forward_lines<R: Read>(reader: R, is_err: bool, tx: Sender<OutputLine>) {
    let mut reader = BufReader::new(reader);
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buffer)
                    .trim_end_matches(['\n', '\r'])
                    .to_string();
                if tx.send(OutputLine { line, is_err }).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::debug!("Stopped reading command output: {e}");
                break;
            }
        }
    }
}
