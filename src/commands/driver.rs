//! Drives [`Session`] modals through a [`Prompter`].
//!
//! The chosen answer is fed back to the session as [`ModalKey`] presses, so
//! the session stays the only place that decides what a choice means:
//!
//! - confirm: yes accepts, no or Esc dismisses
//! - select: cursor moves onto the picked item then accepts, Esc dismisses
//! - error: printed and closed without asking

use crate::commands::prompt::Prompter;
use crate::core::aws::run_sso_login;
use crate::core::error::Result;
use crate::core::executor::{CommandEvent, CommandFailed};
use crate::core::modal::{Modal, ModalKey, PendingAction};
use crate::core::output::{print_command_line, print_section_header};
use crate::core::render::Renderer;
use crate::core::session::{Event, Intent, Session};
use crate::core::terraform::run_init;

pub struct PromptDriver<P> {
    prompter: P,
    renderer: Renderer,
    auto_confirm: bool,
    last_error: Option<String>,
}

impl<P: Prompter> PromptDriver<P> {
    pub fn new(prompter: P, renderer: Renderer) -> Self {
        Self {
            prompter,
            renderer,
            auto_confirm: false,
            last_error: None,
        }
    }

    /// Accept every confirmation without asking.
    pub fn auto_confirm(mut self, yes: bool) -> Self {
        self.auto_confirm = yes;
        self
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn prompter(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Message of the last error modal shown, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Answers the open modal until it closes or yields an intent.
    pub fn resolve_modal(&mut self, session: &mut Session) -> Result<Option<Intent>> {
        while let Some(modal) = session.modal() {
            let keys = match modal {
                Modal::Error { message, .. } => {
                    println!("\n{}", self.renderer.render_modal(modal));
                    self.last_error = Some(message.clone());
                    vec![ModalKey::Accept]
                }
                Modal::Confirm { .. } if self.auto_confirm => vec![ModalKey::Accept],
                Modal::Confirm { action, .. } => {
                    println!("\n{}", self.renderer.render_modal_heading(modal));
                    let question = match action {
                        PendingAction::OfferInit { .. } => "Initialize now?",
                        PendingAction::ConfirmInit { .. } => "Run terraform init?",
                    };
                    match self.prompter.confirm(question, true)? {
                        Some(true) => vec![ModalKey::Accept],
                        Some(false) | None => vec![ModalKey::Dismiss],
                    }
                }
                Modal::Select {
                    title,
                    selected,
                    choice,
                    ..
                } => {
                    println!("\n{}", self.renderer.render_modal_heading(modal));
                    let selected = *selected;
                    match self.prompter.select(title, &choice.labels(), selected)? {
                        Some(target) => {
                            let mut keys = move_keys(selected, target);
                            keys.push(ModalKey::Accept);
                            keys
                        }
                        None => vec![ModalKey::Dismiss],
                    }
                }
            };

            for key in keys {
                if let Some(intent) = session.handle(Event::Modal(key)) {
                    return Ok(Some(intent));
                }
            }
        }
        Ok(None)
    }
}

/// Moves the open select modal onto the item labelled `label` and accepts it.
///
/// The flag is false when no select modal is open or no item has that
/// label; the session is left untouched in that case.
pub fn choose_label(session: &mut Session, label: &str) -> (bool, Option<Intent>) {
    let Some(Modal::Select {
        selected, choice, ..
    }) = session.modal()
    else {
        return (false, None);
    };
    let Some(target) = choice.labels().iter().position(|l| l == label) else {
        return (false, None);
    };

    let keys = move_keys(*selected, target);
    let mut intent = None;
    for key in keys.into_iter().chain(std::iter::once(ModalKey::Accept)) {
        intent = session.handle(Event::Modal(key));
    }
    (true, intent)
}

fn move_keys(from: usize, to: usize) -> Vec<ModalKey> {
    if to >= from {
        vec![ModalKey::Down; to - from]
    } else {
        vec![ModalKey::Up; from - to]
    }
}

/// Starts the command behind `intent`, echoes its output and feeds every
/// event back into the session. Returns the terminal event.
pub fn run_intent(session: &mut Session, intent: Intent) -> CommandEvent {
    let stream = match &intent {
        Intent::RunInit {
            project_path,
            options,
        } => run_init(project_path, options),
        Intent::RunSsoLogin { session: sso } => run_sso_login(sso),
    };
    print_section_header(&format!("Running {}", stream.command()));

    let command = stream.command().to_string();
    let mut terminal = None;
    for event in stream {
        if let CommandEvent::Output(line) = &event {
            print_command_line(&line.line, line.is_err);
        }
        if event.is_terminal() {
            terminal = Some(event.clone());
        }
        session.handle(Event::Command(event));
    }

    terminal.unwrap_or_else(|| {
        log::debug!("Stream for '{command}' ended without a terminal event");
        CommandEvent::Failed(CommandFailed {
            command,
            error: "command stream closed unexpectedly".to_string(),
            output: String::new(),
        })
    })
}
