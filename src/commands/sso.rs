use crate::commands::driver::{choose_label, run_intent, PromptDriver};
use crate::commands::prompt::{Prompter, TerminalPrompter};
use crate::core::{
    aws::{discover_sso_sessions, SsoSession},
    error::{LazyTfError, Result},
    executor::CommandEvent,
    models::Mode,
    print_success,
    render::Renderer,
    session::{Event, Session},
    theme::Theme,
};

/// Runs `aws sso login` for the named session, or asks which one to use.
pub fn execute_sso_login(name: Option<String>) -> Result<()> {
    let sessions = discover_sso_sessions()?;
    execute_sso_login_with_prompter(sessions, name, TerminalPrompter::new())
}

pub fn execute_sso_login_with_prompter<P: Prompter>(
    sessions: Vec<SsoSession>,
    name: Option<String>,
    prompter: P,
) -> Result<()> {
    if sessions.is_empty() {
        return Err(LazyTfError::NoSsoSessions);
    }
    if let Some(name) = &name {
        if !sessions.iter().any(|s| &s.name == name) {
            return Err(LazyTfError::sso_session_not_found(name));
        }
    }

    let mut session = Session::new(Vec::new(), Mode::MultiProject).with_sso_sessions(sessions);
    session.handle(Event::SsoLoginRequested);

    let intent = match name {
        Some(name) => choose_label(&mut session, &name).1,
        None => PromptDriver::new(prompter, Renderer::new(Theme::default())).resolve_modal(&mut session)?,
    };
    let Some(intent) = intent else {
        return Ok(());
    };

    match run_intent(&mut session, intent) {
        CommandEvent::Failed(failed) => Err(LazyTfError::command_failed(failed.command, failed.error)),
        _ => {
            print_success("SSO login complete");
            Ok(())
        }
    }
}
