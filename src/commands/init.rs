use crate::commands::driver::{choose_label, run_intent, PromptDriver};
use crate::commands::prompt::{Prompter, TerminalPrompter};
use crate::commands::projects::find_project;
use crate::core::{
    config::Config,
    error::{LazyTfError, Result},
    executor::CommandEvent,
    modal::Modal,
    models::Mode,
    print_success,
    render::Renderer,
    session::{Event, Session},
    theme::Theme,
};

/// Runs `terraform init` for `project_name`, prompting on the terminal for
/// whatever the arguments leave open (environment, backend file, confirmation).
pub fn execute_init(config: &Config, project_name: &str, env: Option<String>, yes: bool) -> Result<()> {
    execute_init_with_prompter(config, project_name, env, yes, TerminalPrompter::new())
}

pub fn execute_init_with_prompter<P: Prompter>(
    config: &Config,
    project_name: &str,
    env: Option<String>,
    yes: bool,
    prompter: P,
) -> Result<()> {
    let project = find_project(config, project_name)?;
    let mut session = Session::new(vec![project.clone()], Mode::SingleProject);
    let mut driver = PromptDriver::new(prompter, Renderer::new(Theme::default())).auto_confirm(yes);

    session.handle(Event::InitRequested);

    let mut intent = None;
    if let Some(env) = env {
        if matches!(session.modal(), Some(Modal::Select { .. })) {
            let (found, chosen) = choose_label(&mut session, &env);
            if !found {
                return Err(LazyTfError::environment_not_found(&project.name, env));
            }
            intent = chosen;
        }
    }

    if intent.is_none() {
        intent = driver.resolve_modal(&mut session)?;
    }
    let Some(intent) = intent else {
        let reason = driver.last_error().unwrap_or("cancelled").to_string();
        return Err(LazyTfError::init_aborted(reason));
    };

    match run_intent(&mut session, intent) {
        CommandEvent::Failed(failed) => Err(LazyTfError::command_failed(failed.command, failed.error)),
        _ => {
            let env = session
                .initialized_env()
                .map(|env| format!(" ({env})"))
                .unwrap_or_default();
            print_success(&format!("Initialized {}{env}", project.name));
            Ok(())
        }
    }
}
