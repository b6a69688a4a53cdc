use crate::commands::driver::{run_intent, PromptDriver};
use crate::commands::projects::load_projects;
use crate::commands::prompt::{Prompter, TerminalPrompter};
use crate::core::{
    aws::discover_sso_sessions,
    config::Config,
    discovery::determine_mode,
    error::{LazyTfError, Result},
    models::Mode,
    render::Renderer,
    session::{Event, Session, ViewMode},
    theme::Theme,
};
use std::env;

/// One entry of the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Session(Event),
    Quit,
}

/// Starts the interactive session: single-project mode when the working
/// directory is an initialized project, the project list otherwise.
pub fn execute_interactive(config: &Config) -> Result<()> {
    let (mode, project) = determine_mode(&env::current_dir()?);
    let projects = match project {
        Some(project) => vec![project],
        None => load_projects(config)?,
    };
    if projects.is_empty() {
        return Err(LazyTfError::NoProjectsFound);
    }

    let sso_sessions = discover_sso_sessions().unwrap_or_else(|e| {
        log::debug!("SSO sessions unavailable: {e}");
        Vec::new()
    });
    let session = Session::new(projects, mode).with_sso_sessions(sso_sessions);

    run_session(
        session,
        PromptDriver::new(TerminalPrompter::new(), Renderer::new(Theme::default())),
    )
}

/// Main loop over an already built session; ends when Quit is picked.
pub fn run_session<P: Prompter>(mut session: Session, mut driver: PromptDriver<P>) -> Result<()> {
    if session.modal().is_none() {
        println!("{}", driver.renderer().render(&session));
    }

    loop {
        if session.modal().is_some() {
            if let Some(intent) = driver.resolve_modal(&mut session)? {
                run_intent(&mut session, intent);
            }
            println!("{}", driver.renderer().render(&session));
            continue;
        }

        let items = menu_items(&session);
        let labels: Vec<String> = items.iter().map(|(label, _)| label.clone()).collect();
        let prompt = match session.view() {
            ViewMode::ProjectList => "Select a project",
            ViewMode::ProjectDetail => "Select an environment or action",
        };
        let picked = driver.prompter().select(prompt, &labels, menu_cursor(&session))?;
        let item = picked
            .and_then(|index| items.into_iter().nth(index))
            .map(|(_, item)| item)
            .unwrap_or_else(|| cancel_item(&session));

        let event = match item {
            MenuItem::Quit => return Ok(()),
            MenuItem::Session(event) => event,
        };
        if let Some(intent) = session.handle(event) {
            run_intent(&mut session, intent);
        }
        // an opened modal is printed by the driver on the next turn
        if session.modal().is_none() {
            println!("{}", driver.renderer().render(&session));
        }
    }
}

/// Menu for the current view: the sidebar items first, then the actions
/// that apply to the view.
pub fn menu_items(session: &Session) -> Vec<(String, MenuItem)> {
    let view = session.view();
    let mut items: Vec<(String, MenuItem)> = session
        .sidebar_items()
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let event = match view {
                ViewMode::ProjectList => Event::SelectProject(index),
                ViewMode::ProjectDetail => Event::SelectVarFile(index),
            };
            (label, MenuItem::Session(event))
        })
        .collect();

    if view == ViewMode::ProjectDetail {
        items.push(("Initialize an environment".to_string(), MenuItem::Session(Event::InitRequested)));
    }
    items.push(("AWS SSO login".to_string(), MenuItem::Session(Event::SsoLoginRequested)));
    if view == ViewMode::ProjectDetail && session.mode() == Mode::MultiProject {
        items.push(("Back to projects".to_string(), MenuItem::Session(Event::Back)));
    }
    items.push(("Quit".to_string(), MenuItem::Quit));
    items
}

/// Esc goes back to the project list where there is one, and quits otherwise.
fn cancel_item(session: &Session) -> MenuItem {
    if session.view() == ViewMode::ProjectDetail && session.mode() == Mode::MultiProject {
        MenuItem::Session(Event::Back)
    } else {
        MenuItem::Quit
    }
}

fn menu_cursor(session: &Session) -> usize {
    session
        .selection()
        .filter(|_| session.view() == ViewMode::ProjectDetail)
        .and_then(|selection| selection.selected_var_file)
        .unwrap_or(0)
}
