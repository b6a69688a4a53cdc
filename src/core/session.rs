//! Interactive selection state machine.
//!
//! [`Session`] owns everything the interactive front-end knows: the project
//! list, the current [`SelectionContext`], the active [`Modal`] and the
//! detail panel. It reacts to one [`Event`] at a time and may answer with an
//! [`Intent`] for the caller to execute (`terraform init`, `aws sso login`).
//! Output of that execution is fed back as [`Event::Command`] events.
//!
//! ```text
//! ProjectList -> ProjectDetail -> env chosen -> backend resolution
//!     -> confirmation -> Executing -> ProjectDetail (refreshed)
//! ```
//!
//! Backend resolution depends on how many backend files match the chosen
//! environment: none shows an error modal, one asks for confirmation, more
//! than one asks the user to pick.

use crate::core::aws::SsoSession;
use crate::core::backend::{discover_backend_var_files, format_backend_info, match_backends_for_env};
use crate::core::backend_state::{detect_current_backend, format_backend_state};
use crate::core::discovery::is_initialized;
use crate::core::executor::{CommandEvent, OutputLine};
use crate::core::modal::{Modal, ModalKey, ModalOutcome, PendingAction, PendingChoice};
use crate::core::models::{BackendState, BackendVarFile, InitOptions, Mode, Project, VarFile};
use crate::core::varfiles::{discover_var_files, find_var_file_by_env_name, var_file_display_names};
use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    ProjectList,
    ProjectDetail,
}

/// Discovery snapshot for the selected project.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionContext {
    pub project: Project,
    pub var_files: Vec<VarFile>,
    pub selected_var_file: Option<usize>,
    pub backend_var_files: Vec<BackendVarFile>,
    pub backend_state: BackendState,
}

impl SelectionContext {
    /// Runs var-file, backend-file and backend-state discovery for `project`.
    pub fn load(project: Project) -> Self {
        let var_files = discover_var_files(&project.path);
        let backend_var_files = discover_backend_var_files(&project.path);
        let backend_state = detect_current_backend(&project.path, &backend_var_files);
        Self {
            project,
            var_files,
            selected_var_file: None,
            backend_var_files,
            backend_state,
        }
    }

    pub fn selected_var_file(&self) -> Option<&VarFile> {
        self.selected_var_file.and_then(|i| self.var_files.get(i))
    }

    fn refresh_backend_state(&mut self) {
        self.backend_state = detect_current_backend(&self.project.path, &self.backend_var_files);
        self.project.is_initialized = self.backend_state.is_initialized;
    }
}

/// Input the session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectProject(usize),
    SelectVarFile(usize),
    /// Open the environment picker for `terraform init`.
    InitRequested,
    SsoLoginRequested,
    Back,
    Modal(ModalKey),
    /// Output or completion of the command started for the last intent.
    Command(CommandEvent),
}

/// Work the caller must start on the session's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    RunInit {
        project_path: PathBuf,
        options: InitOptions,
    },
    RunSsoLogin { session: SsoSession },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunningKind {
    Init,
    SsoLogin,
}

#[derive(Debug, Clone, PartialEq)]
struct RunningCommand {
    kind: RunningKind,
    project_path: Option<PathBuf>,
}

/// Text of the main panel plus the output log of commands run from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub content: String,
    pub output: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommand {
    pub command: String,
    pub succeeded: bool,
    pub finished_at: DateTime<Local>,
}

#[derive(Debug)]
pub struct Session {
    mode: Mode,
    view: ViewMode,
    projects: Vec<Project>,
    selection: Option<SelectionContext>,
    modal: Option<Modal>,
    panel: Panel,
    status: String,
    sso_sessions: Vec<SsoSession>,
    running: Option<RunningCommand>,
    last_command: Option<LastCommand>,
}

impl Session {
    /// Starts a session. In single-project mode the first project is opened
    /// straight away and there is no project list to go back to.
    pub fn new(projects: Vec<Project>, mode: Mode) -> Self {
        let mut session = Self {
            mode,
            view: ViewMode::ProjectList,
            projects,
            selection: None,
            modal: None,
            panel: Panel::default(),
            status: String::new(),
            sso_sessions: Vec::new(),
            running: None,
            last_command: None,
        };

        if mode == Mode::SingleProject && !session.projects.is_empty() {
            session.open_project(0);
        }
        session
    }

    pub fn with_sso_sessions(mut self, sessions: Vec<SsoSession>) -> Self {
        self.sso_sessions = sessions;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selection(&self) -> Option<&SelectionContext> {
        self.selection.as_ref()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn last_command(&self) -> Option<&LastCommand> {
        self.last_command.as_ref()
    }

    /// Environment the sidebar marks as initialized, if known.
    pub fn initialized_env(&self) -> Option<&str> {
        self.selection
            .as_ref()
            .map(|s| s.backend_state.detected_env.as_str())
            .filter(|env| !env.is_empty())
    }

    /// Items of the sidebar for the current view.
    pub fn sidebar_items(&self) -> Vec<String> {
        match (&self.view, &self.selection) {
            (ViewMode::ProjectDetail, Some(selection)) => var_file_display_names(&selection.var_files),
            _ => self.projects.iter().map(|p| p.name.clone()).collect(),
        }
    }

    /// Feeds one event into the state machine.
    ///
    /// While a modal is open it receives all user input; everything except
    /// [`Event::Modal`] and [`Event::Command`] is ignored.
    pub fn handle(&mut self, event: Event) -> Option<Intent> {
        match event {
            Event::Command(command_event) => {
                self.on_command_event(command_event);
                None
            }
            Event::Modal(key) => self.on_modal_key(key),
            _ if self.modal.is_some() => None,
            Event::SelectProject(index) => {
                if self.view == ViewMode::ProjectList {
                    self.open_project(index);
                }
                None
            }
            Event::SelectVarFile(index) => {
                if self.view == ViewMode::ProjectDetail {
                    self.select_var_file(index);
                }
                None
            }
            Event::InitRequested => {
                self.request_init();
                None
            }
            Event::SsoLoginRequested => {
                self.request_sso_login();
                None
            }
            Event::Back => {
                self.back_to_project_list();
                None
            }
        }
    }

    fn open_project(&mut self, index: usize) {
        let Some(project) = self.projects.get(index).cloned() else {
            return;
        };

        log::debug!("Opening project {}", project.path.display());
        let selection = SelectionContext::load(project);
        self.panel.title = "Project Details".to_string();
        self.panel.content = project_details(&selection);
        self.panel.output.clear();
        self.selection = Some(selection);
        self.view = ViewMode::ProjectDetail;
        self.status.clear();
    }

    fn back_to_project_list(&mut self) {
        if self.view != ViewMode::ProjectDetail || self.mode == Mode::SingleProject {
            return;
        }
        self.view = ViewMode::ProjectList;
        self.selection = None;
        self.panel = Panel::default();
        self.status.clear();
    }

    fn select_var_file(&mut self, index: usize) {
        let Some(selection) = self.selection.as_mut() else {
            return;
        };
        let Some(var_file) = selection.var_files.get(index).cloned() else {
            return;
        };
        selection.selected_var_file = Some(index);

        self.render_env_details();

        let initialized = self
            .selection
            .as_ref()
            .is_some_and(|s| s.backend_state.is_env_initialized(&var_file.env_name));
        if !initialized {
            self.modal = Some(Modal::Confirm {
                title: "Environment Not Initialized".to_string(),
                message: format!(
                    "Environment \"{}\" is not initialized.\n\nTerraform commands won't work until you initialize it.\n\n[Enter] Initialize now    [Esc] View details anyway",
                    var_file.env_name
                ),
                action: PendingAction::OfferInit {
                    env_name: var_file.env_name,
                },
            });
        }
    }

    fn request_init(&mut self) {
        if self.view != ViewMode::ProjectDetail {
            return;
        }
        let Some(selection) = self.selection.as_ref() else {
            return;
        };
        if self.running.is_some() {
            self.status = "A command is already running".to_string();
            return;
        }

        let env_names = var_file_display_names(&selection.var_files);
        if env_names.is_empty() {
            self.modal = Some(Modal::Error {
                title: "No Environments Found".to_string(),
                message: format!("No var files found for project {}", selection.project.name),
                error_text: "Add a .tfvars file to the project root, variables/, env/ or tfvars/."
                    .to_string(),
            });
            return;
        }

        self.modal = Some(Modal::Select {
            title: "Terraform Init".to_string(),
            message: format!(
                "Choose an environment to init for {}",
                selection.project.name
            ),
            selected: 0,
            choice: PendingChoice::InitEnvironment { env_names },
        });
    }

    fn request_sso_login(&mut self) {
        if self.running.is_some() {
            self.status = "A command is already running".to_string();
            return;
        }
        if self.sso_sessions.is_empty() {
            self.modal = Some(Modal::Error {
                title: "No SSO Sessions".to_string(),
                message: "No AWS SSO sessions configured".to_string(),
                error_text: "Add an [sso-session NAME] section to ~/.aws/config.".to_string(),
            });
            return;
        }
        self.modal = Some(Modal::Select {
            title: "AWS SSO Login".to_string(),
            message: "Choose an SSO session to log in with".to_string(),
            selected: 0,
            choice: PendingChoice::SsoSession {
                sessions: self.sso_sessions.clone(),
            },
        });
    }

    /// Resolves the backend for `env_name` and opens the matching modal.
    fn start_init_for_env(&mut self, env_name: String) {
        let Some(selection) = self.selection.as_mut() else {
            return;
        };
        if let Some((index, _)) = find_var_file_by_env_name(&env_name, &selection.var_files) {
            selection.selected_var_file = Some(index);
        }

        let mut candidates = match_backends_for_env(&env_name, &selection.backend_var_files);
        let project_name = selection.project.name.clone();
        log::debug!(
            "{} backend candidates for environment '{env_name}'",
            candidates.len()
        );

        self.modal = Some(match candidates.len() {
            0 => Modal::Error {
                title: "No Backend Config Found".to_string(),
                message: format!("No backend configuration found for environment: {env_name}"),
                error_text: format!(
                    "Please create a backend configuration file (e.g., backend_{env_name}.tfvars) to initialize this environment."
                ),
            },
            1 => {
                let backend = candidates.remove(0);
                confirm_init_modal(&project_name, env_name, backend)
            }
            _ => Modal::Select {
                title: "Select Backend Config".to_string(),
                message: format!(
                    "Multiple backend configurations found for environment {env_name}. Please select one:"
                ),
                selected: 0,
                choice: PendingChoice::Backend {
                    env_name,
                    candidates,
                },
            },
        });
    }

    fn on_modal_key(&mut self, key: ModalKey) -> Option<Intent> {
        let outcome = self.modal.as_mut()?.handle_key(key);
        if outcome != ModalOutcome::Open {
            self.modal = None;
        }

        match outcome {
            ModalOutcome::Open | ModalOutcome::Closed => None,
            // Declining either confirmation leaves the details on screen.
            ModalOutcome::Declined(_) => None,
            ModalOutcome::Confirmed(PendingAction::OfferInit { env_name }) => {
                self.start_init_for_env(env_name);
                None
            }
            ModalOutcome::Confirmed(PendingAction::ConfirmInit { env_name, backend }) => {
                self.launch_init(env_name, backend)
            }
            ModalOutcome::Selected { choice, index } => self.on_choice(choice, index),
        }
    }

    fn on_choice(&mut self, choice: PendingChoice, index: usize) -> Option<Intent> {
        match choice {
            PendingChoice::InitEnvironment { mut env_names } => {
                if index < env_names.len() {
                    self.start_init_for_env(env_names.swap_remove(index));
                }
                None
            }
            PendingChoice::Backend {
                env_name,
                mut candidates,
            } => {
                if index < candidates.len() {
                    let backend = candidates.swap_remove(index);
                    let project_name = self
                        .selection
                        .as_ref()
                        .map(|s| s.project.name.clone())
                        .unwrap_or_default();
                    self.modal = Some(confirm_init_modal(&project_name, env_name, backend));
                }
                None
            }
            PendingChoice::SsoSession { mut sessions } => {
                if index >= sessions.len() || self.running.is_some() {
                    return None;
                }
                let session = sessions.swap_remove(index);
                self.running = Some(RunningCommand {
                    kind: RunningKind::SsoLogin,
                    project_path: None,
                });
                self.panel.output.clear();
                self.status = format!("Logging in with SSO session {}", session.name);
                Some(Intent::RunSsoLogin { session })
            }
        }
    }

    fn launch_init(&mut self, env_name: String, backend: BackendVarFile) -> Option<Intent> {
        if self.running.is_some() {
            self.status = "A command is already running".to_string();
            return None;
        }
        let selection = self.selection.as_ref()?;
        let project_path = selection.project.path.clone();

        self.running = Some(RunningCommand {
            kind: RunningKind::Init,
            project_path: Some(project_path.clone()),
        });
        self.panel.output.clear();
        self.status = format!("Initializing {env_name} with {}", backend.name);

        Some(Intent::RunInit {
            project_path,
            options: InitOptions::for_backend(backend),
        })
    }

    fn on_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::Output(OutputLine { line, is_err }) => {
                if is_err {
                    self.panel.output.push(format!("! {line}"));
                } else {
                    self.panel.output.push(line);
                }
            }
            CommandEvent::Completed(done) => {
                self.panel
                    .output
                    .push(format!("✓ {} finished (exit {})", done.command, done.exit_code));
                self.status = format!("{} finished", done.command);
                self.finish_command(done.command, true);
            }
            CommandEvent::Failed(failed) => {
                if !failed.output.is_empty() && self.panel.output.is_empty() {
                    self.panel
                        .output
                        .extend(failed.output.lines().map(str::to_string));
                }
                self.panel
                    .output
                    .push(format!("✕ {} failed: {}", failed.command, failed.error));
                self.status = format!("{} failed", failed.command);
                self.finish_command(failed.command, false);
            }
        }
    }

    /// Clears the running command; after an init the backend state is
    /// always re-read from disk, whatever the outcome.
    fn finish_command(&mut self, command: String, succeeded: bool) {
        self.last_command = Some(LastCommand {
            command,
            succeeded,
            finished_at: Local::now(),
        });

        let Some(running) = self.running.take() else {
            return;
        };
        if running.kind != RunningKind::Init {
            return;
        }
        let Some(project_path) = running.project_path else {
            return;
        };

        let initialized = is_initialized(&project_path);
        for project in self.projects.iter_mut().filter(|p| p.path == project_path) {
            project.is_initialized = initialized;
        }

        let Some(selection) = self.selection.as_mut() else {
            return;
        };
        if selection.project.path != project_path {
            return;
        }
        selection.refresh_backend_state();

        if selection.selected_var_file().is_some() {
            self.render_env_details();
        } else {
            self.panel.title = "Project Details".to_string();
            self.panel.content = project_details(selection);
        }
    }

    fn render_env_details(&mut self) {
        let Some(selection) = self.selection.as_ref() else {
            return;
        };
        let Some(var_file) = selection.selected_var_file() else {
            return;
        };

        let state = &selection.backend_state;
        let status = if state.is_env_initialized(&var_file.env_name) {
            "This environment is currently initialized".to_string()
        } else if state.is_initialized && !state.detected_env.is_empty() {
            format!("Different environment is initialized ({})", state.detected_env)
        } else if state.is_initialized {
            "Initialized (environment unknown)".to_string()
        } else {
            "Not initialized".to_string()
        };
        let matched = match_backends_for_env(&var_file.env_name, &selection.backend_var_files);

        self.panel.title = "Environment Details".to_string();
        self.panel.content = format!(
            "Environment: {}\nStatus: {}\n\nVar File: {}\nFull Path: {}\n\nBackend Configuration:\n{}",
            var_file.env_name,
            status,
            var_file.name,
            var_file.full_path.display(),
            format_backend_info(&matched)
        );
    }
}

fn confirm_init_modal(project_name: &str, env_name: String, backend: BackendVarFile) -> Modal {
    Modal::Confirm {
        title: "Confirm Terraform Init".to_string(),
        message: format!(
            "Initialize project {project_name} with environment {env_name}?\n\nUsing backend: {}",
            backend.name
        ),
        action: PendingAction::ConfirmInit { env_name, backend },
    }
}

fn project_details(selection: &SelectionContext) -> String {
    format!(
        "Project: {}\nPath: {}\n\n--- Backend Status ---\n{}\n--- Available Environments ---\nVar Files: {}\nBackend Configs: {}",
        selection.project.name,
        selection.project.path.display(),
        format_backend_state(&selection.backend_state),
        selection.var_files.len(),
        selection.backend_var_files.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::executor::{CommandCompleted, CommandFailed};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn project_at(root: &Path) -> Project {
        Project {
            name: "app".to_string(),
            path: root.to_path_buf(),
            is_initialized: is_initialized(root),
        }
    }

    fn session_for(root: &Path) -> Session {
        let mut session = Session::new(vec![project_at(root)], Mode::MultiProject);
        session.handle(Event::SelectProject(0));
        session
    }

    #[test]
    fn test_opening_project_loads_snapshot() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");
        touch(dir.path(), "variables/backend/backend_dev.tfvars");

        let session = session_for(dir.path());
        assert_eq!(session.view(), ViewMode::ProjectDetail);
        assert_eq!(session.sidebar_items(), vec!["dev"]);
        let selection = session.selection().unwrap();
        assert_eq!(selection.backend_var_files.len(), 1);
        assert!(!selection.backend_state.is_initialized);
        assert!(session.panel().content.contains("Not initialized"));
    }

    #[test]
    fn test_single_project_mode_opens_project_and_blocks_back() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");

        let mut session = Session::new(vec![project_at(dir.path())], Mode::SingleProject);
        assert_eq!(session.view(), ViewMode::ProjectDetail);
        session.handle(Event::Back);
        assert_eq!(session.view(), ViewMode::ProjectDetail);
    }

    #[test]
    fn test_back_resets_selection() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");

        let mut session = session_for(dir.path());
        session.handle(Event::Back);
        assert_eq!(session.view(), ViewMode::ProjectList);
        assert!(session.selection().is_none());
        assert_eq!(session.sidebar_items(), vec!["app"]);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(vec![project_at(dir.path())], Mode::MultiProject);
        session.handle(Event::SelectProject(7));
        assert_eq!(session.view(), ViewMode::ProjectList);
    }

    #[test]
    fn test_zero_candidates_shows_error_modal() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::SelectVarFile(0));
        assert!(session.handle(Event::Modal(ModalKey::Accept)).is_none());

        match session.modal() {
            Some(Modal::Error { error_text, .. }) => {
                assert!(error_text.contains("backend_dev.tfvars"))
            }
            other => panic!("unexpected modal: {other:?}"),
        }

        session.handle(Event::Modal(ModalKey::Accept));
        assert!(session.modal().is_none());
        assert_eq!(session.view(), ViewMode::ProjectDetail);
    }

    #[test]
    fn test_generic_backend_is_used_as_single_candidate() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/qa.tfvars");
        touch(dir.path(), "variables/backend/backend.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::SelectVarFile(0));
        session.handle(Event::Modal(ModalKey::Accept));

        match session.handle(Event::Modal(ModalKey::Accept)) {
            Some(Intent::RunInit { options, .. }) => {
                assert_eq!(options.backend_config_file.unwrap().name, "backend.tfvars");
            }
            other => panic!("unexpected intent: {other:?}"),
        }
    }

    #[test]
    fn test_declining_confirmation_has_no_side_effects() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");
        touch(dir.path(), "variables/backend/backend_dev.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::SelectVarFile(0));
        session.handle(Event::Modal(ModalKey::Accept));
        assert!(matches!(session.modal(), Some(Modal::Confirm { .. })));

        assert!(session.handle(Event::Modal(ModalKey::Dismiss)).is_none());
        assert!(session.modal().is_none());
        assert!(!session.is_running());
        assert_eq!(session.panel().title, "Environment Details");
    }

    #[test]
    fn test_modal_captures_input() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::SelectVarFile(0));
        session.handle(Event::Back);
        assert_eq!(session.view(), ViewMode::ProjectDetail);
        assert!(session.modal().is_some());
    }

    #[test]
    fn test_init_requested_lists_environments() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");
        touch(dir.path(), "variables/int.tfvars");
        touch(dir.path(), "variables/backend/backend_int.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::InitRequested);
        match session.modal() {
            Some(Modal::Select { choice, .. }) => assert_eq!(choice.labels(), vec!["dev", "int"]),
            other => panic!("unexpected modal: {other:?}"),
        }

        session.handle(Event::Modal(ModalKey::Down));
        session.handle(Event::Modal(ModalKey::Accept));
        assert_eq!(session.selection().unwrap().selected_var_file, Some(1));
        assert!(matches!(
            session.modal(),
            Some(Modal::Confirm {
                action: PendingAction::ConfirmInit { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_init_requested_without_var_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");

        let mut session = session_for(dir.path());
        session.handle(Event::InitRequested);
        assert!(matches!(session.modal(), Some(Modal::Error { .. })));
    }

    #[test]
    fn test_selecting_initialized_env_skips_modal() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev2.tfvars");
        touch(dir.path(), "variables/backend/backend_dev2.tfvars");
        fs::create_dir_all(dir.path().join(".terraform")).unwrap();
        fs::write(
            dir.path().join(".terraform/terraform.tfstate"),
            r#"{"backend":{"type":"s3","config":{"key":"dev2/terraform.tfstate"}}}"#,
        )
        .unwrap();

        let mut session = session_for(dir.path());
        assert_eq!(session.initialized_env(), Some("dev2"));
        session.handle(Event::SelectVarFile(0));
        assert!(session.modal().is_none());
        assert!(session
            .panel()
            .content
            .contains("This environment is currently initialized"));
    }

    #[test]
    fn test_initialized_without_known_env_is_not_reported_as_uninitialized() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");
        fs::create_dir_all(dir.path().join(".terraform")).unwrap();

        let mut session = session_for(dir.path());
        assert_eq!(session.initialized_env(), None);
        session.handle(Event::SelectVarFile(0));
        assert!(session
            .panel()
            .content
            .contains("Status: Initialized (environment unknown)"));
    }

    #[test]
    fn test_only_one_command_at_a_time() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");
        touch(dir.path(), "variables/backend/backend_dev.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::InitRequested);
        session.handle(Event::Modal(ModalKey::Accept));
        assert!(session.handle(Event::Modal(ModalKey::Accept)).is_some());
        assert!(session.is_running());

        session.handle(Event::InitRequested);
        assert!(session.modal().is_none());
        assert_eq!(session.status(), "A command is already running");
    }

    #[test]
    fn test_completion_refreshes_backend_state() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");
        touch(dir.path(), "variables/backend/backend_dev.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::SelectVarFile(0));
        session.handle(Event::Modal(ModalKey::Accept));
        session.handle(Event::Modal(ModalKey::Accept));

        session.handle(Event::Command(CommandEvent::Output(OutputLine {
            line: "Initializing the backend...".to_string(),
            is_err: false,
        })));

        // what terraform init would leave behind
        fs::create_dir_all(dir.path().join(".terraform")).unwrap();
        fs::write(
            dir.path().join(".terraform/terraform.tfstate"),
            r#"{"backend":{"type":"local","config":{"path":"states/dev/terraform.tfstate"}}}"#,
        )
        .unwrap();

        session.handle(Event::Command(CommandEvent::Completed(CommandCompleted {
            command: "terraform init".to_string(),
            exit_code: 0,
            output: String::new(),
        })));

        assert!(!session.is_running());
        assert_eq!(session.initialized_env(), Some("dev"));
        assert!(session.projects()[0].is_initialized);
        assert!(session
            .panel()
            .content
            .contains("This environment is currently initialized"));
        assert_eq!(session.panel().output[0], "Initializing the backend...");
        assert!(session.last_command().unwrap().succeeded);
    }

    #[test]
    fn test_failure_is_appended_and_state_still_refreshed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.tf");
        touch(dir.path(), "variables/dev.tfvars");
        touch(dir.path(), "variables/backend/backend_dev.tfvars");

        let mut session = session_for(dir.path());
        session.handle(Event::InitRequested);
        session.handle(Event::Modal(ModalKey::Accept));
        session.handle(Event::Modal(ModalKey::Accept));

        fs::create_dir_all(dir.path().join(".terraform")).unwrap();
        session.handle(Event::Command(CommandEvent::Failed(CommandFailed {
            command: "terraform init".to_string(),
            error: "exited with status 1".to_string(),
            output: "Error: bucket not found\n".to_string(),
        })));

        let output = &session.panel().output;
        assert_eq!(output[0], "Error: bucket not found");
        assert!(output[1].contains("exited with status 1"));
        assert!(session.selection().unwrap().backend_state.is_initialized);
        assert!(!session.last_command().unwrap().succeeded);
        assert!(session.modal().is_none());
    }

    #[test]
    fn test_sso_login_flow() {
        let dir = TempDir::new().unwrap();
        let sessions = vec![
            SsoSession {
                name: "acme".to_string(),
                ..Default::default()
            },
            SsoSession {
                name: "sandbox".to_string(),
                ..Default::default()
            },
        ];
        let mut session =
            Session::new(vec![project_at(dir.path())], Mode::MultiProject).with_sso_sessions(sessions);

        session.handle(Event::SsoLoginRequested);
        session.handle(Event::Modal(ModalKey::Down));
        match session.handle(Event::Modal(ModalKey::Accept)) {
            Some(Intent::RunSsoLogin { session: sso }) => assert_eq!(sso.name, "sandbox"),
            other => panic!("unexpected intent: {other:?}"),
        }
        assert!(session.is_running());

        session.handle(Event::Command(CommandEvent::Completed(CommandCompleted {
            command: "aws sso login --sso-session sandbox".to_string(),
            exit_code: 0,
            output: String::new(),
        })));
        assert!(!session.is_running());
    }

    #[test]
    fn test_sso_login_without_sessions() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(vec![project_at(dir.path())], Mode::MultiProject);
        session.handle(Event::SsoLoginRequested);
        assert!(matches!(session.modal(), Some(Modal::Error { .. })));
    }
}
