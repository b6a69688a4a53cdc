//! Line-oriented rendering of a [`Session`].
//!
//! Lists are numbered from 1 so the interactive prompt can refer to items by
//! index, the same way the rest of the CLI does.

use crate::core::modal::Modal;
use crate::core::session::{Session, ViewMode};
use crate::core::theme::Theme;
use std::fmt::Write;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Full screen: the modal if one is open, otherwise header, sidebar,
    /// panel and status line.
    pub fn render(&self, session: &Session) -> String {
        if let Some(modal) = session.modal() {
            return self.render_modal(modal);
        }

        let mut out = String::new();
        out.push_str(&self.render_header(session));
        out.push('\n');
        out.push_str(&self.render_sidebar(session));
        out.push('\n');
        out.push_str(&self.render_panel(session));
        if !session.status().is_empty() {
            let _ = writeln!(out, "\n{}", self.theme.warning(session.status()));
        }
        out
    }

    pub fn render_header(&self, session: &Session) -> String {
        let t = &self.theme;
        let selection = session.selection();
        let project = selection.map_or("No Project", |s| s.project.name.as_str());
        let var_file = selection.and_then(|s| s.selected_var_file());
        let env = var_file.map_or("No Env", |v| v.env_name.as_str());
        let marker = match (selection, var_file) {
            (Some(s), Some(v)) if s.backend_state.is_env_initialized(&v.env_name) => {
                t.success("✓ Initialized")
            }
            (Some(s), _) if s.backend_state.is_initialized && s.backend_state.detected_env.is_empty() => {
                t.warning("? Initialized (env unknown)")
            }
            _ => t.error("✕ Not Initialized"),
        };

        let mut out = format!(
            "{} {}  {} {}  {}\n",
            t.accent("Project:"),
            t.text(project),
            t.accent("Env:"),
            t.text(env),
            marker
        );
        if let Some(last) = session.last_command() {
            let _ = writeln!(
                out,
                "{}",
                t.muted(&format!(
                    "Last: {} ({})",
                    last.command,
                    last.finished_at.format("%H:%M:%S")
                ))
            );
        }
        out
    }

    pub fn render_sidebar(&self, session: &Session) -> String {
        let t = &self.theme;
        let mut out = String::new();

        match (session.view(), session.selection()) {
            (ViewMode::ProjectDetail, Some(selection)) => {
                let _ = writeln!(out, "{}", t.accent(&format!("Project: {}", selection.project.name)));
                let initialized_env = session.initialized_env();
                for (i, var_file) in selection.var_files.iter().enumerate() {
                    let marker = if Some(var_file.env_name.as_str()) == initialized_env {
                        t.success(" ●")
                    } else {
                        t.muted("")
                    };
                    let name = if selection.selected_var_file == Some(i) {
                        t.highlight(&var_file.env_name)
                    } else {
                        t.text(&var_file.env_name)
                    };
                    let _ = writeln!(out, "{}{}{} {}{}", t.muted("["), i + 1, t.muted("]"), name, marker);
                }
                if selection.var_files.is_empty() {
                    let _ = writeln!(out, "{}", t.muted("No var files found"));
                }
            }
            _ => {
                let _ = writeln!(out, "{}", t.accent("Projects"));
                for (i, project) in session.projects().iter().enumerate() {
                    let marker = if project.is_initialized {
                        t.success(" ●")
                    } else {
                        t.muted("")
                    };
                    let _ = writeln!(
                        out,
                        "{}{}{} {}{}",
                        t.muted("["),
                        i + 1,
                        t.muted("]"),
                        t.text(&project.name),
                        marker
                    );
                }
                if session.projects().is_empty() {
                    let _ = writeln!(out, "{}", t.muted("No Terraform projects found"));
                }
            }
        }
        out
    }

    pub fn render_panel(&self, session: &Session) -> String {
        let t = &self.theme;
        let panel = session.panel();
        let mut out = String::new();

        if !panel.title.is_empty() {
            let _ = writeln!(out, "{}", t.accent(&panel.title));
            let _ = writeln!(out, "{}", t.muted(&"─".repeat(panel.title.chars().count())));
        }
        if !panel.content.is_empty() {
            let _ = writeln!(out, "{}", t.text(&panel.content));
        }
        if !panel.output.is_empty() {
            out.push('\n');
            for line in &panel.output {
                if line.starts_with('!') || line.starts_with('✕') {
                    let _ = writeln!(out, "{}", t.error(line));
                } else {
                    let _ = writeln!(out, "{}", t.muted(line));
                }
            }
        }
        out
    }

    /// Title and message of `modal` without its items or buttons; the
    /// interactive prompt draws those itself.
    pub fn render_modal_heading(&self, modal: &Modal) -> String {
        let t = &self.theme;
        let title = modal.title();
        let rule = t.muted(&"─".repeat(title.chars().count().max(20)));
        let title = match modal {
            Modal::Error { .. } => t.error(title),
            _ => t.accent(title),
        };

        let mut out = format!("{title}\n{rule}\n");
        let message = match modal {
            Modal::Confirm { message, .. } | Modal::Select { message, .. } | Modal::Error { message, .. } => message,
        };
        if !message.is_empty() {
            let _ = writeln!(out, "{}", t.text(message));
        }
        out
    }

    pub fn render_modal(&self, modal: &Modal) -> String {
        let t = &self.theme;
        let mut out = self.render_modal_heading(modal);
        out.push('\n');

        match modal {
            Modal::Confirm { .. } => {
                let _ = writeln!(out, "{}  {}", t.success("[y] Yes"), t.error("[n] No"));
            }
            Modal::Select {
                selected, choice, ..
            } => {
                for (i, label) in choice.labels().iter().enumerate() {
                    let cursor = if i == *selected { "›" } else { " " };
                    let _ = writeln!(out, "{} {}{}{} {}", cursor, t.muted("["), i + 1, t.muted("]"), label);
                }
                let _ = writeln!(out, "\n{}  {}", t.success("[enter] Select"), t.error("[esc] Cancel"));
            }
            Modal::Error { error_text, .. } => {
                let _ = writeln!(out, "{}\n", t.text(error_text));
                let _ = writeln!(out, "{}", t.error("[enter] OK"));
            }
        }
        out
    }
}
