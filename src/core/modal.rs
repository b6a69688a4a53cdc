//! Modal overlays and the decisions they stand for.
//!
//! A modal never carries behaviour. Each one holds a tagged pending action
//! ([`PendingAction`] for confirmations, [`PendingChoice`] for selections)
//! that the session interprets once the user answers.

use crate::core::aws::SsoSession;
use crate::core::models::BackendVarFile;

/// What confirming a [`Modal::Confirm`] does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// The selected environment is not initialized; start the init flow.
    OfferInit { env_name: String },
    /// Run `terraform init` for `env_name` with `backend`.
    ConfirmInit {
        env_name: String,
        backend: BackendVarFile,
    },
}

/// What picking an item of a [`Modal::Select`] means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingChoice {
    InitEnvironment { env_names: Vec<String> },
    Backend {
        env_name: String,
        candidates: Vec<BackendVarFile>,
    },
    SsoSession { sessions: Vec<SsoSession> },
}

impl PendingChoice {
    /// Labels shown for each item, in order.
    pub fn labels(&self) -> Vec<String> {
        match self {
            PendingChoice::InitEnvironment { env_names } => env_names.clone(),
            PendingChoice::Backend { candidates, .. } => {
                candidates.iter().map(BackendVarFile::choice_label).collect()
            }
            PendingChoice::SsoSession { sessions } => {
                sessions.iter().map(|s| s.name.clone()).collect()
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PendingChoice::InitEnvironment { env_names } => env_names.len(),
            PendingChoice::Backend { candidates, .. } => candidates.len(),
            PendingChoice::SsoSession { sessions } => sessions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Confirm {
        title: String,
        message: String,
        action: PendingAction,
    },
    Select {
        title: String,
        message: String,
        selected: usize,
        choice: PendingChoice,
    },
    Error {
        title: String,
        message: String,
        error_text: String,
    },
}

/// Input a modal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Up,
    Down,
    /// `y` / Enter
    Accept,
    /// `n` / Esc
    Dismiss,
}

/// Result of feeding a key to a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    /// Modal stays open.
    Open,
    /// Modal closed without a decision.
    Closed,
    Confirmed(PendingAction),
    Declined(PendingAction),
    Selected { choice: PendingChoice, index: usize },
}

impl Modal {
    pub fn title(&self) -> &str {
        match self {
            Modal::Confirm { title, .. } | Modal::Select { title, .. } | Modal::Error { title, .. } => {
                title
            }
        }
    }

    /// Applies a key. Movement keys mutate the selection in place; any
    /// closing outcome means the caller must drop this modal.
    pub fn handle_key(&mut self, key: ModalKey) -> ModalOutcome {
        match self {
            Modal::Confirm { action, .. } => match key {
                ModalKey::Accept => ModalOutcome::Confirmed(action.clone()),
                ModalKey::Dismiss => ModalOutcome::Declined(action.clone()),
                ModalKey::Up | ModalKey::Down => ModalOutcome::Open,
            },
            Modal::Select {
                selected, choice, ..
            } => match key {
                ModalKey::Up => {
                    *selected = selected.saturating_sub(1);
                    ModalOutcome::Open
                }
                ModalKey::Down => {
                    if *selected + 1 < choice.len() {
                        *selected += 1;
                    }
                    ModalOutcome::Open
                }
                ModalKey::Accept if choice.is_empty() => ModalOutcome::Open,
                ModalKey::Accept => ModalOutcome::Selected {
                    choice: choice.clone(),
                    index: *selected,
                },
                ModalKey::Dismiss => ModalOutcome::Closed,
            },
            Modal::Error { .. } => match key {
                ModalKey::Accept | ModalKey::Dismiss => ModalOutcome::Closed,
                ModalKey::Up | ModalKey::Down => ModalOutcome::Open,
            },
        }
    }
}
