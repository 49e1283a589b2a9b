//! Cross-view selection state (selected team, selected project).
//!
//! A [`SelectionStore`] is backed by a `tokio::sync::watch` channel: readers
//! get the latest value with [`SelectionStore::current`], and subscribers
//! observe every update through [`SelectionStore::subscribe`].

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::types::DbId;

/// The currently selected team and project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub team_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

/// Readable, writable and observable selection container.
pub struct SelectionStore {
    sender: watch::Sender<Selection>,
}

impl SelectionStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Selection::default());
        Self { sender }
    }

    pub fn current(&self) -> Selection {
        *self.sender.borrow()
    }

    pub fn selected_team(&self) -> Option<DbId> {
        self.current().team_id
    }

    pub fn selected_project(&self) -> Option<DbId> {
        self.current().project_id
    }

    /// Select a team. Switching to a different team clears the selected
    /// project, which belongs to the previous team.
    pub fn select_team(&self, team_id: Option<DbId>) {
        self.sender.send_if_modified(|selection| {
            if selection.team_id == team_id {
                return false;
            }
            selection.team_id = team_id;
            selection.project_id = None;
            true
        });
    }

    pub fn select_project(&self, project_id: Option<DbId>) {
        self.sender.send_if_modified(|selection| {
            if selection.project_id == project_id {
                return false;
            }
            selection.project_id = project_id;
            true
        });
    }

    /// Replace the whole selection at once.
    pub fn set(&self, selection: Selection) {
        self.sender.send_if_modified(|current| {
            if *current == selection {
                return false;
            }
            *current = selection;
            true
        });
    }

    /// Reset to an empty selection (session end).
    pub fn clear(&self) {
        self.set(Selection::default());
    }

    /// Receiver that is notified on every change.
    pub fn subscribe(&self) -> watch::Receiver<Selection> {
        self.sender.subscribe()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
