use std::collections::HashMap;

use indexmap::IndexMap;

use super::traits::{default_predicate, ListFilter, Predicate, SelectableItem};

/// Состояние кнопки отправки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitControl {
    Idle,
    Sending { attempt: u64 },
    /// Transient error display; cleared only by the matching generation
    Error { generation: u64 },
}

pub const DEFAULT_ERROR_LABEL: &str = "✗ Error";

/// Snapshot of the selection handed to the commit handler
#[derive(Debug, Clone, PartialEq)]
pub struct CommitTicket<T> {
    pub attempt: u64,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitButton {
    pub label: String,
    pub class: &'static str,
    pub disabled: bool,
}

/// Dataset + query + selection. The visible subset is always recomputed from
/// the current filter and never stored.
#[derive(Debug, Clone)]
pub struct SelectableFilteredList<T: SelectableItem> {
    dataset: Vec<T>,
    positions: HashMap<String, usize>,
    filter: ListFilter,
    selection: IndexMap<String, T>,
    predicate: Predicate<T>,
    commit: CommitControl,
    error_label: &'static str,
    next_token: u64,
}

impl<T: SelectableItem> SelectableFilteredList<T> {
    pub fn new(dataset: Vec<T>) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(dataset.len());
        let mut unique: Vec<T> = Vec::with_capacity(dataset.len());
        for item in dataset {
            // First renderable occurrence of an id wins
            if let Some(&pos) = positions.get(item.item_id()) {
                let kept = &mut unique[pos];
                if !kept.is_renderable() && item.is_renderable() {
                    *kept = item;
                } else {
                    log::warn!("duplicate item id `{}` dropped", item.item_id());
                }
                continue;
            }
            positions.insert(item.item_id().to_string(), unique.len());
            unique.push(item);
        }

        Self {
            dataset: unique,
            positions,
            filter: ListFilter::default(),
            selection: IndexMap::new(),
            predicate: default_predicate::<T>,
            commit: CommitControl::Idle,
            error_label: DEFAULT_ERROR_LABEL,
            next_token: 0,
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate<T>) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_error_label(mut self, label: &'static str) -> Self {
        self.error_label = label;
        self
    }

    /// Enables the auxiliary toggle with its initial value.
    pub fn with_auxiliary_filter(mut self, initial: bool) -> Self {
        self.filter.auxiliary = Some(initial);
        self
    }

    // ------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.query = text.into();
    }

    pub fn set_auxiliary_filter(&mut self, flag: bool) {
        self.filter.auxiliary = Some(flag);
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    pub fn item(&self, id: &str) -> Option<&T> {
        self.positions.get(id).map(|&pos| &self.dataset[pos])
    }

    /// Items passing the active filter, in dataset order.
    pub fn visible(&self) -> Vec<&T> {
        self.dataset
            .iter()
            .filter(|item| (self.predicate)(*item, &self.filter))
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.visible()
            .into_iter()
            .map(|item| item.item_id().to_string())
            .collect()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Flips membership of `id`. Returns the new membership, or `None` when the
    /// id is unknown or the item is never rendered.
    pub fn toggle_item(&mut self, id: &str) -> Option<bool> {
        if self.selection.shift_remove(id).is_some() {
            return Some(false);
        }
        let item = self.item(id)?;
        if !item.is_renderable() {
            return None;
        }
        let item = item.clone();
        self.selection.insert(id.to_string(), item);
        Some(true)
    }

    /// Adds every visible item; already selected items keep their position.
    /// Returns how many items were newly added.
    pub fn select_all_visible(&mut self) -> usize {
        let fresh: Vec<T> = self
            .visible()
            .into_iter()
            .filter(|item| !self.selection.contains_key(item.item_id()))
            .cloned()
            .collect();
        let added = fresh.len();
        for item in fresh {
            self.selection.insert(item.item_id().to_string(), item);
        }
        added
    }

    /// Clears the whole selection, hidden items included.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains_key(id)
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_committable(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Selected items in selection order (not dataset order).
    pub fn selected_items(&self) -> Vec<T> {
        self.selection.values().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------

    pub fn commit_control(&self) -> CommitControl {
        self.commit
    }

    /// Starts a commit. `None` when there is nothing to send or the control
    /// is busy (sending or showing an error).
    pub fn begin_commit(&mut self) -> Option<CommitTicket<T>> {
        if self.selection.is_empty() || self.commit != CommitControl::Idle {
            return None;
        }
        let attempt = self.issue_token();
        self.commit = CommitControl::Sending { attempt };
        Some(CommitTicket {
            attempt,
            items: self.selected_items(),
        })
    }

    /// Records the outcome of `ticket`. On failure returns the generation the
    /// error display must be cleared with. The selection is left untouched
    /// either way.
    pub fn finish_commit<E>(
        &mut self,
        ticket: &CommitTicket<T>,
        outcome: &Result<(), E>,
    ) -> Option<u64> {
        if self.commit != (CommitControl::Sending { attempt: ticket.attempt }) {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.commit = CommitControl::Idle;
                None
            }
            Err(_) => {
                let generation = self.issue_token();
                self.commit = CommitControl::Error { generation };
                Some(generation)
            }
        }
    }

    /// Ends the error display if `generation` is still the current one.
    pub fn clear_commit_error(&mut self, generation: u64) -> bool {
        if self.commit == (CommitControl::Error { generation }) {
            self.commit = CommitControl::Idle;
            true
        } else {
            false
        }
    }

    /// Label, class and enabled state derived from the current count.
    pub fn commit_button(&self) -> CommitButton {
        match self.commit {
            CommitControl::Sending { .. } => CommitButton {
                label: "Sending...".to_string(),
                class: "btn btn-primary",
                disabled: true,
            },
            CommitControl::Error { .. } => CommitButton {
                label: self.error_label.to_string(),
                class: "btn btn-error",
                disabled: true,
            },
            CommitControl::Idle => {
                let count = self.selection_count();
                CommitButton {
                    label: format!("Send Selected ({})", count),
                    class: if count > 0 {
                        "btn btn-primary"
                    } else {
                        "btn btn-secondary"
                    },
                    disabled: count == 0,
                }
            }
        }
    }

    fn issue_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }
}
