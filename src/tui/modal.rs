use crate::bridge::{BackAction, HostBridge};
use crate::io::kv_store::{KeyValueStore, StorageError};
use crate::model::task::{Category, NewTask, Priority, parse_date};
use crate::ops::actions::{self, INVALID_DATE_ALERT};
use crate::ops::task_ops::TaskStore;

use super::text_input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Title,
    Description,
    Date,
    Priority,
    Category,
}

impl Field {
    pub const ORDER: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Date,
        Field::Priority,
        Field::Category,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Notes",
            Field::Date => "Due",
            Field::Priority => "Priority",
            Field::Category => "Category",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, Field::Title | Field::Description | Field::Date)
    }

    fn index(self) -> usize {
        Field::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Field::ORDER[(self.index() + 1) % Field::ORDER.len()]
    }

    pub fn prev(self) -> Field {
        Field::ORDER[(self.index() + Field::ORDER.len() - 1) % Field::ORDER.len()]
    }
}

/// The new-task overlay: closed or open, plus the form it shows.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    state: ModalState,
    pub focus: Field,
    pub title: TextInput,
    pub desc: TextInput,
    pub date: TextInput,
    pub priority: Priority,
    pub category: Category,
}

impl Modal {
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Show the overlay with the title focused and hook the back button
    pub fn open(&mut self, bridge: &mut dyn HostBridge) {
        if self.is_open() {
            return;
        }
        self.state = ModalState::Open;
        self.focus = Field::Title;
        let back = bridge.back_button();
        back.show();
        back.on_click(BackAction::CloseModal);
    }

    /// Hide the overlay and release the back button
    pub fn close(&mut self, bridge: &mut dyn HostBridge) {
        if !self.is_open() {
            return;
        }
        self.state = ModalState::Closed;
        let back = bridge.back_button();
        back.hide();
        back.off_click(BackAction::CloseModal);
    }

    /// Text input for the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Field::Title => Some(&mut self.title),
            Field::Description => Some(&mut self.desc),
            Field::Date => Some(&mut self.date),
            Field::Priority | Field::Category => None,
        }
    }

    /// Step the focused choice field forward (`true`) or back
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.focus {
            Field::Priority => {
                self.priority = if forward {
                    self.priority.next()
                } else {
                    self.priority.prev()
                };
            }
            Field::Category => {
                let choices = Category::BUILT_IN;
                let idx = choices.iter().position(|c| *c == self.category);
                let len = choices.len();
                let next = match (idx, forward) {
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                    (None, _) => 0,
                };
                self.category = choices[next].clone();
            }
            _ => {}
        }
    }

    /// Read the form and create the task. On success the title and notes
    /// are cleared and the overlay closes; on a validation failure the
    /// host alerts and the overlay stays open.
    pub fn submit_create<S: KeyValueStore>(
        &mut self,
        store: &mut TaskStore<S>,
        bridge: &mut dyn HostBridge,
    ) -> Result<Option<u64>, StorageError> {
        if !self.is_open() {
            return Ok(None);
        }
        let date = match parse_date(self.date.text()) {
            Ok(d) => d,
            Err(_) => {
                bridge.show_alert(INVALID_DATE_ALERT);
                self.focus = Field::Date;
                return Ok(None);
            }
        };
        let new = NewTask {
            title: self.title.text().to_string(),
            desc: self.desc.text().to_string(),
            date,
            priority: self.priority,
            category: self.category.clone(),
        };
        let created = actions::create_task(store, bridge, new)?;
        match created {
            Some(_) => {
                self.title.clear();
                self.desc.clear();
                self.close(bridge);
            }
            None => self.focus = Field::Title,
        }
        Ok(created)
    }
}
