//! Dashboard Context
//!
//! Shared signals provided via the Leptos Context API.

use leptos::prelude::*;

/// Dashboard-wide signals provided via context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Trigger to (re)load the collection from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to (re)load the collection from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Add dialog visibility - read
    pub add_modal_open: ReadSignal<bool>,
    /// Add dialog visibility - write
    set_add_modal_open: WriteSignal<bool>,
    /// Edit dialog visibility - read
    pub edit_modal_open: ReadSignal<bool>,
    /// Edit dialog visibility - write
    set_edit_modal_open: WriteSignal<bool>,
}

impl DashboardContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        add_modal_open: (ReadSignal<bool>, WriteSignal<bool>),
        edit_modal_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            add_modal_open: add_modal_open.0,
            set_add_modal_open: add_modal_open.1,
            edit_modal_open: edit_modal_open.0,
            set_edit_modal_open: edit_modal_open.1,
        }
    }

    /// Trigger a fetch of the collection
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Toggle the add dialog
    pub fn toggle_add_modal(&self) {
        self.set_add_modal_open.update(|open| *open = !*open);
    }

    /// Toggle the edit dialog
    pub fn toggle_edit_modal(&self) {
        self.set_edit_modal_open.update(|open| *open = !*open);
    }

    /// Open the edit dialog
    pub fn open_edit_modal(&self) {
        self.set_edit_modal_open.set(true);
    }
}
