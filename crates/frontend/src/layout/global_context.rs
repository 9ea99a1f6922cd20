use contracts::modules::ModuleId;
use leptos::prelude::*;

/// Application-wide UI state, provided once at the root.
///
/// `active` is the only piece of navigation state in the app: the
/// module whose page is mounted in the center zone. `left_open` is
/// transient chrome state for the sidebar toggle.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ModuleId>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ModuleId::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Unconditionally overwrites the active module. Re-selecting the
    /// current module is allowed and renders the same page again.
    pub fn select_module(&self, module: ModuleId) {
        log::debug!("select_module: {}", module.key());
        self.active.set(module);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
