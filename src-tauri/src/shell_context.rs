use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{document_surface::DocumentSurface, preferences::PreferenceStore, scheduler::Scheduler};

/// Everything a shell operation touches, passed in explicitly.
#[derive(Clone)]
pub struct ShellContext {
    pub prefs: Arc<dyn PreferenceStore>,
    pub surface: Arc<dyn DocumentSurface>,
    pub scheduler: Arc<dyn Scheduler>,
    element_ids: Arc<AtomicU64>,
}

impl ShellContext {
    pub fn new(
        prefs: Arc<dyn PreferenceStore>,
        surface: Arc<dyn DocumentSurface>,
        scheduler: Arc<dyn Scheduler>,
        element_ids: Arc<AtomicU64>,
    ) -> Self {
        Self {
            prefs,
            surface,
            scheduler,
            element_ids,
        }
    }

    pub fn next_element_id(&self, prefix: &str) -> String {
        let sequence = self.element_ids.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{sequence}")
    }
}
