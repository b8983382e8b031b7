use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::{atomic::AtomicU64, Arc, Mutex},
    time::Duration,
};

use crate::{
    document_surface::{ClickBinding, ContainerSpec, DocumentSurface, ElementContent, ElementSpec},
    preferences::PreferenceStore,
    scheduler::{ScheduledTask, Scheduler},
    ShellContext,
};

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn with_values(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        {
            let mut values = store.values.lock().expect("prefs lock");
            for (name, value) in pairs {
                values.insert((*name).to_string(), (*value).to_string());
            }
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values.lock().expect("prefs lock").get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) -> Result<(), String> {
        self.values
            .lock()
            .expect("prefs lock")
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    pub tag: &'static str,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub content: ElementContent,
}

#[derive(Debug, Default)]
struct DocumentState {
    root_styles: BTreeMap<String, String>,
    active_theme_option: Option<String>,
    containers: Vec<(String, String)>,
    elements: BTreeMap<String, MemoryElement>,
    bindings: Vec<ClickBinding>,
    scripts: Vec<String>,
    journal: Vec<String>,
}

/// Records document operations so tests can inspect the resulting page.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentState>,
}

impl MemoryDocument {
    pub fn root_styles(&self) -> BTreeMap<String, String> {
        self.state.lock().expect("document lock").root_styles.clone()
    }

    pub fn active_theme_option(&self) -> Option<String> {
        self.state
            .lock()
            .expect("document lock")
            .active_theme_option
            .clone()
    }

    pub fn container_count(&self, selector: &str) -> usize {
        self.state
            .lock()
            .expect("document lock")
            .containers
            .iter()
            .filter(|(existing, _)| existing == selector)
            .count()
    }

    pub fn container_html(&self, selector: &str) -> Option<String> {
        self.state
            .lock()
            .expect("document lock")
            .containers
            .iter()
            .find(|(existing, _)| existing == selector)
            .map(|(_, html)| html.clone())
    }

    pub fn container_order(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("document lock")
            .containers
            .iter()
            .map(|(selector, _)| selector.clone())
            .collect()
    }

    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        self.state
            .lock()
            .expect("document lock")
            .elements
            .get(id)
            .cloned()
    }

    pub fn element_ids_with_class(&self, class_name: &str) -> Vec<String> {
        self.state
            .lock()
            .expect("document lock")
            .elements
            .iter()
            .filter(|(_, element)| element.classes.contains(class_name))
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn element_count(&self) -> usize {
        self.state.lock().expect("document lock").elements.len()
    }

    pub fn bindings(&self) -> Vec<ClickBinding> {
        self.state.lock().expect("document lock").bindings.clone()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.state.lock().expect("document lock").scripts.clone()
    }

    /// Element appends and script runs, in call order.
    pub fn journal(&self) -> Vec<String> {
        self.state.lock().expect("document lock").journal.clone()
    }
}

impl DocumentSurface for MemoryDocument {
    fn set_root_style_property(&self, name: &str, value: &str) -> Result<(), String> {
        self.state
            .lock()
            .expect("document lock")
            .root_styles
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn mark_active_theme_option(&self, key: &str) -> Result<(), String> {
        self.state.lock().expect("document lock").active_theme_option = Some(key.to_string());
        Ok(())
    }

    fn upsert_container(
        &self,
        container: &ContainerSpec,
        inner_html: &str,
    ) -> Result<(), String> {
        let selector = container.selector();
        let mut state = self.state.lock().expect("document lock");
        if let Some(existing) = state
            .containers
            .iter_mut()
            .find(|(existing, _)| *existing == selector)
        {
            existing.1 = inner_html.to_string();
            return Ok(());
        }

        let entry = (selector, inner_html.to_string());
        match container.placement {
            crate::document_surface::Placement::Prepend => state.containers.insert(0, entry),
            crate::document_surface::Placement::Append => state.containers.push(entry),
        }
        Ok(())
    }

    fn append_element(&self, element: &ElementSpec) -> Result<(), String> {
        let mut state = self.state.lock().expect("document lock");
        if state.elements.contains_key(&element.id) {
            return Err(format!("duplicate element id {}", element.id));
        }
        state.journal.push(format!("append:{}", element.id));
        state.elements.insert(
            element.id.clone(),
            MemoryElement {
                tag: element.tag,
                classes: element
                    .class_name
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
                styles: element
                    .styles
                    .iter()
                    .map(|(name, value)| ((*name).to_string(), value.clone()))
                    .collect(),
                content: element.content.clone(),
            },
        );
        Ok(())
    }

    fn set_element_class(&self, id: &str, class_name: &str, enabled: bool) -> Result<(), String> {
        let mut state = self.state.lock().expect("document lock");
        if let Some(element) = state.elements.get_mut(id) {
            if enabled {
                element.classes.insert(class_name.to_string());
            } else {
                element.classes.remove(class_name);
            }
        }
        Ok(())
    }

    fn set_element_style(&self, id: &str, property: &str, value: &str) -> Result<(), String> {
        let mut state = self.state.lock().expect("document lock");
        if let Some(element) = state.elements.get_mut(id) {
            element
                .styles
                .insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove_element(&self, id: &str) -> Result<(), String> {
        self.state.lock().expect("document lock").elements.remove(id);
        Ok(())
    }

    fn bind_click(&self, binding: &ClickBinding) -> Result<(), String> {
        self.state
            .lock()
            .expect("document lock")
            .bindings
            .push(binding.clone());
        Ok(())
    }

    fn run_script(&self, script: &str) -> Result<(), String> {
        let mut state = self.state.lock().expect("document lock");
        state.journal.push("script".to_string());
        state.scripts.push(script.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    sequence: u64,
    pending: Vec<(Duration, u64, ScheduledTask)>,
}

/// Virtual-time scheduler; tasks only run inside `advance`.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ClockState>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.state.lock().expect("clock lock").pending.len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.state.lock().expect("clock lock").now + by;
        loop {
            let next_task = {
                let mut state = self.state.lock().expect("clock lock");
                let next_index = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, sequence, _))| (*due, *sequence))
                    .map(|(index, _)| index);
                next_index.map(|index| {
                    let (due, _, task) = state.pending.remove(index);
                    state.now = due;
                    task
                })
            };
            match next_task {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.lock().expect("clock lock").now = target;
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        let mut state = self.state.lock().expect("clock lock");
        let due = state.now + delay;
        let sequence = state.sequence;
        state.sequence += 1;
        state.pending.push((due, sequence, task));
    }
}

pub struct ShellHarness {
    pub prefs: Arc<MemoryPreferenceStore>,
    pub document: Arc<MemoryDocument>,
    pub clock: Arc<ManualScheduler>,
    pub ctx: ShellContext,
}

impl ShellHarness {
    pub fn new() -> Self {
        Self::with_prefs(&[])
    }

    pub fn with_prefs(pairs: &[(&str, &str)]) -> Self {
        let prefs = Arc::new(MemoryPreferenceStore::with_values(pairs));
        let document = Arc::new(MemoryDocument::default());
        let clock = Arc::new(ManualScheduler::default());
        let ctx = ShellContext::new(
            prefs.clone(),
            document.clone(),
            clock.clone(),
            Arc::new(AtomicU64::new(0)),
        );
        Self {
            prefs,
            document,
            clock,
            ctx,
        }
    }
}
