/// Where a found-or-created container is inserted into the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Prepend,
    Append,
}

/// A container located by tag and class; created at `placement` when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSpec {
    pub tag: &'static str,
    pub class_name: &'static str,
    pub placement: Placement,
}

impl ContainerSpec {
    pub fn selector(&self) -> String {
        format!("{}.{}", self.tag, self.class_name)
    }
}

/// A transient element appended to the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub id: String,
    pub tag: &'static str,
    pub class_name: String,
    pub styles: Vec<(&'static str, String)>,
    pub content: ElementContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    Text(String),
    Html(String),
}

/// Click on every element matching `selector` invokes `command`.
///
/// When `argument` is set, the named command argument is read from the clicked
/// element's attribute, e.g. `("key", "data-theme")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickBinding {
    pub selector: String,
    pub command: &'static str,
    pub argument: Option<(&'static str, &'static str)>,
}

/// The document operations the shell needs; the webview implementation
/// evaluates them as scripts, tests use an in-memory document.
pub trait DocumentSurface: Send + Sync {
    fn set_root_style_property(&self, name: &str, value: &str) -> Result<(), String>;

    /// Toggles the `active` class on every theme option so only `key` carries it.
    fn mark_active_theme_option(&self, key: &str) -> Result<(), String>;

    /// Finds or creates the container, then overwrites its inner markup.
    fn upsert_container(&self, container: &ContainerSpec, inner_html: &str)
        -> Result<(), String>;

    fn append_element(&self, element: &ElementSpec) -> Result<(), String>;

    fn set_element_class(&self, id: &str, class_name: &str, enabled: bool)
        -> Result<(), String>;

    fn set_element_style(&self, id: &str, property: &str, value: &str) -> Result<(), String>;

    fn remove_element(&self, id: &str) -> Result<(), String>;

    fn bind_click(&self, binding: &ClickBinding) -> Result<(), String>;

    fn run_script(&self, script: &str) -> Result<(), String>;
}
