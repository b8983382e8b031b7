use tauri::Webview;

use crate::document_surface::{
    ClickBinding, ContainerSpec, DocumentSurface, ElementContent, ElementSpec, Placement,
};

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn scoped(body: String) -> String {
    format!("(() => {{ {body} }})();")
}

fn with_element(id: &str, action: &str) -> String {
    scoped(format!(
        "const element = document.getElementById({}); if (!element) return; {action}",
        js_string(id)
    ))
}

pub fn set_root_style_script(name: &str, value: &str) -> String {
    format!(
        "document.documentElement.style.setProperty({}, {});",
        js_string(name),
        js_string(value)
    )
}

pub fn mark_active_theme_script(key: &str) -> String {
    scoped(format!(
        "const key = {}; document.querySelectorAll('.theme-option').forEach((option) => option.classList.toggle('active', option.getAttribute('data-theme') === key));",
        js_string(key)
    ))
}

pub fn upsert_container_script(container: &ContainerSpec, inner_html: &str) -> String {
    let insert = match container.placement {
        Placement::Prepend => "document.body.prepend(container);",
        Placement::Append => "document.body.appendChild(container);",
    };
    scoped(format!(
        "let container = document.querySelector({selector}); if (!container) {{ container = document.createElement({tag}); container.className = {class_name}; {insert} }} container.innerHTML = {html};",
        selector = js_string(&container.selector()),
        tag = js_string(container.tag),
        class_name = js_string(container.class_name),
        html = js_string(inner_html),
    ))
}

pub fn append_element_script(element: &ElementSpec) -> String {
    let styles: String = element
        .styles
        .iter()
        .map(|(name, value)| {
            format!(
                "element.style.setProperty({}, {});",
                js_string(name),
                js_string(value)
            )
        })
        .collect();
    let content = match &element.content {
        ElementContent::Text(text) => format!("element.textContent = {};", js_string(text)),
        ElementContent::Html(html) => format!("element.innerHTML = {};", js_string(html)),
    };
    scoped(format!(
        "const element = document.createElement({tag}); element.id = {id}; element.className = {class_name}; {styles} {content} document.body.appendChild(element);",
        tag = js_string(element.tag),
        id = js_string(&element.id),
        class_name = js_string(&element.class_name),
    ))
}

pub fn set_element_class_script(id: &str, class_name: &str, enabled: bool) -> String {
    with_element(
        id,
        &format!(
            "element.classList.toggle({}, {enabled});",
            js_string(class_name)
        ),
    )
}

pub fn set_element_style_script(id: &str, property: &str, value: &str) -> String {
    with_element(
        id,
        &format!(
            "element.style.setProperty({}, {});",
            js_string(property),
            js_string(value)
        ),
    )
}

pub fn remove_element_script(id: &str) -> String {
    with_element(id, "element.remove();")
}

pub fn bind_click_script(binding: &ClickBinding) -> String {
    let argument = match binding.argument {
        Some((name, attribute)) => format!(
            "args[{}] = target.getAttribute({});",
            js_string(name),
            js_string(attribute)
        ),
        None => String::new(),
    };
    scoped(format!(
        "document.querySelectorAll({selector}).forEach((target) => target.addEventListener('click', (event) => {{ event.preventDefault(); const core = window.__TAURI__ && window.__TAURI__.core; if (!core) return; const args = {{}}; {argument} core.invoke({command}, args); }}));",
        selector = js_string(&binding.selector),
        command = js_string(binding.command),
    ))
}

/// Applies document operations by evaluating scripts in a live webview.
pub struct WebviewSurface {
    webview: Webview,
}

impl WebviewSurface {
    pub fn new(webview: Webview) -> Self {
        Self { webview }
    }

    fn eval(&self, script: &str) -> Result<(), String> {
        self.webview.eval(script).map_err(|error| {
            format!(
                "Failed to evaluate script in webview {}: {}",
                self.webview.label(),
                error
            )
        })
    }
}

impl DocumentSurface for WebviewSurface {
    fn set_root_style_property(&self, name: &str, value: &str) -> Result<(), String> {
        self.eval(&set_root_style_script(name, value))
    }

    fn mark_active_theme_option(&self, key: &str) -> Result<(), String> {
        self.eval(&mark_active_theme_script(key))
    }

    fn upsert_container(
        &self,
        container: &ContainerSpec,
        inner_html: &str,
    ) -> Result<(), String> {
        self.eval(&upsert_container_script(container, inner_html))
    }

    fn append_element(&self, element: &ElementSpec) -> Result<(), String> {
        self.eval(&append_element_script(element))
    }

    fn set_element_class(&self, id: &str, class_name: &str, enabled: bool) -> Result<(), String> {
        self.eval(&set_element_class_script(id, class_name, enabled))
    }

    fn set_element_style(&self, id: &str, property: &str, value: &str) -> Result<(), String> {
        self.eval(&set_element_style_script(id, property, value))
    }

    fn remove_element(&self, id: &str) -> Result<(), String> {
        self.eval(&remove_element_script(id))
    }

    fn bind_click(&self, binding: &ClickBinding) -> Result<(), String> {
        self.eval(&bind_click_script(binding))
    }

    fn run_script(&self, script: &str) -> Result<(), String> {
        self.eval(script)
    }
}
