use crate::{
    document_surface::{ClickBinding, ContainerSpec, Placement},
    theme_catalog::THEMES,
    ShellContext, MAIN_DOCUMENT, SITE_LOGO,
};

pub const APPLY_THEME_COMMAND: &str = "shell_apply_theme";

pub const NAV_CONTAINER: ContainerSpec = ContainerSpec {
    tag: "header",
    class_name: "main-nav-container",
    placement: Placement::Prepend,
};

pub const SYSTEM_CONTROLS_CONTAINER: ContainerSpec = ContainerSpec {
    tag: "div",
    class_name: "system-controls",
    placement: Placement::Append,
};

pub const FOOTER_CONTAINER: ContainerSpec = ContainerSpec {
    tag: "div",
    class_name: "footer-container",
    placement: Placement::Append,
};

const NAV_LINKS_BEFORE_REGULATIONS: &[(&str, &str)] =
    &[("index.html", "Home"), ("uniforms.html", "Uniforms")];

const NAV_LINKS_AFTER_REGULATIONS: &[(&str, &str)] = &[
    ("awards.html", "Awards"),
    ("recipients.html", "Recipients"),
    ("commission.html", "Pricing"),
    ("orders.html", "Orders"),
];

const REGULATION_LINKS: &[(&str, &str)] = &[
    ("uniform-regulations.html", "Overview"),
    ("faces-regulations.html", "Face Regulations"),
    ("hairs-regulations.html", "Hair Regulations"),
    ("ranks-regulations.html", "Rank Insignias"),
    ("dress-orders.html", "Orders of Dress"),
    ("non-ceremonial-regulations.html", "Non-Ceremonial"),
];

const FOOTER_NAVIGATION_LINKS: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("uniforms.html", "Uniforms"),
    ("uniform-regulations.html", "Regulations"),
    ("awards.html", "Awards"),
];

const FOOTER_RESOURCE_LINKS: &[(&str, &str)] =
    &[("orders.html", "Orders"), ("commission.html", "Pricing")];

pub const HQ_PROFILE_URL: &str =
    "https://www.roblox.com/users/8310005469/profile?friendshipSourceType=PlayerSearch";

/// Last path segment of the current location, `index.html` for the root.
pub fn route_from_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => MAIN_DOCUMENT.to_string(),
    }
}

fn active_class(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}

fn render_route_links(links: &[(&str, &str)], route: &str) -> String {
    links
        .iter()
        .map(|(href, label)| {
            format!(
                r#"<a href="{href}" class="{}"><span>{label}</span></a>"#,
                active_class(*href == route)
            )
        })
        .collect()
}

fn render_plain_links(links: &[(&str, &str)]) -> String {
    links
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect()
}

pub fn render_navigation(route: &str) -> String {
    format!(
        r#"<nav class="main-nav">
    <a href="{home}" class="nav-brand">
        <img src="{logo}" alt="Logo">
        <span>Quartermaster Store</span>
    </a>
    <div class="nav-controls">
        <button class="nav-toggle" aria-label="Toggle navigation">
            <span class="hamburger"></span>
        </button>
    </div>
    <div class="nav-links">
        {before}
        <div class="nav-dropdown">
            <a href="uniform-regulations.html" class="{regulations_active}"><span>Regulations</span></a>
            <div class="dropdown-content">{regulations}</div>
        </div>
        {after}
    </div>
</nav>"#,
        home = MAIN_DOCUMENT,
        logo = SITE_LOGO,
        before = render_route_links(NAV_LINKS_BEFORE_REGULATIONS, route),
        regulations_active = active_class(route.contains("regulations")),
        regulations = render_plain_links(REGULATION_LINKS),
        after = render_route_links(NAV_LINKS_AFTER_REGULATIONS, route),
    )
}

pub fn render_system_controls() -> String {
    let options: String = THEMES
        .iter()
        .map(|theme| {
            format!(
                r#"<div class="theme-option" data-theme="{key}" style="--theme-preview: {preview};"><span class="theme-name">{name}</span></div>"#,
                key = theme.key,
                preview = theme.preview,
                name = theme.name,
            )
        })
        .collect();

    format!(
        r#"<div class="theme-selector-wrapper">
    <button class="theme-trigger" aria-label="System Themes">
        <span class="theme-trigger-icon">🏛️</span>
    </button>
    <div class="theme-dropdown">
        <div class="theme-header">System Aesthetics</div>
        {options}
    </div>
</div>"#
    )
}

pub fn render_footer(year: i32) -> String {
    format!(
        r#"<footer class="footer">
    <div class="footer-content">
        <div class="footer-profile">
            <div class="profile-card">
                <img src="{logo}" alt="Quartermaster" class="profile-img">
                <div class="profile-info">
                    <div class="profile-name">Quartermaster</div>
                    <div class="profile-handle">Official System</div>
                    <div class="status-badge"><span class="status-dot"></span>Operational</div>
                </div>
            </div>
        </div>
        <div class="footer-info">
            <h4>Quartermaster Store</h4>
            <p>The premier destination for British Army elite uniforms and equipment. Managed by the Unknown's Quartermaster Corps.</p>
            <p class="copyright">&copy; {year} Quartermaster Store. Approved for use by TruSnooze.</p>
        </div>
        <div class="footer-links">
            <div class="footer-link-group">
                <h4>Navigation</h4>
                {navigation}
            </div>
            <div class="footer-link-group">
                <h4>Resources</h4>
                {resources}
                <a href="{profile}" class="external-link" data-external-url="{profile}">HQ Profile</a>
            </div>
        </div>
    </div>
</footer>"#,
        logo = SITE_LOGO,
        year = year,
        navigation = render_plain_links(FOOTER_NAVIGATION_LINKS),
        resources = render_plain_links(FOOTER_RESOURCE_LINKS),
        profile = HQ_PROFILE_URL,
    )
}

pub fn compose_navigation(ctx: &ShellContext, route: &str) -> Result<(), String> {
    ctx.surface
        .upsert_container(&NAV_CONTAINER, &render_navigation(route))?;
    ctx.surface
        .upsert_container(&SYSTEM_CONTROLS_CONTAINER, &render_system_controls())?;
    ctx.surface.bind_click(&ClickBinding {
        selector: format!("{} .theme-option", SYSTEM_CONTROLS_CONTAINER.selector()),
        command: APPLY_THEME_COMMAND,
        argument: Some(("key", "data-theme")),
    })
}

pub fn compose_footer(ctx: &ShellContext, year: i32) -> Result<(), String> {
    ctx.surface
        .upsert_container(&FOOTER_CONTAINER, &render_footer(year))?;
    ctx.surface.bind_click(&ClickBinding {
        selector: format!("{} a.external-link", FOOTER_CONTAINER.selector()),
        command: crate::shell_commands::OPEN_EXTERNAL_URL_COMMAND,
        argument: Some(("url", "data-external-url")),
    })
}
