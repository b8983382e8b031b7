use crate::{
    notifications::{self, Severity},
    theme_catalog::{self, Theme},
    ShellContext, PREF_SITE_THEME,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeApplyOutcome {
    Applied,
    UnknownTheme,
}

fn write_theme_variables(ctx: &ShellContext, theme: &Theme) -> Result<(), String> {
    for (name, value) in theme.variables {
        ctx.surface.set_root_style_property(name, value)?;
    }
    ctx.surface.mark_active_theme_option(theme.key)
}

/// Applies, persists and announces a theme. Unknown keys change nothing.
pub fn apply_theme(ctx: &ShellContext, key: &str) -> Result<ThemeApplyOutcome, String> {
    let Some(theme) = theme_catalog::resolve_theme(key) else {
        return Ok(ThemeApplyOutcome::UnknownTheme);
    };

    write_theme_variables(ctx, theme)?;
    ctx.prefs.set(PREF_SITE_THEME, theme.key)?;
    notifications::notify(
        ctx,
        &format!("Imperial theme: {} active", theme.name),
        Severity::Success,
    )?;

    Ok(ThemeApplyOutcome::Applied)
}

/// Re-applies the saved theme on page load without persisting or announcing it.
pub fn restore_saved_theme(ctx: &ShellContext) -> Result<&'static str, String> {
    let key = theme_catalog::saved_theme_key(ctx.prefs.as_ref());
    if let Some(theme) = theme_catalog::resolve_theme(key) {
        write_theme_variables(ctx, theme)?;
    }
    Ok(key)
}
