use chrono::Datelike;

use crate::{
    patch_notes, shell_effects::{self, EffectSettings}, theme_switch, view_composer,
    ShellContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    Navigation,
    Footer,
    Theme,
    PatchNotes,
    Effects,
}

impl BootstrapStep {
    fn label(&self) -> &'static str {
        match self {
            BootstrapStep::Navigation => "navigation",
            BootstrapStep::Footer => "footer",
            BootstrapStep::Effects => "effects",
            BootstrapStep::Theme => "theme",
            BootstrapStep::PatchNotes => "patch notes",
        }
    }
}

/// Runs every page-ready step; a failed step is logged and the rest still run.
pub fn on_document_ready<F>(
    ctx: &ShellContext,
    route: &str,
    current_version: &str,
    log: F,
) -> Vec<BootstrapStep>
where
    F: Fn(&str),
{
    let year = chrono::Local::now().year();
    let steps: [(BootstrapStep, Result<(), String>); 5] = [
        (
            BootstrapStep::Navigation,
            view_composer::compose_navigation(ctx, route),
        ),
        (
            BootstrapStep::Footer,
            view_composer::compose_footer(ctx, year),
        ),
        (
            BootstrapStep::Theme,
            theme_switch::restore_saved_theme(ctx).map(|key| {
                log(&format!("restored theme {key}"));
            }),
        ),
        (
            BootstrapStep::PatchNotes,
            patch_notes::check_and_show_patch_notes(ctx, current_version).map(|outcome| {
                log(&format!("patch notes gate for {current_version}: {outcome:?}"));
            }),
        ),
        // Must follow PatchNotes: the script binds fallbacks and hovers on the modal.
        (
            BootstrapStep::Effects,
            shell_effects::render_effects_script(&EffectSettings::default())
                .and_then(|script| ctx.surface.run_script(&script)),
        ),
    ];

    let mut failed = Vec::new();
    for (step, result) in steps {
        if let Err(error) = result {
            log(&format!("page bootstrap step {} failed: {error}", step.label()));
            failed.push(step);
        }
    }
    failed
}
