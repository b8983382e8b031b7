use std::time::Duration;

use serde::Serialize;

use crate::{
    document_surface::{ClickBinding, ElementContent, ElementSpec},
    ShellContext, PREF_LAST_SEEN_VERSION, SITE_LOGO,
};

pub const PATCH_NOTES_OVERLAY_ID: &str = "patch-notes-overlay";
pub const DISMISS_PATCH_NOTES_COMMAND: &str = "shell_dismiss_patch_notes";

const ENTER_DELAY: Duration = Duration::from_millis(10);
const FADE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PatchNote {
    pub version: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub changes: &'static [&'static str],
}

pub const PATCH_NOTES: &[PatchNote] = &[
    PatchNote {
        version: "1.0.3",
        title: "System Update v1.0.3",
        date: "February 7, 2026",
        changes: &[
            "Implemented new automated Patch Notes system.",
            "Fixed critical bug where auto-updates were not triggering correctly.",
            "Enhanced update robustness with automatic restart and install.",
            "Polished modal transitions and UI interactions.",
        ],
    },
    PatchNote {
        version: "1.0.2",
        title: "Aesthetic Refinement v1.0.2",
        date: "February 7, 2026",
        changes: &[
            "Smoothed all bevels and corners for a cleaner look.",
            "Updated status badges to a modern pill-shaped design.",
            "Refined card and button borders for better definition.",
            "Optimized shadows for improved depth and focus.",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchGateOutcome {
    AlreadySeen,
    Shown,
    NoNotesForVersion,
}

/// Semantic comparison when both sides parse, exact match otherwise.
pub fn same_version(left: &str, right: &str) -> bool {
    let (left, right) = (left.trim(), right.trim());
    match (
        semver::Version::parse(left.trim_start_matches('v')),
        semver::Version::parse(right.trim_start_matches('v')),
    ) {
        (Ok(left), Ok(right)) => left == right,
        _ => left == right,
    }
}

pub fn patch_note_for(version: &str) -> Option<&'static PatchNote> {
    PATCH_NOTES
        .iter()
        .find(|note| same_version(note.version, version))
}

/// All notes, newest version first.
pub fn patch_notes_history() -> Vec<&'static PatchNote> {
    let mut notes: Vec<_> = PATCH_NOTES.iter().collect();
    notes.sort_by(|left, right| {
        match (
            semver::Version::parse(left.version),
            semver::Version::parse(right.version),
        ) {
            (Ok(left), Ok(right)) => right.cmp(&left),
            _ => right.version.cmp(left.version),
        }
    });
    notes
}

pub fn render_patch_notes_html(note: &PatchNote) -> String {
    let changes: String = note
        .changes
        .iter()
        .map(|change| format!(r#"<li><span class="patch-bullet">◈</span> {change}</li>"#))
        .collect();

    format!(
        r#"<div class="patch-notes-modal glass-card reveal">
    <div class="patch-notes-header">
        <img src="{logo}" alt="System Logo" class="patch-logo">
        <div class="patch-header-text">
            <h2>{title}</h2>
            <span class="patch-date">{date}</span>
        </div>
    </div>
    <div class="patch-content">
        <h3>Imperial Directives &amp; Updates</h3>
        <ul class="patch-list">{changes}</ul>
    </div>
    <div class="patch-footer">
        <button class="btn-primary patch-close">Understood</button>
    </div>
</div>"#,
        logo = SITE_LOGO,
        title = note.title,
        date = note.date,
        changes = changes,
    )
}

fn render_patch_notes_modal(ctx: &ShellContext, note: &PatchNote) -> Result<(), String> {
    ctx.surface.append_element(&ElementSpec {
        id: PATCH_NOTES_OVERLAY_ID.to_string(),
        tag: "div",
        class_name: "patch-notes-modal-overlay".to_string(),
        styles: Vec::new(),
        content: ElementContent::Html(render_patch_notes_html(note)),
    })?;
    ctx.surface.bind_click(&ClickBinding {
        selector: format!("#{PATCH_NOTES_OVERLAY_ID} .patch-close"),
        command: DISMISS_PATCH_NOTES_COMMAND,
        argument: None,
    })?;

    let surface = ctx.surface.clone();
    ctx.scheduler.schedule(
        ENTER_DELAY,
        Box::new(move || {
            if let Err(error) = surface.set_element_class(PATCH_NOTES_OVERLAY_ID, "active", true) {
                crate::append_desktop_log(&format!("failed to activate patch notes: {error}"));
            }
        }),
    );
    Ok(())
}

/// Shows the current version's notes at most once. The version is recorded as
/// seen even when it has no notes.
pub fn check_and_show_patch_notes(
    ctx: &ShellContext,
    current_version: &str,
) -> Result<PatchGateOutcome, String> {
    let last_seen = ctx.prefs.get(PREF_LAST_SEEN_VERSION);
    if last_seen
        .as_deref()
        .is_some_and(|seen| same_version(seen, current_version))
    {
        return Ok(PatchGateOutcome::AlreadySeen);
    }

    ctx.prefs.set(PREF_LAST_SEEN_VERSION, current_version)?;

    match patch_note_for(current_version) {
        Some(note) => {
            render_patch_notes_modal(ctx, note)?;
            Ok(PatchGateOutcome::Shown)
        }
        None => Ok(PatchGateOutcome::NoNotesForVersion),
    }
}

pub fn dismiss_patch_notes(ctx: &ShellContext) -> Result<(), String> {
    ctx.surface
        .set_element_class(PATCH_NOTES_OVERLAY_ID, "active", false)?;
    ctx.surface
        .set_element_style(PATCH_NOTES_OVERLAY_ID, "opacity", "0")?;
    ctx.surface
        .set_element_style(PATCH_NOTES_OVERLAY_ID, "transform", "translateY(20px)")?;

    let surface = ctx.surface.clone();
    ctx.scheduler.schedule(
        FADE_DELAY,
        Box::new(move || {
            if let Err(error) = surface.remove_element(PATCH_NOTES_OVERLAY_ID) {
                crate::append_desktop_log(&format!("failed to remove patch notes: {error}"));
            }
        }),
    );
    Ok(())
}
