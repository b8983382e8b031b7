use std::{str::FromStr, time::Duration};

use crate::{
    document_surface::{ElementContent, ElementSpec},
    ShellContext,
};

pub const ENTER_DELAY: Duration = Duration::from_millis(100);
pub const HOLD_DURATION: Duration = Duration::from_millis(3000);
pub const EXIT_TRANSITION: Duration = Duration::from_millis(400);

const HIDDEN_TRANSFORM: &str = "translateY(100px)";
const SHOWN_TRANSFORM: &str = "translateY(0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(format!("Unsupported notification severity '{other}'.")),
        }
    }
}

fn notification_element(id: String, message: &str, severity: Severity) -> ElementSpec {
    ElementSpec {
        id,
        tag: "div",
        class_name: format!("message {}", severity.as_str()),
        styles: vec![
            ("position", "fixed".to_string()),
            ("bottom", "30px".to_string()),
            ("right", "30px".to_string()),
            ("padding", "15px 25px".to_string()),
            ("z-index", "10001".to_string()),
            ("transform", HIDDEN_TRANSFORM.to_string()),
            ("opacity", "0".to_string()),
            (
                "transition",
                "all 0.4s cubic-bezier(0.175, 0.885, 0.32, 1.275)".to_string(),
            ),
        ],
        content: ElementContent::Text(message.to_string()),
    }
}

fn log_timer_error(result: Result<(), String>) {
    if let Err(error) = result {
        crate::append_desktop_log(&format!("notification transition failed: {error}"));
    }
}

/// Shows a transient message: enter, hold, exit, remove. Calls are never coalesced.
pub fn notify(ctx: &ShellContext, message: &str, severity: Severity) -> Result<String, String> {
    let id = ctx.next_element_id("shell-notification");
    ctx.surface
        .append_element(&notification_element(id.clone(), message, severity))?;

    let surface = ctx.surface.clone();
    let enter_id = id.clone();
    ctx.scheduler.schedule(
        ENTER_DELAY,
        Box::new(move || {
            log_timer_error(
                surface
                    .set_element_style(&enter_id, "transform", SHOWN_TRANSFORM)
                    .and_then(|()| surface.set_element_style(&enter_id, "opacity", "1")),
            );
        }),
    );

    let surface = ctx.surface.clone();
    let scheduler = ctx.scheduler.clone();
    let exit_id = id.clone();
    ctx.scheduler.schedule(
        HOLD_DURATION,
        Box::new(move || {
            log_timer_error(
                surface
                    .set_element_style(&exit_id, "transform", HIDDEN_TRANSFORM)
                    .and_then(|()| surface.set_element_style(&exit_id, "opacity", "0")),
            );
            scheduler.schedule(
                EXIT_TRANSITION,
                Box::new(move || log_timer_error(surface.remove_element(&exit_id))),
            );
        }),
    );

    Ok(id)
}
