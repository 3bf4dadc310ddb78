//! Shared structural, shell, overlay, data-display, and control primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod overlays;
mod shell;

pub use controls::{Button, RangeField};
pub use data_display::{TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard raised action button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone for terminal lines and status text.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary/muted text.
    Secondary,
    /// Accent text.
    Accent,
    /// Success tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger/error tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
