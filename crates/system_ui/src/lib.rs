//! Shared UI primitive library for the desktop shell and its built-in apps.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS layers. Apps
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopRoot, DesktopWindowLayer, MenuItem, MenuSeparator, MenuSurface, RangeField,
    ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, TerminalLine, TerminalPrompt,
    TerminalSurface, TerminalTranscript, TextTone, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
        DesktopRoot, DesktopWindowLayer, Icon, IconName, IconSize, MenuItem, MenuSeparator,
        MenuSurface, RangeField, ResizeHandle, Taskbar, TaskbarButton, TaskbarSection,
        TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript, TextTone, WindowBody,
        WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
