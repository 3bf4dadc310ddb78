//! Session state for the desktop window manager.
//!
//! Windows are keyed by stable string ids: one record per id, insertion order
//! preserved. There is no stored z-index; stacking is derived per render from
//! insertion order with the active window painted last.

use desktop_app_contract::{WindowContent, WindowId, WindowPosition, WindowSize};
use system_ui::IconName;

/// Height of the fixed top bar in pixels.
pub const TOP_BAR_HEIGHT_PX: i32 = 32;
/// Height of the fixed taskbar in pixels.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: IconName,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub minimized: bool,
    pub content: WindowContent,
    /// Monotonic activation counter, used only to pick the focus fallback when
    /// the active window closes or minimizes.
    pub focus_stamp: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    /// Open windows in insertion order. At most one record per id.
    pub windows: Vec<WindowRecord>,
    /// Currently active window; `None` or a present, non-minimized record.
    pub active_window_id: Option<WindowId>,
    /// Source of `focus_stamp` values; bumps on every activation.
    pub focus_clock: u64,
    pub start_menu_open: bool,
    pub audio_enabled: bool,
}

impl DesktopState {
    /// State for a freshly booted desktop with sound on.
    pub fn booted() -> Self {
        Self {
            audio_enabled: true,
            ..Self::default()
        }
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn is_active(&self, id: &WindowId) -> bool {
        self.active_window_id.as_ref() == Some(id)
    }

    /// Ids to paint, bottom to top: non-minimized records in insertion order
    /// with the active window moved to the end.
    pub fn render_order(&self) -> Vec<WindowId> {
        let mut order: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| !w.minimized && !self.is_active(&w.id))
            .map(|w| w.id.clone())
            .collect();
        if let Some(active) = &self.active_window_id {
            order.push(active.clone());
        }
        order
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
    pub size_start: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str, minimized: bool, focus_stamp: u64) -> WindowRecord {
        WindowRecord {
            id: WindowId::from(id),
            title: id.to_string(),
            icon: IconName::Terminal,
            position: WindowPosition { x: 0, y: 0 },
            size: WindowSize {
                width: 400,
                height: 300,
            },
            minimized,
            content: WindowContent::App,
            focus_stamp,
        }
    }

    #[test]
    fn render_order_paints_active_window_last() {
        let state = DesktopState {
            windows: vec![
                record("terminal", false, 3),
                record("explorer", false, 1),
                record("notepad", false, 2),
            ],
            active_window_id: Some(WindowId::from("terminal")),
            focus_clock: 3,
            ..DesktopState::default()
        };

        assert_eq!(
            state.render_order(),
            vec![
                WindowId::from("explorer"),
                WindowId::from("notepad"),
                WindowId::from("terminal"),
            ]
        );
    }

    #[test]
    fn render_order_skips_minimized_windows() {
        let state = DesktopState {
            windows: vec![record("terminal", false, 2), record("explorer", true, 1)],
            active_window_id: Some(WindowId::from("terminal")),
            focus_clock: 2,
            ..DesktopState::default()
        };

        assert_eq!(state.render_order(), vec![WindowId::from("terminal")]);
    }
}
