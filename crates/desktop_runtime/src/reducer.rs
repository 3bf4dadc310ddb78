//! Reducer actions, side-effect intents, and transition logic for the window
//! session manager.

use thiserror::Error;

use desktop_app_contract::{
    ShellCommand, WindowContent, WindowId, WindowOptions, WindowPosition, WindowSize,
};
use system_ui::IconName;

use crate::{
    apps,
    audio::SoundEffect,
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession,
        WindowRecord,
    },
};

const MIN_WINDOW_WIDTH: i32 = 220;
const MIN_WINDOW_HEIGHT: i32 = 140;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window by id, or re-activate it if already open.
    OpenWindow {
        /// Target window id; also selects the per-id defaults.
        id: WindowId,
        /// Caller overrides merged over the defaults.
        options: WindowOptions,
    },
    /// Remove a window record entirely.
    CloseWindow {
        /// Window to close.
        id: WindowId,
    },
    /// Hide a window from the desktop surface, keeping its record and geometry.
    MinimizeWindow {
        /// Window to minimize.
        id: WindowId,
    },
    /// Make a window the single active window, restoring it if minimized.
    ActivateWindow {
        /// Window to activate.
        id: WindowId,
    },
    /// Write a window's top-left position.
    UpdateWindowPosition {
        /// Window to move.
        id: WindowId,
        /// New top-left coordinate.
        position: WindowPosition,
    },
    /// Write a window's extent.
    UpdateWindowSize {
        /// Window to resize.
        id: WindowId,
        /// New extent, clamped to the shell minimum.
        size: WindowSize,
    },
    /// Taskbar button policy: minimize when active, otherwise activate.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        id: WindowId,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from an edge or corner.
    BeginResize {
        /// Window being resized.
        id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Enable or disable UI sound playback.
    SetAudioEnabled {
        /// Whether sounds should play.
        enabled: bool,
    },
    /// Request playback of a named UI sound effect.
    PlaySound {
        /// Effect to play.
        sound: SoundEffect,
    },
    /// Apply a command issued by a mounted app view.
    HandleAppCommand {
        /// Command from the app's [`desktop_app_contract::AppHost`].
        command: ShellCommand,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to
/// execute outside the reducer.
pub enum RuntimeEffect {
    /// Play a named UI sound effect.
    PlaySound(SoundEffect),
    /// Open an external URL (for app actions that leave the shell).
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the session state and collects resulting
/// side effects.
///
/// This function is the authoritative state transition engine for desktop
/// window management. Mutators that reference a missing id fail without
/// touching state; the dispatch boundary logs the error and moves on.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window
/// that is not present.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { id, options } => {
            open_window(state, id, options);
            state.start_menu_open = false;
            push_sound(state, &mut effects, SoundEffect::Click);
        }
        DesktopAction::CloseWindow { id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound);
            }
            if state.is_active(&id) || state.active_window_id.is_none() {
                state.active_window_id = focus_fallback(state);
            }
            push_sound(state, &mut effects, SoundEffect::Close);
        }
        DesktopAction::MinimizeWindow { id } => {
            let window = find_window_mut(state, &id)?;
            window.minimized = true;
            if state.is_active(&id) {
                state.active_window_id = focus_fallback(state);
            }
            push_sound(state, &mut effects, SoundEffect::Minimize);
        }
        DesktopAction::ActivateWindow { id } => {
            activate_window(state, &id)?;
        }
        DesktopAction::UpdateWindowPosition { id, position } => {
            find_window_mut(state, &id)?.position = position;
        }
        DesktopAction::UpdateWindowSize { id, size } => {
            find_window_mut(state, &id)?.size =
                size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        }
        DesktopAction::ToggleTaskbarWindow { id } => {
            if state.window(&id).is_none() {
                return Err(ReducerError::WindowNotFound);
            }
            if state.is_active(&id) {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::MinimizeWindow { id },
                )?);
            } else {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::ActivateWindow { id },
                )?);
                push_sound(state, &mut effects, SoundEffect::Click);
            }
        }
        DesktopAction::BeginMove { id, pointer } => {
            let position_start = find_window_mut(state, &id)?.position;
            activate_window(state, &id)?;
            interaction.dragging = Some(DragSession {
                window_id: id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let position = WindowPosition {
                    x: session.position_start.x + dx,
                    y: session.position_start.y + dy,
                };
                find_window_mut(state, &session.window_id.clone())?.position = position;
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize { id, edge, pointer } => {
            let window = find_window_mut(state, &id)?;
            let position_start = window.position;
            let size_start = window.size;
            activate_window(state, &id)?;
            interaction.resizing = Some(ResizeSession {
                window_id: id,
                edge,
                pointer_start: pointer,
                position_start,
                size_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let (position, size) = resize_geometry(session, dx, dy);
                let window = find_window_mut(state, &session.window_id.clone())?;
                window.position = position;
                window.size = size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
            push_sound(state, &mut effects, SoundEffect::Click);
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SetAudioEnabled { enabled } => {
            state.audio_enabled = enabled;
        }
        DesktopAction::PlaySound { sound } => {
            push_sound(state, &mut effects, sound);
        }
        DesktopAction::HandleAppCommand { command } => match command {
            ShellCommand::OpenWindow { id, options } => {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::OpenWindow { id, options },
                )?);
            }
            ShellCommand::PlaySound { sound } => {
                if let Some(sound) = SoundEffect::from_name(&sound) {
                    push_sound(state, &mut effects, sound);
                }
            }
            ShellCommand::OpenExternalUrl { url } => {
                effects.push(RuntimeEffect::OpenExternalUrl(url));
            }
        },
    }

    debug_assert!(active_window_is_valid(state));
    Ok(effects)
}

/// Opens a fresh window from the per-id defaults, or re-activates an existing
/// record. Re-opening with a content override swaps the document in place
/// instead of creating a second window.
fn open_window(state: &mut DesktopState, id: WindowId, options: WindowOptions) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
        if let Some(doc) = options.content {
            if let Some(title) = options.title {
                window.title = title;
            }
            window.content = WindowContent::Viewer(doc);
        }
        // Present id: activation only, geometry untouched.
        let _ = activate_window(state, &id);
        return;
    }

    let defaults = apps::window_defaults(&id);
    let record = WindowRecord {
        id: id.clone(),
        title: options.title.unwrap_or_else(|| defaults.title.to_string()),
        icon: options
            .icon_id
            .as_deref()
            .and_then(IconName::from_token)
            .unwrap_or(defaults.icon),
        position: options.position.unwrap_or(defaults.position),
        size: options
            .size
            .unwrap_or(defaults.size)
            .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        minimized: false,
        content: options
            .content
            .map(WindowContent::Viewer)
            .unwrap_or_default(),
        focus_stamp: 0,
    };
    state.windows.push(record);
    let _ = activate_window(state, &id);
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    id: &WindowId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.id == id)
        .ok_or(ReducerError::WindowNotFound)
}

fn activate_window(state: &mut DesktopState, id: &WindowId) -> Result<(), ReducerError> {
    let stamp = state.focus_clock + 1;
    let window = find_window_mut(state, id)?;
    window.minimized = false;
    window.focus_stamp = stamp;
    state.focus_clock = stamp;
    state.active_window_id = Some(id.clone());
    Ok(())
}

/// Focus fallback when the active window goes away: the remaining
/// non-minimized record that was activated most recently, else none.
fn focus_fallback(state: &DesktopState) -> Option<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .max_by_key(|w| w.focus_stamp)
        .map(|w| w.id.clone())
}

fn push_sound(state: &DesktopState, effects: &mut Vec<RuntimeEffect>, sound: SoundEffect) {
    if state.audio_enabled {
        effects.push(RuntimeEffect::PlaySound(sound));
    }
}

fn active_window_is_valid(state: &DesktopState) -> bool {
    match &state.active_window_id {
        None => true,
        Some(id) => state.window(id).map(|w| !w.minimized).unwrap_or(false),
    }
}

fn resize_geometry(session: &ResizeSession, dx: i32, dy: i32) -> (WindowPosition, WindowSize) {
    let p = session.position_start;
    let s = session.size_start;
    match session.edge {
        ResizeEdge::East => (
            p,
            WindowSize {
                width: s.width + dx,
                ..s
            },
        ),
        ResizeEdge::West => (
            WindowPosition { x: p.x + dx, ..p },
            WindowSize {
                width: s.width - dx,
                ..s
            },
        ),
        ResizeEdge::South => (
            p,
            WindowSize {
                height: s.height + dy,
                ..s
            },
        ),
        ResizeEdge::North => (
            WindowPosition { y: p.y + dy, ..p },
            WindowSize {
                height: s.height - dy,
                ..s
            },
        ),
        ResizeEdge::NorthEast => (
            WindowPosition { y: p.y + dy, ..p },
            WindowSize {
                width: s.width + dx,
                height: s.height - dy,
            },
        ),
        ResizeEdge::NorthWest => (
            WindowPosition {
                x: p.x + dx,
                y: p.y + dy,
            },
            WindowSize {
                width: s.width - dx,
                height: s.height - dy,
            },
        ),
        ResizeEdge::SouthEast => (
            p,
            WindowSize {
                width: s.width + dx,
                height: s.height + dy,
            },
        ),
        ResizeEdge::SouthWest => (
            WindowPosition { x: p.x + dx, ..p },
            WindowSize {
                width: s.width - dx,
                height: s.height + dy,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use desktop_app_contract::ViewerDocument;

    use super::*;

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, id: &str) {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow {
                id: WindowId::from(id),
                options: WindowOptions::default(),
            },
        )
        .expect("open window");
    }

    fn fresh() -> (DesktopState, InteractionState) {
        (DesktopState::booted(), InteractionState::default())
    }

    #[test]
    fn open_window_uses_per_id_defaults_and_activates() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");

        let window = state.window(&WindowId::from("terminal")).unwrap();
        assert_eq!(window.title, "Terminal");
        assert_eq!(window.position, WindowPosition { x: 100, y: 100 });
        assert_eq!(
            window.size,
            WindowSize {
                width: 600,
                height: 400
            }
        );
        assert!(!window.minimized);
        assert_eq!(window.content, WindowContent::App);
        assert_eq!(state.active_window_id, Some(WindowId::from("terminal")));
    }

    #[test]
    fn open_unknown_id_falls_back_to_generic_defaults() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "mystery");

        let window = state.window(&WindowId::from("mystery")).unwrap();
        assert_eq!(window.title, "Window");
        assert_eq!(window.position, WindowPosition { x: 50, y: 50 });
        assert_eq!(
            window.size,
            WindowSize {
                width: 400,
                height: 300
            }
        );
    }

    #[test]
    fn open_merges_caller_overrides_over_defaults() {
        let (mut state, mut interaction) = fresh();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                id: WindowId::from("terminal"),
                options: WindowOptions {
                    title: Some("Shell".to_string()),
                    position: Some(WindowPosition { x: 10, y: 20 }),
                    ..WindowOptions::default()
                },
            },
        )
        .unwrap();

        let window = state.window(&WindowId::from("terminal")).unwrap();
        assert_eq!(window.title, "Shell");
        assert_eq!(window.position, WindowPosition { x: 10, y: 20 });
        // Size still comes from the defaults table.
        assert_eq!(window.size.width, 600);
    }

    #[test]
    fn reopening_existing_id_activates_without_duplicating() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        open(&mut state, &mut interaction, "explorer");
        open(&mut state, &mut interaction, "terminal");

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.active_window_id, Some(WindowId::from("terminal")));
        // Insertion order is unchanged by re-activation.
        assert_eq!(state.windows[0].id, WindowId::from("terminal"));
        assert_eq!(state.windows[1].id, WindowId::from("explorer"));
    }

    #[test]
    fn reopening_with_content_swaps_document_in_place() {
        let (mut state, mut interaction) = fresh();

        let first = ViewerDocument {
            title: "Screenshot1.png".to_string(),
            ..ViewerDocument::default()
        };
        let second = ViewerDocument {
            title: "Screenshot2.png".to_string(),
            ..ViewerDocument::default()
        };

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                id: WindowId::from("viewer"),
                options: WindowOptions::with_content("Screenshot1.png", first),
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                id: WindowId::from("viewer"),
                options: WindowOptions::with_content("Screenshot2.png", second.clone()),
            },
        )
        .unwrap();

        assert_eq!(state.windows.len(), 1);
        let window = state.window(&WindowId::from("viewer")).unwrap();
        assert_eq!(window.title, "Screenshot2.png");
        assert_eq!(window.content, WindowContent::Viewer(second));
    }

    #[test]
    fn reopening_minimized_window_restores_it() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                id: WindowId::from("terminal"),
            },
        )
        .unwrap();
        open(&mut state, &mut interaction, "terminal");

        let window = state.window(&WindowId::from("terminal")).unwrap();
        assert!(!window.minimized);
        assert_eq!(state.active_window_id, Some(WindowId::from("terminal")));
    }

    #[test]
    fn minimize_is_idempotent_and_keeps_geometry() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        let before = state.window(&WindowId::from("terminal")).unwrap().clone();

        for _ in 0..2 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MinimizeWindow {
                    id: WindowId::from("terminal"),
                },
            )
            .unwrap();
        }

        let window = state.window(&WindowId::from("terminal")).unwrap();
        assert!(window.minimized);
        assert_eq!(window.position, before.position);
        assert_eq!(window.size, before.size);
        assert_eq!(state.active_window_id, None);
    }

    #[test]
    fn closing_active_window_falls_back_to_most_recently_activated() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        open(&mut state, &mut interaction, "explorer");
        open(&mut state, &mut interaction, "notepad");
        // Re-activate terminal so it outranks explorer despite insertion order.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateWindow {
                id: WindowId::from("terminal"),
            },
        )
        .unwrap();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                id: WindowId::from("terminal"),
            },
        )
        .unwrap();

        assert_eq!(state.active_window_id, Some(WindowId::from("notepad")));
    }

    #[test]
    fn session_scenario_minimized_survivor_leaves_no_active_window() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        open(&mut state, &mut interaction, "explorer");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                id: WindowId::from("explorer"),
            },
        )
        .unwrap();

        assert_eq!(state.active_window_id, Some(WindowId::from("terminal")));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                id: WindowId::from("terminal"),
            },
        )
        .unwrap();

        assert_eq!(state.windows.len(), 1);
        let survivor = state.window(&WindowId::from("explorer")).unwrap();
        assert!(survivor.minimized);
        assert_eq!(state.active_window_id, None);
    }

    #[test]
    fn mutating_missing_window_fails_without_touching_state() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        let before = state.clone();

        for action in [
            DesktopAction::CloseWindow {
                id: WindowId::from("ghost"),
            },
            DesktopAction::MinimizeWindow {
                id: WindowId::from("ghost"),
            },
            DesktopAction::ActivateWindow {
                id: WindowId::from("ghost"),
            },
            DesktopAction::UpdateWindowPosition {
                id: WindowId::from("ghost"),
                position: WindowPosition { x: 1, y: 1 },
            },
        ] {
            let result = reduce_desktop(&mut state, &mut interaction, action);
            assert_eq!(result, Err(ReducerError::WindowNotFound));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn geometry_updates_do_not_change_activation_or_minimized_state() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        open(&mut state, &mut interaction, "explorer");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowPosition {
                id: WindowId::from("terminal"),
                position: WindowPosition { x: 5, y: 5 },
            },
        )
        .unwrap();

        assert_eq!(state.active_window_id, Some(WindowId::from("explorer")));
        assert_eq!(
            state.window(&WindowId::from("terminal")).unwrap().position,
            WindowPosition { x: 5, y: 5 }
        );
    }

    #[test]
    fn update_size_clamps_to_shell_minimum() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowSize {
                id: WindowId::from("terminal"),
                size: WindowSize {
                    width: 10,
                    height: 10,
                },
            },
        )
        .unwrap();

        assert_eq!(
            state.window(&WindowId::from("terminal")).unwrap().size,
            WindowSize {
                width: 220,
                height: 140
            }
        );
    }

    #[test]
    fn taskbar_toggle_minimizes_active_and_activates_inactive() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                id: WindowId::from("terminal"),
            },
        )
        .unwrap();
        assert!(state.window(&WindowId::from("terminal")).unwrap().minimized);
        assert_eq!(state.active_window_id, None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                id: WindowId::from("terminal"),
            },
        )
        .unwrap();
        assert!(!state.window(&WindowId::from("terminal")).unwrap().minimized);
        assert_eq!(state.active_window_id, Some(WindowId::from("terminal")));
    }

    #[test]
    fn dragging_applies_pointer_delta_from_session_origin() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                id: WindowId::from("terminal"),
                pointer: PointerPosition { x: 10, y: 10 },
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 60 },
            },
        )
        .unwrap();

        assert_eq!(
            state.window(&WindowId::from("terminal")).unwrap().position,
            WindowPosition { x: 125, y: 150 }
        );

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).unwrap();
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resizing_from_west_edge_moves_origin_and_clamps() {
        let (mut state, mut interaction) = fresh();

        open(&mut state, &mut interaction, "terminal");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                id: WindowId::from("terminal"),
                edge: ResizeEdge::West,
                pointer: PointerPosition { x: 100, y: 100 },
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 150, y: 100 },
            },
        )
        .unwrap();

        let window = state.window(&WindowId::from("terminal")).unwrap();
        assert_eq!(window.position.x, 150);
        assert_eq!(window.size.width, 550);

        // Dragging far past the opposite edge clamps at the minimum width.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 900, y: 100 },
            },
        )
        .unwrap();
        assert_eq!(
            state.window(&WindowId::from("terminal")).unwrap().size.width,
            220
        );
    }

    #[test]
    fn sounds_are_suppressed_when_audio_disabled() {
        let (mut state, mut interaction) = fresh();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetAudioEnabled { enabled: false },
        )
        .unwrap();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                id: WindowId::from("terminal"),
                options: WindowOptions::default(),
            },
        )
        .unwrap();

        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn app_command_open_window_routes_through_open_semantics() {
        let (mut state, mut interaction) = fresh();

        let doc = ViewerDocument {
            title: "Project".to_string(),
            ..ViewerDocument::default()
        };
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: ShellCommand::OpenWindow {
                    id: WindowId::from("viewer"),
                    options: WindowOptions::with_content("Project", doc.clone()),
                },
            },
        )
        .unwrap();

        let window = state.window(&WindowId::from("viewer")).unwrap();
        assert_eq!(window.content, WindowContent::Viewer(doc));
        assert_eq!(state.active_window_id, Some(WindowId::from("viewer")));
    }

    #[test]
    fn app_command_external_url_becomes_effect() {
        let (mut state, mut interaction) = fresh();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                command: ShellCommand::OpenExternalUrl {
                    url: "https://example.com/resume.pdf".to_string(),
                },
            },
        )
        .unwrap();

        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://example.com/resume.pdf".to_string()
            )]
        );
    }
}
