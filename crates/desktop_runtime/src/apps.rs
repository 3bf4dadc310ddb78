//! App registry: window defaults per id, the desktop icon layout, and the
//! mount point that turns a window record into app content.

use leptos::*;

use desktop_app_contract::{AppHost, WindowContent, WindowId, WindowPosition, WindowSize};
use system_ui::IconName;

use desktop_app_experience::ExperienceApp;
use desktop_app_explorer::ExplorerApp;
use desktop_app_media_player::MediaPlayerApp;
use desktop_app_notepad::NotepadApp;
use desktop_app_pacman::PacmanApp;
use desktop_app_recycle_bin::RecycleBinApp;
use desktop_app_terminal::TerminalApp;

use crate::components::viewer::DocumentViewer;

/// Window chrome defaults applied when a window opens without overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDefaults {
    pub title: &'static str,
    pub icon: IconName,
    pub position: WindowPosition,
    pub size: WindowSize,
}

/// Registry entry for a known window id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Stable window id, also the app key for content dispatch.
    pub id: &'static str,
    /// Label under the desktop icon. `None` keeps the app off the desktop.
    pub desktop_label: Option<&'static str>,
    pub defaults: WindowDefaults,
}

const fn descriptor(
    id: &'static str,
    desktop_label: Option<&'static str>,
    title: &'static str,
    icon: IconName,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> AppDescriptor {
    AppDescriptor {
        id,
        desktop_label,
        defaults: WindowDefaults {
            title,
            icon,
            position: WindowPosition { x, y },
            size: WindowSize { width, height },
        },
    }
}

/// Every known window id. Order here is desktop icon order.
pub const APP_REGISTRY: &[AppDescriptor] = &[
    descriptor(
        "terminal",
        Some("Terminal"),
        "Terminal",
        IconName::Terminal,
        100,
        100,
        600,
        400,
    ),
    descriptor(
        "notepad",
        Some("Resume.pdf"),
        "Resume",
        IconName::DocumentText,
        150,
        120,
        500,
        600,
    ),
    descriptor(
        "mediaPlayer",
        Some("Media Player"),
        "Media Player",
        IconName::MusicNote,
        250,
        180,
        350,
        500,
    ),
    descriptor(
        "explorer",
        Some("Projects"),
        "File Explorer",
        IconName::ExplorerFolder,
        200,
        150,
        700,
        500,
    ),
    descriptor(
        "pacman",
        Some("Pac-Man"),
        "Pac-Man",
        IconName::Gamepad,
        300,
        100,
        420,
        480,
    ),
    descriptor(
        "recycleBin",
        Some("Recycle Bin"),
        "Recycle Bin",
        IconName::RecycleBin,
        350,
        120,
        600,
        400,
    ),
    descriptor(
        "experience",
        Some("Experience"),
        "Experience",
        IconName::Briefcase,
        400,
        150,
        600,
        500,
    ),
    descriptor(
        "viewer",
        None,
        "Image Viewer",
        IconName::Picture,
        400,
        150,
        600,
        500,
    ),
];

/// Fallback chrome for ids the registry does not know.
pub const GENERIC_DEFAULTS: WindowDefaults = WindowDefaults {
    title: "Window",
    icon: IconName::Launcher,
    position: WindowPosition { x: 50, y: 50 },
    size: WindowSize {
        width: 400,
        height: 300,
    },
};

pub fn descriptor_for(id: &WindowId) -> Option<&'static AppDescriptor> {
    APP_REGISTRY.iter().find(|app| app.id == id.as_str())
}

/// Defaults merged under caller options when a window opens.
pub fn window_defaults(id: &WindowId) -> WindowDefaults {
    descriptor_for(id)
        .map(|app| app.defaults)
        .unwrap_or(GENERIC_DEFAULTS)
}

/// Registry entries that get a desktop icon, in layout order.
pub fn desktop_icon_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    APP_REGISTRY.iter().filter(|app| app.desktop_label.is_some())
}

/// Mounts the content for a window. Viewer documents take precedence over the
/// per-id app so a re-opened viewer shows its swapped document.
pub fn render_window_contents(id: &WindowId, content: &WindowContent, host: AppHost) -> View {
    if let WindowContent::Viewer(doc) = content {
        let doc = doc.clone();
        return view! { <DocumentViewer document=doc host=host/> }.into_view();
    }
    match id.as_str() {
        "terminal" => view! { <TerminalApp host=host/> }.into_view(),
        "notepad" => view! { <NotepadApp host=host/> }.into_view(),
        "mediaPlayer" => view! { <MediaPlayerApp host=host/> }.into_view(),
        "explorer" => view! { <ExplorerApp host=host/> }.into_view(),
        "pacman" => view! { <PacmanApp host=host/> }.into_view(),
        "recycleBin" => view! { <RecycleBinApp host=host/> }.into_view(),
        "experience" => view! { <ExperienceApp host=host/> }.into_view(),
        other => view! {
            <div data-ui-slot="empty-window">{format!("No app registered for '{other}'")}</div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        let mut ids: Vec<&str> = APP_REGISTRY.iter().map(|app| app.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), APP_REGISTRY.len());
    }

    #[test]
    fn known_ids_resolve_their_defaults() {
        let defaults = window_defaults(&WindowId::from("mediaPlayer"));
        assert_eq!(defaults.title, "Media Player");
        assert_eq!(defaults.position, WindowPosition { x: 250, y: 180 });
        assert_eq!(
            defaults.size,
            WindowSize {
                width: 350,
                height: 500
            }
        );
    }

    #[test]
    fn unknown_ids_resolve_generic_defaults() {
        assert_eq!(window_defaults(&WindowId::from("mystery")), GENERIC_DEFAULTS);
    }

    #[test]
    fn viewer_stays_off_the_desktop() {
        let labels: Vec<&str> = desktop_icon_apps()
            .filter_map(|app| app.desktop_label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Terminal",
                "Resume.pdf",
                "Media Player",
                "Projects",
                "Pac-Man",
                "Recycle Bin",
                "Experience",
            ]
        );
        assert!(descriptor_for(&WindowId::from("viewer"))
            .map(|app| app.desktop_label.is_none())
            .unwrap_or(false));
    }
}
