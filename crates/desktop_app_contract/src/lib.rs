//! Shared contract types between the desktop window-manager runtime and the
//! application content providers.
//!
//! Apps never touch session state directly: they receive an [`AppHost`] handle
//! and issue [`ShellCommand`] intents back to the shell (open a window, play a
//! sound, leave for an external URL). The geometry and content vocabulary the
//! session manager stores per window also lives here so app crates can build
//! open requests without depending on the runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback};
use serde::{Deserialize, Serialize};

/// Stable string identifier for an open window.
///
/// Doubles as the selector for which application view renders inside the
/// window and which default chrome/geometry applies. Ids unknown to the
/// defaults table fall back to a generic window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    /// Creates a window id from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-left window coordinate in desktop pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    /// Horizontal offset from the desktop's left edge.
    pub x: i32,
    /// Vertical offset from the desktop's top edge.
    pub y: i32,
}

/// Window extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl WindowSize {
    /// Clamps both dimensions to the given minimums.
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

/// One image entry in a viewer gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image URL.
    pub url: String,
    /// Short caption shown under the image.
    pub caption: String,
}

/// An outbound link attached to a viewer document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    /// Button/link label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// Ad-hoc document payload rendered by the generic viewer window.
///
/// This is the "explicit content override" half of [`WindowContent`]: the
/// explorer opens project write-ups and screenshots through it instead of
/// inventing one window id per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewerDocument {
    /// Document heading.
    pub title: String,
    /// Body paragraphs in display order.
    pub paragraphs: Vec<String>,
    /// Bullet-point highlights.
    pub highlights: Vec<String>,
    /// Screenshot gallery.
    pub gallery: Vec<GalleryImage>,
    /// Technology tags.
    pub tech: Vec<String>,
    /// Optional outbound link.
    pub link: Option<DocumentLink>,
}

/// What a window renders: the default application view selected by its id, or
/// an explicit document override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WindowContent {
    /// Render the application registered for the window's id.
    #[default]
    App,
    /// Render the supplied document in the generic viewer.
    Viewer(ViewerDocument),
}

/// Caller-supplied overrides merged over the per-id window defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WindowOptions {
    /// Title bar / taskbar label override.
    pub title: Option<String>,
    /// Icon token override.
    pub icon_id: Option<String>,
    /// Initial position override.
    pub position: Option<WindowPosition>,
    /// Initial size override.
    pub size: Option<WindowSize>,
    /// Content override; re-opening an existing id with content swaps the
    /// document in place instead of creating a second window.
    pub content: Option<ViewerDocument>,
}

impl WindowOptions {
    /// Options carrying only a content override and title.
    pub fn with_content(title: impl Into<String>, content: ViewerDocument) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content),
            ..Self::default()
        }
    }
}

/// Intents an application view issues back to the desktop shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShellCommand {
    /// Open (or re-activate) a window.
    OpenWindow {
        /// Target window id.
        id: WindowId,
        /// Overrides merged over the per-id defaults.
        options: WindowOptions,
    },
    /// Request playback of a named UI sound effect.
    PlaySound {
        /// Sound effect name.
        sound: String,
    },
    /// Request opening a URL outside the shell.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
}

/// Handle injected into every mounted app view.
///
/// Cheap to copy; wraps the runtime's command callback. No data flows back
/// into the session manager except through these commands.
#[derive(Clone, Copy)]
pub struct AppHost {
    sender: Callback<ShellCommand>,
}

impl AppHost {
    /// Creates a host handle from the runtime command callback.
    pub fn new(sender: Callback<ShellCommand>) -> Self {
        Self { sender }
    }

    /// Opens a window by id with default chrome and content.
    pub fn open_window(&self, id: impl Into<WindowId>) {
        self.sender.call(ShellCommand::OpenWindow {
            id: id.into(),
            options: WindowOptions::default(),
        });
    }

    /// Opens a window by id with explicit overrides.
    pub fn open_window_with(&self, id: impl Into<WindowId>, options: WindowOptions) {
        self.sender.call(ShellCommand::OpenWindow {
            id: id.into(),
            options,
        });
    }

    /// Opens the shared viewer window with a document override.
    pub fn open_viewer(&self, document: ViewerDocument) {
        let title = document.title.clone();
        self.open_window_with("viewer", WindowOptions::with_content(title, document));
    }

    /// Fire-and-forget sound playback.
    pub fn play_sound(&self, sound: impl Into<String>) {
        self.sender.call(ShellCommand::PlaySound {
            sound: sound.into(),
        });
    }

    /// Requests opening an external URL through the host boundary.
    pub fn open_external_url(&self, url: impl Into<String>) {
        self.sender.call(ShellCommand::OpenExternalUrl { url: url.into() });
    }
}

impl From<WindowId> for String {
    fn from(id: WindowId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_clamps_to_minimums() {
        let size = WindowSize {
            width: 100,
            height: 80,
        };
        assert_eq!(
            size.clamped_min(220, 140),
            WindowSize {
                width: 220,
                height: 140
            }
        );
    }

    #[test]
    fn content_options_force_title_and_content() {
        let doc = ViewerDocument {
            title: "Screenshot1.png".to_string(),
            ..ViewerDocument::default()
        };
        let options = WindowOptions::with_content("Screenshot1.png", doc.clone());
        assert_eq!(options.title.as_deref(), Some("Screenshot1.png"));
        assert_eq!(options.content, Some(doc));
        assert_eq!(options.position, None);
    }
}
