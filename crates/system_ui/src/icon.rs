//! Centralized icon abstraction for the retro desktop shell.
//!
//! This module provides semantic icon identifiers and a single SVG renderer so
//! shell components and apps do not embed raw icon strings or ad-hoc SVG
//! snippets. The catalog uses a subset of Fluent UI System Icons
//! (`@fluentui/svg-icons`, regular 24px) mapped to desktop-shell semantics.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components and launchers.
pub enum IconName {
    /// Terminal launcher icon.
    Terminal,
    /// Text document / resume icon.
    DocumentText,
    /// File explorer folder icon.
    ExplorerFolder,
    /// Media player music note icon.
    MusicNote,
    /// Arcade game launcher icon.
    Gamepad,
    /// Recycle bin icon.
    RecycleBin,
    /// Image/document viewer icon.
    Picture,
    /// Work experience briefcase icon.
    Briefcase,
    /// Start/launcher button glyph.
    Launcher,
    /// Sound enabled icon.
    SpeakerOn,
    /// Sound muted icon.
    SpeakerOff,
    /// Navigation back arrow.
    ArrowLeft,
    /// Navigation forward arrow.
    ArrowRight,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
    /// Shut-down/power glyph.
    Power,
}

impl IconName {
    /// Stable token used for CSS hooks, window records, and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::DocumentText => "document-text",
            Self::ExplorerFolder => "explorer-folder",
            Self::MusicNote => "music-note",
            Self::Gamepad => "gamepad",
            Self::RecycleBin => "recycle-bin",
            Self::Picture => "picture",
            Self::Briefcase => "briefcase",
            Self::Launcher => "launcher",
            Self::SpeakerOn => "speaker-on",
            Self::SpeakerOff => "speaker-off",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::Power => "power",
        }
    }

    /// Resolves a stable token back to its icon, for icon overrides carried
    /// as strings across the app contract boundary.
    pub fn from_token(token: &str) -> Option<Self> {
        const ALL: [IconName; 18] = [
            IconName::Terminal,
            IconName::DocumentText,
            IconName::ExplorerFolder,
            IconName::MusicNote,
            IconName::Gamepad,
            IconName::RecycleBin,
            IconName::Picture,
            IconName::Briefcase,
            IconName::Launcher,
            IconName::SpeakerOn,
            IconName::SpeakerOff,
            IconName::ArrowLeft,
            IconName::ArrowRight,
            IconName::WindowMinimize,
            IconName::WindowMaximize,
            IconName::WindowRestore,
            IconName::Dismiss,
            IconName::Power,
        ];
        ALL.into_iter().find(|icon| icon.token() == token)
    }

    /// Raw SVG body markup for the icon.
    ///
    /// The paths are copied from `@fluentui/svg-icons` regular 24px SVG assets.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Terminal => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75V7h15v-.75c0-.97-.78-1.75-1.75-1.75H6.25ZM4.5 17.75c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V8.5h-15v9.25Zm6.28-6.47a.75.75 0 1 0-1.06-1.06l-3 3c-.3.3-.3.77 0 1.06l3 3a.75.75 0 1 0 1.06-1.06l-2.47-2.47 2.47-2.47Zm2.47 5.22a.75.75 0 0 0 0 1.5h4a.75.75 0 0 0 0-1.5h-4Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::ExplorerFolder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::MusicNote => {
                r#"<path d="M11.5 2.75c0-.5.49-.86.97-.71l6 1.87c.31.1.53.39.53.72v3.12a.75.75 0 0 1-.97.71L13 6.89v9.86A3.75 3.75 0 1 1 11.5 13.7V2.75Zm1.5 2.58 4.5 1.4V5.18L13 3.77v1.56ZM9.75 14.5a2.25 2.25 0 1 0 0 4.5 2.25 2.25 0 0 0 0-4.5Z"/>"#
            }
            Self::Gamepad => {
                r#"<path d="M8.5 5A6.5 6.5 0 0 0 2 11.5v.35l-.46 3.22a3.1 3.1 0 0 0 5.3 2.6L8.9 15.5h6.2l2.06 2.17a3.1 3.1 0 0 0 5.3-2.6l-.46-3.22v-.35A6.5 6.5 0 0 0 15.5 5h-7Zm-5 6.5a5 5 0 0 1 5-5h7a5 5 0 0 1 5 5v.4c0 .04 0 .07.01.1l.47 3.28a1.6 1.6 0 0 1-2.73 1.34l-2.28-2.4a.75.75 0 0 0-.54-.22H8.57a.75.75 0 0 0-.54.23l-2.28 2.4a1.6 1.6 0 0 1-2.73-1.35l.47-3.27a.75.75 0 0 0 0-.11v-.4Zm4.75-3.25c.41 0 .75.34.75.75v.75h.75a.75.75 0 0 1 0 1.5H9v.75a.75.75 0 0 1-1.5 0v-.75h-.75a.75.75 0 0 1 0-1.5h.75V9c0-.41.34-.75.75-.75Zm6.25 1a1 1 0 1 1 2 0 1 1 0 0 1-2 0Zm2 4a1 1 0 1 1 0-2 1 1 0 0 1 0 2Z"/>"#
            }
            Self::RecycleBin => {
                r#"<path d="M12 1.75a3.25 3.25 0 0 1 3.24 3H20a.75.75 0 0 1 0 1.5h-.93l-1.09 12.51A3.75 3.75 0 0 1 14.25 22h-4.5a3.75 3.75 0 0 1-3.73-3.24L4.92 6.25H4a.75.75 0 0 1 0-1.5h4.76a3.25 3.25 0 0 1 3.24-3Zm-1.72 3h3.44a1.75 1.75 0 0 0-3.44 0ZM6.43 6.25l1.08 12.38a2.25 2.25 0 0 0 2.24 1.87h4.5c1.17 0 2.14-.89 2.24-2.05l1.08-12.2H6.43Zm3.82 3a.75.75 0 0 1 .75.75v6.5a.75.75 0 0 1-1.5 0V10c0-.41.34-.75.75-.75Zm3.5 0c.41 0 .75.34.75.75v6.5a.75.75 0 0 1-1.5 0V10c0-.41.34-.75.75-.75Z"/>"#
            }
            Self::Picture => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75v11.5c0 .39-.13.75-.34 1.04l-6.12-6.12a2.75 2.75 0 0 0-3.89 0l-4.65 4.65V6.25Zm1.75 13.25c-.39 0-.75-.13-1.04-.34l4.94-4.94a1.25 1.25 0 0 1 1.77 0l5.89 5.28H6.25Zm9.5-11a1.75 1.75 0 1 0-3.5 0 1.75 1.75 0 0 0 3.5 0Z"/>"#
            }
            Self::Briefcase => {
                r#"<path d="M9 5.25C9 4.01 10 3 11.25 3h1.5C14 3 15 4.01 15 5.25V6h2.75A3.25 3.25 0 0 1 21 9.25v8.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75v-8.5C3 7.45 4.46 6 6.25 6H9v-.75Zm1.5 0V6h3v-.75a.75.75 0 0 0-.75-.75h-1.5a.75.75 0 0 0-.75.75ZM4.5 9.25v2.25h15V9.25c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75ZM19.5 13h-6v.75a.75.75 0 0 1-1.5 0V13h-6v4.75c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V13Z"/>"#
            }
            Self::Launcher => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h2.76L9 20.75V19.5H6.25c-.97 0-1.75-.78-1.75-1.75V8.5h15V9H21V6.26C21 4.45 19.54 3 17.75 3H6.25ZM19.5 7h-15v-.75c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V7Zm-7.25 8.5h3.25v-3.25c0-1.24 1-2.25 2.25-2.25h3c1.24 0 2.25 1 2.25 2.25v7.5c0 1.8-1.46 3.25-3.25 3.25h-7.5C11.01 23 10 22 10 20.75v-3c0-1.24 1-2.25 2.25-2.25ZM17 12.25v3.25h4.5v-3.25a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 0-.75.75Zm-1.5 9.25V17h-3.25a.75.75 0 0 0-.75.75v3c0 .41.34.75.75.75h3.25ZM17 17v4.5h2.75c.97 0 1.75-.78 1.75-1.75V17H17Z"/>"#
            }
            Self::SpeakerOn => {
                r#"<path d="M14.7 3.13c.8-.72 2.05-.15 2.05.92v15.9c0 1.07-1.26 1.64-2.05.92l-4.1-3.68a.75.75 0 0 0-.5-.19H6.25A3.25 3.25 0 0 1 3 13.75v-3.5C3 8.45 4.46 7 6.25 7h3.85c.18 0 .36-.07.5-.19l4.1-3.68Zm.55 1.6L11.6 8.01c-.41.37-.95.58-1.5.58H6.25c-.97 0-1.75.78-1.75 1.75v3.5c0 .97.78 1.75 1.75 1.75h3.85c.55 0 1.09.2 1.5.57l3.65 3.28V4.73Zm3.6 2.42a.75.75 0 0 1 1.05.15 7.72 7.72 0 0 1 0 9.4.75.75 0 1 1-1.2-.9 6.22 6.22 0 0 0 0-7.6.75.75 0 0 1 .15-1.05Zm-1.85 2.6a.75.75 0 0 1 1.02.28 4.26 4.26 0 0 1 0 3.94.75.75 0 1 1-1.32-.72 2.76 2.76 0 0 0 0-2.5.75.75 0 0 1 .3-1Z"/>"#
            }
            Self::SpeakerOff => {
                r#"<path d="M3.28 2.22a.75.75 0 1 0-1.06 1.06l4.95 4.95A3.25 3.25 0 0 0 3 11.25v3.5C3 16.55 4.46 18 6.25 18h3.85c.18 0 .36.07.5.19l4.1 3.68c.8.72 2.05.15 2.05-.92v-4.13l4 4a.75.75 0 0 0 1.06-1.06L3.28 2.22Zm11.97 13.1v4.95l-3.65-3.28a2.25 2.25 0 0 0-1.5-.57H6.25c-.97 0-1.75-.78-1.75-1.75v-3.5c0-.97.78-1.75 1.75-1.75h1.38l7.62 7.63v-1.73ZM16.75 4.05c0-1.07-1.26-1.64-2.05-.92l-2.46 2.2 1.06 1.07 1.95-1.76v5.05l1.5 1.5V4.05Zm2.1 9.54c.36-.5.6-1.04.75-1.6l1.23 1.23c-.2.54-.47 1.06-.81 1.54a.75.75 0 1 1-1.17-.94v-.23Z"/>"#
            }
            Self::ArrowLeft => {
                r#"<path d="M10.73 19.79a.75.75 0 0 0 1.04-1.08l-6.15-5.96h14.63a.75.75 0 0 0 0-1.5H5.62l6.15-5.96a.75.75 0 0 0-1.04-1.08l-7.25 7.02c-.64.62-.64 1.64 0 2.26l7.25 7.02.27-.72-.27.72Z"/>"#
            }
            Self::ArrowRight => {
                r#"<path d="M13.27 4.21a.75.75 0 0 0-1.04 1.08l6.15 5.96H3.75a.75.75 0 0 0 0 1.5h14.63l-6.15 5.96a.75.75 0 0 0 1.04 1.08l7.25-7.02c.64-.62.64-1.64 0-2.26l-7.25-7.02-.27.72.27-.72Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Power => {
                r#"<path d="M12 2.25c.41 0 .75.34.75.75v8a.75.75 0 0 1-1.5 0V3c0-.41.34-.75.75-.75ZM7.35 5.46a.75.75 0 0 0-.86-1.23 9.25 9.25 0 1 0 11.02 0 .75.75 0 0 0-.86 1.23 7.75 7.75 0 1 1-9.3 0Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (menus/taskbar).
    #[default]
    Sm,
    /// 20px medium icon (window chrome / prominent controls).
    Md,
    /// 24px large icon (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an SVG icon from the centralized shell icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_from_token() {
        for icon in [
            IconName::Terminal,
            IconName::MusicNote,
            IconName::RecycleBin,
            IconName::Power,
        ] {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
        }
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        assert_eq!(IconName::from_token("floppy-disk"), None);
    }
}
