//! UI sound effects.
//!
//! Playback goes through [`SoundService`], which spins up a fresh
//! `HtmlAudioElement` per effect so overlapping clicks do not cut each other
//! off. Playback failures (autoplay policy, missing asset) are logged and
//! swallowed; sound is never load-bearing.

#[cfg(target_arch = "wasm32")]
use leptos::logging;

/// Named UI sound effect, mapped to an asset under `/sounds/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Click,
    DoubleClick,
    Minimize,
    Maximize,
    Close,
    Keypress,
    BootTick,
    Error,
}

impl SoundEffect {
    /// Stable name used by apps issuing
    /// [`desktop_app_contract::ShellCommand::PlaySound`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DoubleClick => "double-click",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Close => "close",
            Self::Keypress => "keypress",
            Self::BootTick => "boot-tick",
            Self::Error => "error",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [SoundEffect; 8] = [
            SoundEffect::Click,
            SoundEffect::DoubleClick,
            SoundEffect::Minimize,
            SoundEffect::Maximize,
            SoundEffect::Close,
            SoundEffect::Keypress,
            SoundEffect::BootTick,
            SoundEffect::Error,
        ];
        ALL.into_iter().find(|effect| effect.name() == name)
    }

    /// Asset path served by the site bundle.
    pub fn asset_path(self) -> String {
        format!("/sounds/{}.mp3", self.name())
    }
}

/// Plays [`SoundEffect`] values through the browser audio element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundService;

impl SoundService {
    pub fn new() -> Self {
        Self
    }

    /// Fire-and-forget playback. Logs and continues on failure.
    pub fn play(&self, effect: SoundEffect) {
        #[cfg(target_arch = "wasm32")]
        {
            match web_sys::HtmlAudioElement::new_with_src(&effect.asset_path()) {
                Ok(audio) => {
                    audio.set_volume(0.4);
                    if let Err(err) = audio.play() {
                        logging::warn!("sound playback rejected for {}: {err:?}", effect.name());
                    }
                }
                Err(err) => {
                    logging::warn!("sound element creation failed for {}: {err:?}", effect.name());
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = effect;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_round_trip_through_from_name() {
        for effect in [
            SoundEffect::Click,
            SoundEffect::DoubleClick,
            SoundEffect::Minimize,
            SoundEffect::Maximize,
            SoundEffect::Close,
            SoundEffect::Keypress,
            SoundEffect::BootTick,
            SoundEffect::Error,
        ] {
            assert_eq!(SoundEffect::from_name(effect.name()), Some(effect));
        }
        assert_eq!(SoundEffect::from_name("fanfare"), None);
    }

    #[test]
    fn asset_paths_live_under_the_sounds_directory() {
        assert_eq!(SoundEffect::Click.asset_path(), "/sounds/click.mp3");
        assert_eq!(
            SoundEffect::DoubleClick.asset_path(),
            "/sounds/double-click.mp3"
        );
    }
}
