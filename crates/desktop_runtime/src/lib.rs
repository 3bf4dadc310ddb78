//! Window session manager, boot controller, and desktop shell for the retro
//! portfolio site.
//!
//! The runtime keeps one authoritative [`model::DesktopState`] behind a pure
//! reducer; shell components dispatch [`reducer::DesktopAction`] values and
//! side effects (sound playback, leaving for an external URL) are queued as
//! [`reducer::RuntimeEffect`] intents and drained by the effect executor.

pub mod apps;
pub mod audio;
pub mod boot;
pub mod components;
pub mod model;
pub mod reducer;

mod effect_executor;
mod runtime_context;

pub use audio::SoundEffect;
pub use boot::{BootPhase, BootSequence};
pub use components::RetroDesktop;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
