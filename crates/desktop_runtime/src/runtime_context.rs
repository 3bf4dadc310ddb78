//! Reactive wiring: the shared runtime context and the dispatch boundary
//! between components and the reducer.

use leptos::*;

use crate::{
    boot::BootSequence,
    effect_executor,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

/// Shared handles for the desktop session. `Copy` so components can capture it
/// in event closures freely.
#[derive(Clone, Copy)]
pub struct DesktopRuntimeContext {
    /// Authoritative window session state.
    pub state: RwSignal<DesktopState>,
    /// Transient pointer sessions (drag, resize).
    pub interaction: RwSignal<InteractionState>,
    /// Boot sequence, gating the desktop shell.
    pub boot: RwSignal<BootSequence>,
    /// Queue of side-effect intents awaiting the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer entry point for components.
    pub dispatch: Callback<DesktopAction>,
}

/// Provides [`DesktopRuntimeContext`] to the subtree and runs the effect
/// executor over the queued [`RuntimeEffect`] intents.
#[component]
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(DesktopState::booted());
    let interaction = create_rw_signal(InteractionState::default());
    let boot = create_rw_signal(BootSequence::new());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let previous_state = state.get_untracked();
        let previous_interaction = interaction.get_untracked();
        let mut next_state = previous_state.clone();
        let mut next_interaction = previous_interaction.clone();

        match reduce_desktop(&mut next_state, &mut next_interaction, action) {
            Ok(emitted) => {
                if next_state != previous_state {
                    state.set(next_state);
                }
                if next_interaction != previous_interaction {
                    interaction.set(next_interaction);
                }
                if !emitted.is_empty() {
                    effects.update(|queue| queue.extend(emitted));
                }
            }
            Err(err) => {
                logging::warn!("desktop action rejected: {err}");
            }
        }
    });

    let context = DesktopRuntimeContext {
        state,
        interaction,
        boot,
        effects,
        dispatch,
    };
    provide_context(context);
    effect_executor::run(context);

    children()
}

/// Pulls the runtime context provided by [`DesktopProvider`].
///
/// # Panics
///
/// Panics when called outside a `DesktopProvider` subtree; that is a wiring
/// bug, not a runtime condition.
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
