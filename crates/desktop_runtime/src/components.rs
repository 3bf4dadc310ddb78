//! Desktop shell components.
//!
//! [`RetroDesktop`] is the single public entry: it provides the runtime
//! context, renders the boot screen until the boot sequence completes, then
//! hands the screen to [`DesktopShell`].

use leptos::*;

use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

use crate::{
    model::PointerPosition,
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopProvider},
};

mod boot_screen;
mod context_menu;
mod desktop_icons;
mod taskbar;
mod topbar;
pub(crate) mod viewer;
mod window;

pub use boot_screen::BootScreen;
pub use context_menu::ContextMenu;
pub use desktop_icons::DesktopIcons;
pub use taskbar::Taskbar;
pub use topbar::TopBar;
pub use window::DesktopWindow;

/// Full-page desktop experience: boot gate plus shell.
#[component]
pub fn RetroDesktop() -> impl IntoView {
    view! {
        <DesktopProvider>
            <BootGate/>
        </DesktopProvider>
    }
}

#[component]
fn BootGate() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let complete = Signal::derive(move || runtime.boot.get().is_complete());

    view! {
        <Show when=move || complete.get() fallback=|| view! { <BootScreen/> }>
            <DesktopShell/>
        </Show>
    }
}

/// The desktop surface: top bar, wallpaper, icon grid, window layer, context
/// menu, taskbar. Global pointer handlers route drag and resize sessions.
#[component]
fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatch = runtime.dispatch;

    // Right-click menu anchor, or None while closed. View-local state.
    let context_menu_at = create_rw_signal(None::<PointerPosition>);

    let render_order = Signal::derive(move || runtime.state.get().render_order());

    let on_pointermove = move |ev: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        let pointer = PointerPosition {
            x: ev.client_x(),
            y: ev.client_y(),
        };
        if interaction.dragging.is_some() {
            dispatch.call(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            dispatch.call(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_ev: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            dispatch.call(DesktopAction::EndMove);
        }
        if interaction.resizing.is_some() {
            dispatch.call(DesktopAction::EndResize);
        }
    };

    view! {
        <DesktopRoot
            id="desktop-root"
            on:pointermove=on_pointermove
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on_mousedown=Callback::new(move |_| {
                context_menu_at.set(None);
                if runtime.state.get_untracked().start_menu_open {
                    dispatch.call(DesktopAction::CloseStartMenu);
                }
            })
            on_contextmenu=Callback::new(move |ev: ev::MouseEvent| {
                ev.prevent_default();
                context_menu_at
                    .set(Some(PointerPosition { x: ev.client_x(), y: ev.client_y() }));
            })
        >
            <TopBar/>
            <DesktopBackdrop>
                <DesktopIcons/>
            </DesktopBackdrop>
            <DesktopWindowLayer>
                <For
                    each=move || render_order.get()
                    key=|id| id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id/>
                </For>
            </DesktopWindowLayer>
            <ContextMenu anchor=context_menu_at/>
            <Taskbar/>
        </DesktopRoot>
    }
}
