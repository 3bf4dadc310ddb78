//! Desktop launcher icons.

use leptos::*;

use desktop_app_contract::{WindowId, WindowOptions};
use system_ui::{DesktopIconButton, DesktopIconGrid, Icon, IconSize};

use crate::{
    apps, audio::SoundEffect, reducer::DesktopAction, runtime_context::use_desktop_runtime,
};

#[component]
pub fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatch = runtime.dispatch;

    view! {
        <DesktopIconGrid>
            {apps::desktop_icon_apps()
                .map(|app| {
                    let label = app.desktop_label.unwrap_or(app.defaults.title);
                    let id = app.id;
                    view! {
                        <DesktopIconButton
                            title=label
                            aria_label=label
                            // Single click opens; the extra dblclick handler only
                            // adds the chunkier sound for double-click habits.
                            on_click=Callback::new(move |ev: ev::MouseEvent| {
                                ev.stop_propagation();
                                dispatch.call(DesktopAction::OpenWindow {
                                    id: WindowId::from(id),
                                    options: WindowOptions::default(),
                                });
                            })
                            on_dblclick=Callback::new(move |_| {
                                dispatch.call(DesktopAction::PlaySound {
                                    sound: SoundEffect::DoubleClick,
                                });
                            })
                        >
                            <Icon icon=app.defaults.icon size=IconSize::Lg/>
                            <span data-ui-slot="icon-label">{label}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}
