//! File explorer app: browse the project catalog like a directory tree and
//! open write-ups and screenshots in the shared viewer window.

use leptos::*;

use desktop_app_contract::AppHost;
use system_ui::{Button, ButtonVariant, Icon, IconName, IconSize};

mod catalog;
mod nav;

use catalog::{filtered, project, Category};
use nav::{Location, NavHistory};

#[component]
pub fn ExplorerApp(host: AppHost) -> impl IntoView {
    let nav = create_rw_signal(NavHistory::new());
    let filter = create_rw_signal(None::<Category>);

    let location = Signal::derive(move || nav.get().current());
    let breadcrumb = Signal::derive(move || location.get().breadcrumb());
    let can_go_back = Signal::derive(move || nav.get().can_go_back());
    let can_go_forward = Signal::derive(move || nav.get().can_go_forward());

    let go = move |target: Location| {
        host.play_sound("click");
        nav.update(|n| n.push(target));
    };

    let filter_button = move |label: &'static str, value: Option<Category>| {
        view! {
            <Button
                variant=ButtonVariant::Quiet
                ui_slot="explorer-filter"
                selected=Signal::derive(move || filter.get() == value)
                on_click=Callback::new(move |_| filter.set(value))
            >
                {label}
            </Button>
        }
    };

    view! {
        <div class="explorer" data-ui-slot="explorer">
            <div class="explorer-toolbar" data-ui-slot="explorer-toolbar">
                <Button
                    variant=ButtonVariant::Quiet
                    aria_label="Back"
                    disabled=Signal::derive(move || !can_go_back.get())
                    on_click=Callback::new(move |_| {
                        host.play_sound("click");
                        nav.update(|n| {
                            n.back();
                        });
                    })
                >
                    <Icon icon=IconName::ArrowLeft/>
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    aria_label="Forward"
                    disabled=Signal::derive(move || !can_go_forward.get())
                    on_click=Callback::new(move |_| {
                        host.play_sound("click");
                        nav.update(|n| {
                            n.forward();
                        });
                    })
                >
                    <Icon icon=IconName::ArrowRight/>
                </Button>
                <span data-ui-slot="explorer-path">{move || breadcrumb.get()}</span>
                {filter_button("All", None)}
                {filter_button("Work", Some(Category::Work))}
                {filter_button("Personal", Some(Category::Personal))}
            </div>
            <div class="explorer-body" data-ui-slot="explorer-body">
                {move || match location.get() {
                    Location::Root => {
                        filtered(filter.get())
                            .into_iter()
                            .map(|entry| {
                                let name = entry.name;
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        ui_slot="explorer-folder"
                                        title=format!("{} ({})", name, entry.category.label())
                                        on_click=Callback::new(move |_| {
                                            go(Location::Project(name));
                                        })
                                    >
                                        <Icon icon=IconName::ExplorerFolder size=IconSize::Lg/>
                                        <span data-ui-slot="entry-label">{name}</span>
                                    </Button>
                                }
                                    .into_view()
                            })
                            .collect_view()
                    }
                    Location::Project(name) => {
                        match project(name) {
                            Some(found) => {
                                let about = *found;
                                let readme = view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        ui_slot="explorer-file"
                                        on_click=Callback::new(move |_| {
                                            host.open_viewer(about.document());
                                        })
                                    >
                                        <Icon icon=IconName::DocumentText size=IconSize::Lg/>
                                        <span data-ui-slot="entry-label">"About.txt"</span>
                                    </Button>
                                }
                                    .into_view();
                                let shots = found
                                    .screenshots
                                    .iter()
                                    .map(|shot| {
                                        let shot = *shot;
                                        view! {
                                            <Button
                                                variant=ButtonVariant::Quiet
                                                ui_slot="explorer-file"
                                                on_click=Callback::new(move |_| {
                                                    host.open_viewer(shot.document());
                                                })
                                            >
                                                <Icon icon=IconName::Picture size=IconSize::Lg/>
                                                <span data-ui-slot="entry-label">
                                                    {shot.file_name}
                                                </span>
                                            </Button>
                                        }
                                            .into_view()
                                    })
                                    .collect_view();
                                view! {
                                    <>{readme}{shots}</>
                                }
                                    .into_view()
                            }
                            None => view! {
                                <span data-ui-slot="explorer-empty">"Folder not found."</span>
                            }
                                .into_view(),
                        }
                    }
                }}
            </div>
        </div>
    }
}
