//! Recycle bin app: a gallery of discarded experiments. Restoring them is,
//! by policy, futile.

use leptos::*;

use desktop_app_contract::AppHost;
use system_ui::{Button, ButtonVariant, Icon, IconName, IconSize};

struct DiscardedItem {
    name: &'static str,
    epitaph: &'static str,
    deleted: &'static str,
}

const DISCARDED: &[DiscardedItem] = &[
    DiscardedItem {
        name: "blockchain-todo-app",
        epitaph: "A todo list that needed a consensus algorithm to check off milk.",
        deleted: "2021-03-14",
    },
    DiscardedItem {
        name: "css-only-roguelike",
        epitaph: "Turn-based dungeon crawling with :checked selectors. The dungeon won.",
        deleted: "2021-11-02",
    },
    DiscardedItem {
        name: "ai-standup-bot",
        epitaph: "Generated plausible standup updates. Got me two compliments and one \
                  meeting about honesty.",
        deleted: "2022-06-27",
    },
    DiscardedItem {
        name: "yaml-programming-language",
        epitaph: "Turing complete. Unfortunately.",
        deleted: "2023-01-09",
    },
    DiscardedItem {
        name: "smart-fridge-firmware",
        epitaph: "The fridge now refuses updates. It is the most stable system I own.",
        deleted: "2023-08-30",
    },
];

#[component]
pub fn RecycleBinApp(host: AppHost) -> impl IntoView {
    view! {
        <div class="recycle-bin" data-ui-slot="recycle-bin">
            <p data-ui-slot="bin-summary">
                {format!("{} items - {} regrets", DISCARDED.len(), DISCARDED.len())}
            </p>
            <ul data-ui-slot="bin-items">
                {DISCARDED
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <Icon icon=IconName::RecycleBin size=IconSize::Md/>
                                <div data-ui-slot="bin-item-body">
                                    <span data-ui-slot="bin-item-name">{item.name}</span>
                                    <span data-ui-slot="bin-item-epitaph">{item.epitaph}</span>
                                    <span data-ui-slot="bin-item-date">
                                        {format!("deleted {}", item.deleted)}
                                    </span>
                                </div>
                                <Button
                                    variant=ButtonVariant::Quiet
                                    ui_slot="bin-restore"
                                    title="Some things are better left deleted"
                                    on_click=Callback::new(move |_| host.play_sound("error"))
                                >
                                    "Restore"
                                </Button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
