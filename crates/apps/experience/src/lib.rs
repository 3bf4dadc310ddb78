//! Experience app: employment timeline with a role-type filter.

use leptos::*;

use desktop_app_contract::AppHost;
use system_ui::{Button, ButtonVariant, Icon, IconName, IconSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleKind {
    FullTime,
    Internship,
}

impl RoleKind {
    const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    kind: RoleKind,
    notes: &'static [&'static str],
}

const TIMELINE: &[Role] = &[
    Role {
        title: "Senior Software Engineer",
        company: "Northwind Logistics",
        period: "2022 - present",
        kind: RoleKind::FullTime,
        notes: &[
            "Lead the realtime tracking platform serving three fulfilment centres.",
            "Moved the ingestion tier to Rust; p99 latency dropped from 900ms to 40ms.",
        ],
    },
    Role {
        title: "Software Engineer",
        company: "Contoso Finance",
        period: "2019 - 2022",
        kind: RoleKind::FullTime,
        notes: &[
            "Built the invoice extraction pipeline processing ~40k documents a month.",
            "Introduced the human review queue that cut misfiled invoices by 80%.",
        ],
    },
    Role {
        title: "Engineering Intern",
        company: "Fabrikam",
        period: "Summer 2018",
        kind: RoleKind::Internship,
        notes: &["Shipped CLI deployment tooling still in use two teams later."],
    },
    Role {
        title: "Engineering Intern",
        company: "Wingtip Toys",
        period: "Summer 2017",
        kind: RoleKind::Internship,
        notes: &["Prototyped the warranty lookup portal during a six-week rotation."],
    },
];

fn visible(filter: Option<RoleKind>) -> Vec<&'static Role> {
    TIMELINE
        .iter()
        .filter(|role| filter.map(|kind| role.kind == kind).unwrap_or(true))
        .collect()
}

#[component]
pub fn ExperienceApp(host: AppHost) -> impl IntoView {
    let filter = create_rw_signal(None::<RoleKind>);

    let filter_button = move |label: &'static str, value: Option<RoleKind>| {
        view! {
            <Button
                variant=ButtonVariant::Quiet
                ui_slot="experience-filter"
                selected=Signal::derive(move || filter.get() == value)
                on_click=Callback::new(move |_| {
                    host.play_sound("click");
                    filter.set(value);
                })
            >
                {label}
            </Button>
        }
    };

    view! {
        <div class="experience" data-ui-slot="experience">
            <div data-ui-slot="experience-toolbar">
                {filter_button("All", None)}
                {filter_button("Full-time", Some(RoleKind::FullTime))}
                {filter_button("Internships", Some(RoleKind::Internship))}
            </div>
            <ol data-ui-slot="experience-timeline">
                {move || {
                    visible(filter.get())
                        .into_iter()
                        .map(|role| {
                            view! {
                                <li data-role-kind=role.kind.label()>
                                    <Icon icon=IconName::Briefcase size=IconSize::Md/>
                                    <div data-ui-slot="role-body">
                                        <span data-ui-slot="role-title">
                                            {format!("{} - {}", role.title, role.company)}
                                        </span>
                                        <span data-ui-slot="role-period">
                                            {format!("{} ({})", role.period, role.kind.label())}
                                        </span>
                                        {role
                                            .notes
                                            .iter()
                                            .map(|note| view! { <p>{*note}</p> })
                                            .collect_view()}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filter_partitions_the_timeline() {
        let full_time = visible(Some(RoleKind::FullTime));
        let internships = visible(Some(RoleKind::Internship));
        assert!(full_time.iter().all(|r| r.kind == RoleKind::FullTime));
        assert!(internships.iter().all(|r| r.kind == RoleKind::Internship));
        assert_eq!(full_time.len() + internships.len(), TIMELINE.len());
        assert_eq!(visible(None).len(), TIMELINE.len());
    }
}
