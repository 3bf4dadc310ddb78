//! Notepad app: the resume, rendered as a plain text document.

use leptos::*;

use desktop_app_contract::AppHost;
use system_ui::{Button, ButtonVariant, Icon, IconName};

const RESUME_PDF_URL: &str = "/documents/resume.pdf";

struct ResumeSection {
    heading: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

const RESUME: &[ResumeSection] = &[
    ResumeSection {
        heading: "Experience",
        entries: &[
            (
                "Senior Software Engineer, Northwind Logistics (2022 - present)",
                "Own the realtime tracking platform: Rust services, event ingestion, and \
                 the dashboards the warehouse floor runs on.",
            ),
            (
                "Software Engineer, Contoso Finance (2019 - 2022)",
                "Built the invoice ingestion pipeline and its human review tooling; \
                 reduced manual entry by eighty percent.",
            ),
            (
                "Engineering Intern, Fabrikam (2018)",
                "Shipped internal CLI tooling for the deployment team.",
            ),
        ],
    },
    ResumeSection {
        heading: "Education",
        entries: &[(
            "BSc Computer Science, State University (2015 - 2019)",
            "Focus on systems programming and distributed computing.",
        )],
    },
    ResumeSection {
        heading: "Skills",
        entries: &[(
            "Rust, TypeScript, Python, SQL",
            "Leptos, Axum, PostgreSQL, Redis, WebAssembly, Linux, Docker.",
        )],
    },
];

#[component]
pub fn NotepadApp(host: AppHost) -> impl IntoView {
    view! {
        <div class="notepad" data-ui-slot="notepad">
            <div class="notepad-toolbar" data-ui-slot="notepad-toolbar">
                <Button
                    variant=ButtonVariant::Primary
                    ui_slot="notepad-download"
                    leading_icon=IconName::DocumentText
                    on_click=Callback::new(move |_| host.open_external_url(RESUME_PDF_URL))
                >
                    "Download PDF"
                </Button>
            </div>
            <article class="notepad-document" data-ui-slot="notepad-document">
                <h1>"Sam Carter"</h1>
                <p data-ui-slot="notepad-tagline">
                    "Software engineer. I build fast, reliable systems and the occasional \
                     fake operating system."
                </p>
                {RESUME
                    .iter()
                    .map(|section| {
                        view! {
                            <section>
                                <h2>{section.heading}</h2>
                                {section
                                    .entries
                                    .iter()
                                    .map(|(title, body)| {
                                        view! {
                                            <h3>{*title}</h3>
                                            <p>{*body}</p>
                                        }
                                    })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()}
                <p data-ui-slot="notepad-footer">
                    <Icon icon=IconName::DocumentText/>
                    " resume.txt - 3 sections - read only"
                </p>
            </article>
        </div>
    }
}
