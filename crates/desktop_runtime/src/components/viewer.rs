//! Generic document viewer for explorer-opened project write-ups and
//! screenshots.

use leptos::*;

use desktop_app_contract::{AppHost, ViewerDocument};
use system_ui::{Button, ButtonVariant};

#[component]
pub fn DocumentViewer(document: ViewerDocument, host: AppHost) -> impl IntoView {
    let link = document.link.clone();

    view! {
        <article class="viewer" data-ui-slot="viewer-document">
            <h1 data-ui-slot="viewer-title">{document.title.clone()}</h1>
            {document
                .paragraphs
                .iter()
                .map(|paragraph| view! { <p>{paragraph.clone()}</p> })
                .collect_view()}
            <Show when={let has = !document.highlights.is_empty(); move || has} fallback=|| ()>
                <ul data-ui-slot="viewer-highlights">
                    {document
                        .highlights
                        .iter()
                        .map(|highlight| view! { <li>{highlight.clone()}</li> })
                        .collect_view()}
                </ul>
            </Show>
            <div class="viewer-gallery" data-ui-slot="viewer-gallery">
                {document
                    .gallery
                    .iter()
                    .map(|image| {
                        view! {
                            <figure>
                                <img src=image.url.clone() alt=image.caption.clone()/>
                                <figcaption>{image.caption.clone()}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="viewer-tech" data-ui-slot="viewer-tech">
                {document
                    .tech
                    .iter()
                    .map(|tag| view! { <span data-ui-slot="tech-tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>
            {link
                .map(|link| {
                    let url = link.url.clone();
                    view! {
                        <Button
                            variant=ButtonVariant::Primary
                            ui_slot="viewer-link"
                            on_click=Callback::new(move |_| host.open_external_url(url.clone()))
                        >
                            {link.label.clone()}
                        </Button>
                    }
                })}
        </article>
    }
}
