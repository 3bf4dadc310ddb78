use desktop_runtime::RetroDesktop;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Yet another portfolio" />
        <Meta name="description" content="A retro desktop-style portfolio site." />

        <main class="site-root">
            <RetroDesktop />
        </main>
    }
}
