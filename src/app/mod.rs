use crate::components::Navbar;
use crate::pages::{CharacterDetailPage, CharactersPage, HomePage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks (the navbar's active link) require a <Router> context.
    view! {
        <Router>
            <Navbar />
            <main class="min-h-screen bg-gray-950 text-white">
                <Routes fallback=|| view! {
                    <div class="pt-40 text-center text-4xl font-bangers text-amber-400">"Not found"</div>
                }>
                    <Route path=path!("characters/:character_id") view=CharacterDetailPage />
                    <Route path=path!("characters") view=CharactersPage />
                    <Route path=path!("") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
