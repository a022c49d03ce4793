use crate::components::ui::{Alert, AlertTitle, Button, CardGrid, Input, Spinner};
use crate::components::{CharacterCard, CollectionFooter, FeaturedCharacterCard, FilterBar};
use crate::models::{Gender, Race};
use crate::state::{AppContext, CollectionDisplay, CollectionState, PAGE_SIZE};
use crate::util::normalize_search_query;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CharactersPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let state: RwSignal<CollectionState> = RwSignal::new(CollectionState::new());
    let search_text: RwSignal<String> = RwSignal::new(String::new());

    // Only the page index drives fetching; filter and search changes must not.
    let current_page = Memo::new(move |_| state.with(|s| s.current_page));
    let total_pages = Memo::new(move |_| state.with(|s| s.total_pages));

    Effect::new(move |_| {
        let page = current_page.get();
        let mut req_id = 0;
        state.update(|s| req_id = s.begin_page_load());

        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.get_characters(page, PAGE_SIZE).await;
            state.update(|s| {
                s.finish_page_load(req_id, result);
            });
        });
    });

    let on_prev = Callback::new(move |_| {
        state.update(|s| {
            s.prev_page();
        });
    });
    let on_next = Callback::new(move |_| {
        state.update(|s| {
            s.next_page();
        });
    });

    let run_search = move || {
        let Some(query) = normalize_search_query(&search_text.get_untracked()) else {
            return;
        };
        search_text.set(String::new());

        let mut req_id = 0;
        state.update(|s| req_id = s.begin_search());

        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.search_characters(&query).await;
            state.update(|s| {
                s.finish_search(req_id, result);
            });
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run_search();
    };

    let on_reset = Callback::new(move |_| state.update(|s| s.reset_search()));

    let race = Signal::derive(move || state.with(|s| s.filter.race));
    let gender = Signal::derive(move || state.with(|s| s.filter.gender));
    let on_race = Callback::new(move |r: Option<Race>| state.update(|s| s.set_race(r)));
    let on_gender = Callback::new(move |g: Option<Gender>| state.update(|s| s.set_gender(g)));

    let has_error = move || state.with(|s| s.error);
    let loading = move || state.with(|s| s.loading);
    let searching = Signal::derive(move || state.with(|s| !s.shows_pagination()));

    view! {
        <section class="py-24 overflow-x-hidden">
            <div class="container grid px-4 max-w-7xl mx-auto">
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bangers bg-gradient-to-r from-amber-300 to-amber-600 bg-clip-text text-transparent mt-4 mx-auto mb-15 px-4">
                    "ALL THE CHARACTERS"
                </h1>

                <form
                    class="flex flex-col sm:flex-row sm:items-center relative mb-14 sm:mb-20 max-w-7xl mx-auto sm:gap-3 w-full"
                    on:submit=on_submit
                >
                    <Input
                        id="search"
                        r#type="search"
                        placeholder="Search by name..."
                        bind_value=search_text
                        class="mb-3 sm:mb-0"
                    />
                    <Button class="w-full sm:w-max">
                        "Search"
                    </Button>
                </form>

                <FilterBar race=race gender=gender on_race=on_race on_gender=on_gender />

                <Show when=has_error fallback=|| ().into_view()>
                    <Alert class="mt-10">
                        <AlertTitle>"There was an error loading the characters!"</AlertTitle>
                    </Alert>
                </Show>

                <Show when=loading fallback=|| ().into_view()>
                    <div class="flex justify-center mt-10">
                        <Spinner />
                    </div>
                </Show>

                {move || match state.with(|s| s.display()) {
                    CollectionDisplay::Searched(character) => {
                        view! { <FeaturedCharacterCard character=character /> }.into_any()
                    }
                    CollectionDisplay::List(characters) => {
                        if state.with(|s| s.filter_hides_everything()) {
                            return view! {
                                <p class="mt-10 text-center text-lg text-amber-200">
                                    "No characters on this page match the selected filters."
                                </p>
                            }
                            .into_any();
                        }
                        view! {
                            <CardGrid>
                                {characters
                                    .into_iter()
                                    .map(|character| view! { <CharacterCard character=character /> })
                                    .collect_view()}
                            </CardGrid>
                        }
                        .into_any()
                    }
                }}

                <CollectionFooter
                    searching=searching
                    current=current_page
                    total=total_pages
                    on_prev=on_prev
                    on_next=on_next
                    on_reset=on_reset
                />
            </div>
        </section>
    }
}
