use crate::components::ui::{Alert, AlertDescription, AlertTitle, Spinner, StatTile};
use crate::models::{CharacterDetail, Transformation};
use crate::state::{AppContext, DetailState};
use crate::util::{detail_heading_class, or_unknown};
use icons::{Dna, Flame, Mars, Shield, Venus, Zap};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct CharacterRouteParams {
    pub character_id: Option<String>,
}

#[component]
pub fn CharacterDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = leptos_router::hooks::use_params::<CharacterRouteParams>();

    let state: RwSignal<DetailState> = RwSignal::new(DetailState::default());

    let character_id = move || {
        params
            .get()
            .ok()
            .and_then(|p| p.character_id)
            .unwrap_or_default()
    };

    Effect::new(move |_| {
        let id = character_id();
        if id.trim().is_empty() {
            return;
        }

        let mut req_id = 0;
        state.update(|s| req_id = s.begin_load());

        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.get_character(&id).await;
            state.update(|s| {
                s.finish_load(req_id, result);
            });
        });
    });

    view! {
        <Show when=move || state.with(|s| s.loading) fallback=|| ().into_view()>
            <div class="flex justify-center py-40">
                <Spinner class="size-12" />
            </div>
        </Show>

        <Show when=move || state.with(|s| s.error) fallback=|| ().into_view()>
            <div class="py-40 px-4 max-w-xl mx-auto">
                <Alert>
                    <AlertTitle>"We couldn't load this character."</AlertTitle>
                    <AlertDescription>
                        <a href="/characters">"Back to all characters"</a>
                    </AlertDescription>
                </Alert>
            </div>
        </Show>

        {move || {
            state
                .with(|s| if s.loading { None } else { s.character.clone() })
                .map(|detail| view! { <CharacterDetailView detail=detail /> })
        }}
    }
}

#[component]
fn CharacterDetailView(detail: CharacterDetail) -> impl IntoView {
    let CharacterDetail {
        character,
        origin_planet,
        transformations,
    } = detail;

    let title_class = format!(
        "{} font-bangers text-center lg:absolute bg-gradient-to-r from-amber-300 to-amber-600 bg-clip-text text-transparent",
        detail_heading_class(&character.name)
    );

    let (planet_name, planet_image, planet_destroyed) = origin_planet
        .map(|p| (p.name, p.image, p.is_destroyed))
        .unwrap_or_default();
    let planet_name = or_unknown(&planet_name).to_string();
    let planet_label = if planet_destroyed {
        format!("From {planet_name} (destroyed)")
    } else {
        format!("From {planet_name}")
    };
    let planet_image_view = (!planet_image.is_empty()).then(|| {
        view! {
            <img
                src=planet_image
                alt=planet_name.clone()
                class="w-[60px] h-[60px] sm:w-[70px] sm:h-[70px] lg:w-[85px] lg:h-[85px] rounded-full object-cover"
            />
        }
    });

    let gender_icon = match character.gender.as_str() {
        "Male" => view! { <Mars /> }.into_any(),
        "Female" => view! { <Venus /> }.into_any(),
        other => view! { <span class="font-bangers">{or_unknown(other).to_string()}</span> }.into_any(),
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-[1fr_2fr] lg:max-w-7xl lg:mx-auto lg:gap-9 py-28 px-4 md:px-6">
            <h1 class=title_class>{character.name.clone()}</h1>

            <figure class="grid place-items-center lg:place-items-start py-12">
                <img
                    src=character.image.clone()
                    alt=character.name.clone()
                    class="w-[180px] lg:w-[250px] lg:mt-22 transition-transform duration-500 hover:scale-105 hover:drop-shadow-xl hover:drop-shadow-amber-400"
                />
            </figure>

            <div class="grid gap-2.5 lg:gap-5 rounded-xl ring-2 ring-amber-300 ring-offset-2 p-3 sm:p-4 lg:p-6 bg-gradient-to-r from-amber-300 to-amber-600">
                <div>
                    <h2 class="font-bangers text-2xl lg:text-4xl text-gray-900 md:text-center lg:text-left">
                        {format!("LET'S INTRODUCE {}!", character.name)}
                    </h2>
                    <p class="text-sm lg:text-lg font-semibold text-gray-900 md:max-w-[500px] md:mx-auto lg:max-w-full lg:pt-3">
                        {character.description.clone()}
                    </p>
                </div>

                <ul class="grid grid-cols-2 sm:grid-cols-3 gap-3.5 sm:gap-5 mx-auto pt-3 sm:pt-5">
                    <StatTile>
                        <h3 class="text-2xl lg:text-4xl font-bangers">"Gender"</h3>
                        <span class="text-5xl lg:text-7xl [&_svg]:size-12">{gender_icon}</span>
                    </StatTile>

                    <StatTile>
                        <h3 class="text-2xl lg:text-4xl font-bangers flex flex-col text-center">
                            {planet_label}
                        </h3>
                        {planet_image_view}
                    </StatTile>

                    <StatTile>
                        <h3 class="text-lg sm:text-xl lg:text-3xl font-bangers">
                            {format!("Ki {}", or_unknown(&character.ki))}
                        </h3>
                        <Zap class="size-10 sm:size-16" />
                    </StatTile>

                    <StatTile>
                        <h3 class="text-lg sm:text-xl lg:text-2xl font-bangers">
                            "Max. Ki" <br /> {or_unknown(&character.max_ki).to_string()}
                        </h3>
                        <Flame class="size-10 sm:size-16" />
                    </StatTile>

                    <StatTile>
                        <h3 class="text-2xl lg:text-4xl font-bangers">
                            {format!("Race {}", or_unknown(&character.race))}
                        </h3>
                        <Dna class="size-10 sm:size-16" />
                    </StatTile>

                    <StatTile>
                        <h3 class="text-2xl lg:text-3xl font-bangers">
                            {format!("Affiliation {}", or_unknown(&character.affiliation))}
                        </h3>
                        <Shield class="size-10 sm:size-16" />
                    </StatTile>
                </ul>

                <TransformationStrip transformations=transformations />
            </div>
        </div>
    }
}

#[component]
fn TransformationStrip(transformations: Vec<Transformation>) -> impl IntoView {
    if transformations.is_empty() {
        return ().into_any();
    }

    view! {
        <div>
            <h2 class="font-bangers text-2xl lg:text-4xl text-gray-900 md:text-center lg:text-left">
                "TRANSFORMATIONS"
            </h2>
            <ul class="flex gap-4 overflow-x-auto pt-3 pb-2">
                {transformations
                    .into_iter()
                    .map(|t| {
                        view! {
                            <li class="flex flex-col items-center shrink-0 w-32 rounded-lg bg-amber-600 ring-2 ring-amber-300 p-2">
                                <img src=t.image alt=t.name.clone() class="h-28 object-contain" />
                                <span class="font-bangers text-lg text-center">{t.name}</span>
                                <span class="text-xs font-semibold text-gray-900">{or_unknown(&t.ki).to_string()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}
