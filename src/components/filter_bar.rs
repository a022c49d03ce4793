use crate::components::ui::{Label, NativeSelect};
use crate::filter::{choice_value, parse_choice};
use crate::models::{Gender, Race};
use leptos::prelude::*;
use strum::IntoEnumIterator;

#[component]
pub fn FilterBar(
    #[prop(into)] race: Signal<Option<Race>>,
    #[prop(into)] gender: Signal<Option<Gender>>,
    on_race: Callback<Option<Race>>,
    on_gender: Callback<Option<Gender>>,
) -> impl IntoView {
    let race_options: Vec<String> = Race::iter().map(|r| r.to_string()).collect();
    let gender_options: Vec<String> = Gender::iter().map(|g| g.to_string()).collect();

    view! {
        <div class="flex flex-col sm:flex-row items-center gap-3 mt-1.5 mb-18 sm:max-w-6xl sm:mx-auto">
            <Label html_for="race">"Race"</Label>
            <NativeSelect
                id="race"
                placeholder="All Races"
                options=race_options
                value=Signal::derive(move || choice_value(race.get()))
                on_change=Callback::new(move |v: String| on_race.run(parse_choice::<Race>(&v)))
            />

            <Label html_for="gender">"Gender"</Label>
            <NativeSelect
                id="gender"
                class="px-1.5"
                placeholder="All Genders"
                options=gender_options
                value=Signal::derive(move || choice_value(gender.get()))
                on_change=Callback::new(move |v: String| on_gender.run(parse_choice::<Gender>(&v)))
            />
        </div>
    }
}
