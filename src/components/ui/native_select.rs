use leptos::prelude::*;
use tw_merge::tw_merge;

/// Plain `<select>` with an "all" option carrying the empty value.
///
/// `options` are the selectable values; they double as labels.
#[component]
pub fn NativeSelect(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into)] placeholder: String,
    options: Vec<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "bg-amber-300 text-lg w-full text-amber-800 font-semibold px-3 py-1 rounded-full ring ring-amber-700 ring-offset-2 cursor-pointer outline-0",
        class
    );

    view! {
        <select
            id=id
            class=merged_class
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {options
                .into_iter()
                .map(|opt| {
                    let selected = {
                        let opt = opt.clone();
                        move || value.get() == opt
                    };
                    view! {
                        <option value=opt.clone() selected=selected>
                            {opt.clone()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
