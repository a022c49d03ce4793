use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,

    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,

    // Manual two-way binding; `bind:value` has shifted across Leptos releases.
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "bg-transparent ring-2 ring-amber-700 w-full rounded-full px-3 py-1.5 text-lg text-white outline-0",
        "placeholder:text-amber-100/50",
        "focus-visible:ring-amber-400",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                bind_value.set(input.value());
            }
        }
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            id=id
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
    .into_any()
}
