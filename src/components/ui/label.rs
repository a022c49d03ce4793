use leptos::prelude::*;
use tw_merge::*;

/// Screen-reader only; the filter selects carry their own "All ..." placeholder.
#[component]
pub fn Label(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!("sr-only text-sm font-semibold text-amber-300", class);

    view! {
        <label class=class r#for=html_for>
            {children()}
        </label>
    }
}
