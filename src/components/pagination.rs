use crate::components::ui::Button;
use icons::{ArrowLeft, ArrowRight, RotateCcw};
use leptos::prelude::*;

fn at_first(current: u32) -> bool {
    current <= 1
}

fn at_last(current: u32, total: u32) -> bool {
    current >= total
}

/// Prev / "Page N of M" / Next. Buttons disable themselves at the bounds.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let prev_disabled = move || at_first(current.get());
    let next_disabled = move || at_last(current.get(), total.get());

    view! {
        <div class="flex justify-center items-center gap-6 mt-12">
            <Button attr:disabled=prev_disabled on:click=move |_| on_prev.run(())>
                <ArrowLeft />
                "Prev"
            </Button>

            <span class="text-lg font-semibold text-white">
                "Page "
                <span class="font-bangers text-amber-400">{move || current.get()}</span>
                " of "
                <span class="font-bangers text-amber-600">{move || total.get()}</span>
            </span>

            <Button attr:disabled=next_disabled on:click=move |_| on_next.run(())>
                "Next"
                <ArrowRight />
            </Button>
        </div>
    }
}

/// Pagination while the list is shown; a single "Go back" button while a
/// search hit replaces it.
#[component]
pub fn CollectionFooter(
    #[prop(into)] searching: Signal<bool>,
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center">
            <Show
                when=move || !searching.get()
                fallback=move || view! {
                    <Button on:click=move |_| on_reset.run(())>
                        "Go back"
                        <RotateCcw />
                    </Button>
                }
            >
                <Pagination current=current total=total on_prev=on_prev on_next=on_next />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Opening tags of every `<button>` in rendered markup.
    fn button_tags(html: &str) -> Vec<String> {
        html.split("<button")
            .skip(1)
            .map(|rest| rest.split('>').next().unwrap_or_default().to_string())
            .collect()
    }

    fn is_disabled(tag: &str) -> bool {
        tag.split_whitespace()
            .any(|token| token == "disabled" || token.starts_with("disabled="))
    }

    fn render_pagination(current: u32, total: u32) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <Pagination
                    current=Signal::stored(current)
                    total=Signal::stored(total)
                    on_prev=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                />
            }
            .to_html()
        })
    }

    fn render_footer(searching: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            view! {
                <CollectionFooter
                    searching=Signal::stored(searching)
                    current=Signal::stored(2)
                    total=Signal::stored(5)
                    on_prev=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                    on_reset=Callback::new(|_| {})
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_bounds() {
        assert!(at_first(1));
        assert!(!at_first(2));
        assert!(at_last(5, 5));
        assert!(!at_last(1, 5));
        assert!(at_last(1, 1));
    }

    #[test]
    fn test_first_page_disables_prev_only() {
        let html = render_pagination(1, 5);
        let tags = button_tags(&html);
        assert_eq!(tags.len(), 2);
        assert!(is_disabled(&tags[0]));
        assert!(!is_disabled(&tags[1]));
        assert!(html.contains("Page "));
        assert!(!html.contains("on_next"));
    }

    #[test]
    fn test_last_page_disables_next_only() {
        let tags = button_tags(&render_pagination(5, 5));
        assert_eq!(tags.len(), 2);
        assert!(!is_disabled(&tags[0]));
        assert!(is_disabled(&tags[1]));
    }

    #[test]
    fn test_single_page_disables_both() {
        let tags = button_tags(&render_pagination(1, 1));
        assert!(tags.iter().all(|t| is_disabled(t)));
    }

    #[test]
    fn test_footer_shows_pagination_while_listing() {
        let html = render_footer(false);
        assert!(html.contains("Next"));
        assert!(html.contains("Prev"));
        assert!(!html.contains("Go back"));
    }

    #[test]
    fn test_footer_swaps_to_go_back_after_search_hit() {
        let html = render_footer(true);
        assert!(html.contains("Go back"));
        assert!(!html.contains("Next"));
        assert_eq!(button_tags(&html).len(), 1);
    }
}
