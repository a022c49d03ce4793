use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border border-red-600/40 bg-red-950/40 px-4 py-3 text-center"}
    clx! {AlertTitle, h2, "text-red-500 text-2xl md:text-4xl font-bangers tracking-wide"}
    clx! {AlertDescription, p, "text-sm text-red-200 [&_a]:underline [&_a]:underline-offset-4"}
}

#[allow(unused_imports)]
pub use components::*;
