use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Badge, span, "bg-amber-300 text-sm w-full md:w-max text-amber-800 font-semibold px-2 py-1 rounded-full ring ring-amber-700 ring-offset-2"}
}

pub use components::*;
