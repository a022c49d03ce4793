use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {CardGrid, ul, "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-3 lg:gap-5 mt-10 lg:mt-30"}
    clx! {CardItem, li, "relative flex flex-col items-center bg-amber-600 rounded-xl p-4 md:p-5 my-15 lg:mt-25 cursor-pointer ring ring-amber-400 ring-offset-1"}
    clx! {CardFeatured, article, "relative flex flex-col items-center bg-amber-600 rounded-xl p-4 md:p-5 my-15 sm:my-52 lg:mt-52 cursor-pointer ring ring-amber-400 ring-offset-1 sm:max-w-[400px] sm:mx-auto"}
    clx! {CardFigure, figure, "grid place-items-center"}
    clx! {CardContent, div, "flex flex-col gap-2 items-center mt-24"}
    clx! {CardTitle, h3, "uppercase font-bangers text-center"}
    clx! {CardBadges, div, "flex flex-col md:flex-row items-center gap-3 mt-2 text-center"}
    clx! {StatTile, li, "flex flex-col items-center justify-center gap-2 w-30 h-30 sm:w-40 sm:h-40 lg:w-50 lg:h-50 p-4 mx-auto rounded-lg ring-2 ring-amber-300 ring-offset-1 bg-amber-600 text-center"}
}

#[allow(unused_imports)]
pub use components::*;
