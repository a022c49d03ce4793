use crate::util::is_active_path;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::use_location;

const NAV_LINKS: [(&str, &str); 2] = [("Home", "/"), ("Characters", "/characters")];

const LOGO_URL: &str = "https://i.ebayimg.com/images/g/cGgAAOSwIJVhsrHl/s-l400.png";
const MENU_ICON_URL: &str = "https://png.pngtree.com/png-vector/20221208/ourmid/pngtree-4-dragon-ball-icon-vector-drgon-illustrtion-png-image_6515607.png";

const LINK_CLASS: &str = "text-2xl md:text-3xl uppercase font-bangers bg-gradient-to-r from-amber-200 to-amber-400 bg-clip-text text-transparent";

fn link_class(active: bool) -> String {
    if active {
        format!("{LINK_CLASS} underline decoration-amber-300 underline-offset-4")
    } else {
        LINK_CLASS.to_string()
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let is_open: RwSignal<bool> = RwSignal::new(false);
    let location = use_location();
    let pathname = move || location.pathname.get();

    // Esc closes the mobile menu.
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            is_open.set(false);
        }
    });

    let desktop_links = NAV_LINKS
        .iter()
        .map(|(label, href)| {
            let href = *href;
            view! {
                <li>
                    <a href=href class=move || link_class(is_active_path(&pathname(), href))>
                        {*label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let mobile_links = NAV_LINKS
        .iter()
        .map(|(label, href)| {
            let href = *href;
            view! {
                <li>
                    <a
                        href=href
                        class=move || link_class(is_active_path(&pathname(), href))
                        on:click=move |_| is_open.set(false)
                    >
                        {*label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="fixed top-0 left-0 w-full bg-amber-600 text-gray-900 z-10">
            <div class="container px-4 h-15 md:h-20 flex items-center justify-between md:max-w-4xl lg:max-w-7xl mx-auto">
                <a href="/" class="flex items-center gap-1">
                    <h2 class="text-3xl md:text-4xl uppercase font-bangers bg-gradient-to-r from-amber-200 to-amber-400 bg-clip-text text-transparent">
                        "Dragon Ball"
                    </h2>
                    <img src=LOGO_URL alt="Dragon Ball" class="size-10 md:size-15" />
                </a>

                <ul class="hidden md:flex items-center gap-2 font-semibold uppercase">
                    {desktop_links}
                </ul>

                <button
                    class="md:hidden"
                    aria-label="Toggle menu"
                    on:click=move |_| is_open.update(|v| *v = !*v)
                >
                    <img
                        src=MENU_ICON_URL
                        alt="Menu"
                        class=move || {
                            if is_open.get() {
                                "size-10 cursor-pointer transition duration-200 rotate-180"
                            } else {
                                "size-10 cursor-pointer transition duration-200 rotate-0"
                            }
                        }
                    />
                </button>

                <ul class=move || {
                    if is_open.get() {
                        "absolute flex flex-col items-center gap-1.5 top-20 right-3 bg-amber-600 px-1 py-3 rounded-lg ring-2 ring-amber-400 transition-opacity duration-300 opacity-100 md:hidden"
                    } else {
                        "absolute flex flex-col items-center gap-1.5 -top-300 right-3 bg-amber-600 px-1 py-3 rounded-lg ring-2 ring-amber-400 opacity-0 md:hidden"
                    }
                }>
                    {mobile_links}
                </ul>
            </div>
        </header>
    }
}
