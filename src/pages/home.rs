use leptos::prelude::*;

const KANJI_URL: &str = "https://th.bing.com/th/id/R.18562ed8f889621eccd0c1bc38dd923e?rik=1%2fonqdqsVEk6Sg&riu=http%3a%2f%2fvignette2.wikia.nocookie.net%2fdragonball%2fimages%2f5%2f50%2fKanji_Goku.png%2frevision%2flatest%3fcb%3d20150730191256%26path-prefix%3des&ehk=BDL1QyX8dzBk%2bWIoP6JiBb%2fYiHU%2bUFlU0pGUFTMwTtg%3d&risl=&pid=ImgRaw&r=0&sres=1&sresct=1";
const SHENRON_URL: &str = "https://www.pngplay.com/wp-content/uploads/12/Shenron-Transparent-Image.png";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="pt-30 md:pt-40">
            <div class="container mx-auto px-4 md:max-w-4xl lg:max-w-7xl lg:grid lg:grid-cols-2 lg:gap-2.5">
                <div class="flex flex-col">
                    <span class="bg-amber-300 text-sm w-max text-amber-800 font-semibold px-1.5 py-1 rounded-full ring ring-amber-700 ring-offset-2">
                        "Explore all your favourite characters"
                    </span>

                    <h1 class="text-7xl md:text-8xl font-bangers bg-gradient-to-r from-amber-300 to-amber-600 bg-clip-text text-transparent mt-4">
                        "DRAGON BALL " <span class="text-amber-300">"CHARACTERS"</span>
                    </h1>

                    <p class="text-gray-100 text-sm md:text-[15px] lg:text-lg md:max-w-[500px] py-5">
                        "Welcome! Here you will find every character of the legendary Dragon Ball. "
                        "Pick one to see their details and much more. Ready?"
                    </p>

                    <a
                        href="/characters"
                        class="inline-flex items-center gap-1.5 bg-gradient-to-r from-amber-300 to-amber-600 w-max rounded-full px-3 py-1.5 text-amber-900 font-bold uppercase ring-2 ring-amber-300 mt-3 hover:shadow-lg shadow-amber-500 transition-shadow duration-200"
                    >
                        <span class="lg:text-lg">"Go to characters"</span>
                        <img src=KANJI_URL alt="Kanji" class="size-8" />
                    </a>
                </div>

                <figure class="grid place-content-center">
                    <img src=SHENRON_URL alt="Shenron" class="w-full mt-10 md:mt-20 lg:mt-0" />
                </figure>
            </div>
        </section>
    }
}
