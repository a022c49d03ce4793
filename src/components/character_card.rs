use crate::components::ui::{
    Badge, CardBadges, CardContent, CardFeatured, CardFigure, CardItem, CardTitle,
};
use crate::models::Character;
use crate::util::or_unknown;
use leptos::prelude::*;

fn detail_href(id: u32) -> String {
    format!("/characters/{id}")
}

/// Grid entry in the paginated list.
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let Character {
        id,
        name,
        race,
        affiliation,
        image,
        ..
    } = character;
    let alt = name.clone();

    view! {
        <CardItem>
            <a href=detail_href(id)>
                <CardFigure>
                    <img
                        src=image
                        alt=alt
                        class="w-[200px] h-[200px] lg:w-60 lg:h-60 object-contain absolute -top-22 lg:-top-35 hover:drop-shadow-xl hover:drop-shadow-amber-400 transition-transform hover:scale-105 duration-300"
                    />
                </CardFigure>
                <CardContent>
                    <CardTitle class="text-2xl md:text-3xl lg:text-4xl">{name}</CardTitle>
                    <CardBadges>
                        <Badge>{or_unknown(&race).to_string()}</Badge>
                        <Badge class="px-1.5">{or_unknown(&affiliation).to_string()}</Badge>
                    </CardBadges>
                </CardContent>
            </a>
        </CardItem>
    }
}

/// Single large card shown in place of the grid after a successful search.
#[component]
pub fn FeaturedCharacterCard(character: Character) -> impl IntoView {
    let Character {
        id,
        name,
        race,
        affiliation,
        image,
        ..
    } = character;
    let alt = name.clone();

    view! {
        <div class="text-white">
            <a href=detail_href(id)>
                <CardFeatured>
                    <img
                        src=image
                        alt=alt
                        class="w-[200px] h-[200px] sm:w-[300px] sm:h-[300px] lg:w-[400px] lg:h-[400px] object-contain absolute -top-22 sm:-top-50 lg:-top-52 hover:drop-shadow-xl hover:drop-shadow-amber-400 transition-transform hover:scale-105 duration-300"
                    />
                    <CardContent>
                        <CardTitle class="text-2xl sm:text-4xl md:text-5xl lg:text-7xl">{name}</CardTitle>
                        <CardBadges>
                            <Badge>{or_unknown(&race).to_string()}</Badge>
                            <Badge class="px-1.5">{or_unknown(&affiliation).to_string()}</Badge>
                        </CardBadges>
                    </CardContent>
                </CardFeatured>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goku() -> Character {
        Character {
            id: 1,
            name: "Goku".to_string(),
            ki: "60.000.000".to_string(),
            max_ki: "90 Septillion".to_string(),
            race: "Saiyan".to_string(),
            gender: "Male".to_string(),
            description: String::new(),
            image: "https://dragonball-api.com/characters/goku_normal.webp".to_string(),
            affiliation: String::new(),
        }
    }

    #[test]
    fn test_detail_href() {
        assert_eq!(detail_href(42), "/characters/42");
    }

    #[test]
    fn test_card_renders_link_alt_and_badges() {
        let html = Owner::new().with(|| view! { <CharacterCard character=goku() /> }.to_html());
        assert!(html.contains(r#"href="/characters/1""#));
        assert!(html.contains(r#"alt="Goku""#));
        assert!(html.contains("Saiyan"));
        // Missing affiliation falls back to a placeholder badge.
        assert!(html.contains("Unknown"));
    }

    #[test]
    fn test_featured_card_links_to_detail() {
        let html =
            Owner::new().with(|| view! { <FeaturedCharacterCard character=goku() /> }.to_html());
        assert!(html.contains(r#"href="/characters/1""#));
        assert!(html.contains(r#"alt="Goku""#));
    }
}
