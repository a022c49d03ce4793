use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// One catalog record as returned by the list and search endpoints.
///
/// The API has been seen omitting string fields on older records, so every
/// text field falls back to an empty string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ki: String,
    #[serde(default)]
    pub max_ki: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub affiliation: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_destroyed: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ki: String,
}

/// Payload of `GET /characters/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub character: Character,
    #[serde(default)]
    pub origin_planet: Option<Planet>,
    #[serde(default)]
    pub transformations: Vec<Transformation>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u32,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub items_per_page: u32,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Pagination envelope of `GET /characters?page=&limit=`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageDescriptor {
    pub items: Vec<Character>,
    pub meta: PageMeta,
}

// Variant strings match the values the API stores in `race` / `gender`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display)]
pub enum Race {
    Human,
    Saiyan,
    Namekian,
    Android,
    #[strum(serialize = "Frieza Race")]
    FriezaRace,
    #[strum(serialize = "Jiren Race")]
    JirenRace,
    God,
    Angel,
    Evil,
    Nucleico,
    #[strum(serialize = "Nucleico benigno")]
    NucleicoBenigno,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}
