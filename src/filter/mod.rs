use crate::models::{Character, Gender, Race};
use std::str::FromStr;

/// Local race/gender narrowing of the page currently held in memory.
///
/// An unset axis imposes no constraint. Matching is exact against the
/// strings the API stores, so a character with a race outside the known
/// set only survives when no race is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CharacterFilter {
    pub race: Option<Race>,
    pub gender: Option<Gender>,
}

impl CharacterFilter {
    pub fn matches(&self, character: &Character) -> bool {
        let race_ok = self.race.map_or(true, |r| character.race == r.as_ref());
        let gender_ok = self.gender.map_or(true, |g| character.gender == g.as_ref());
        race_ok && gender_ok
    }

    pub fn apply<'a>(&self, characters: &'a [Character]) -> Vec<&'a Character> {
        characters.iter().filter(|c| self.matches(c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.race.is_none() && self.gender.is_none()
    }
}

/// Parses a `<select>` value. The empty "All ..." option and anything
/// outside the closed set both mean "no filter".
pub(crate) fn parse_choice<T: FromStr>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    T::from_str(value).ok()
}

/// Value written back into the `<select>` for the current choice.
pub(crate) fn choice_value<T: AsRef<str>>(choice: Option<T>) -> String {
    choice.map(|c| c.as_ref().to_string()).unwrap_or_default()
}
