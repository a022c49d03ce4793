use crate::api::ApiResult;
use crate::filter::CharacterFilter;
use crate::models::{Character, Gender, PageDescriptor, Race};
use crate::state::RequestSeq;

pub(crate) const PAGE_SIZE: u32 = 12;

/// What the collection view renders below the filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CollectionDisplay {
    /// A search hit replaces the list; pagination gives way to a reset button.
    Searched(Character),
    List(Vec<Character>),
}

/// State behind the list/search/filter/pagination screen.
///
/// Kept free of signals so the transitions can be exercised natively; the
/// page component wraps it in a single `RwSignal`.
#[derive(Clone, Debug)]
pub(crate) struct CollectionState {
    /// Page last returned by the API (unfiltered).
    pub characters: Vec<Character>,
    pub searched: Option<Character>,
    pub current_page: u32,
    pub total_pages: u32,
    pub error: bool,
    pub loading: bool,
    pub filter: CharacterFilter,

    page_requests: RequestSeq,
    search_requests: RequestSeq,
}

impl CollectionState {
    pub fn new() -> Self {
        Self {
            characters: vec![],
            searched: None,
            current_page: 1,
            total_pages: 1,
            error: false,
            loading: false,
            filter: CharacterFilter::default(),
            page_requests: RequestSeq::default(),
            search_requests: RequestSeq::default(),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` when the page index moved (and a fetch is due).
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn begin_page_load(&mut self) -> u64 {
        self.loading = true;
        self.page_requests.next()
    }

    /// Applies a page response. Returns `false` if a newer page request has
    /// been issued since `req_id`, in which case nothing changes.
    pub fn finish_page_load(&mut self, req_id: u64, result: ApiResult<PageDescriptor>) -> bool {
        if !self.page_requests.is_current(req_id) {
            log::debug!("dropping stale page response #{req_id}");
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.characters = page.items;
                self.total_pages = page.meta.total_pages.max(1);
                self.error = false;
            }
            Err(e) => {
                log::warn!("page {} failed ({:?}): {e}", self.current_page, e.kind);
                self.error = true;
            }
        }
        true
    }

    pub fn begin_search(&mut self) -> u64 {
        self.search_requests.next()
    }

    pub fn finish_search(&mut self, req_id: u64, result: ApiResult<Vec<Character>>) -> bool {
        if !self.search_requests.is_current(req_id) {
            log::debug!("dropping stale search response #{req_id}");
            return false;
        }

        match result {
            Ok(found) => match found.into_iter().next() {
                Some(first) => {
                    self.searched = Some(first);
                    self.error = false;
                }
                None => {
                    self.searched = None;
                    self.error = true;
                }
            },
            Err(e) => {
                log::warn!("search failed ({:?}): {e}", e.kind);
                self.error = true;
            }
        }
        true
    }

    /// Back to the paginated list. The held page is untouched and any
    /// search still in flight is ignored when it lands.
    pub fn reset_search(&mut self) {
        self.searched = None;
        self.error = false;
        self.search_requests.invalidate();
    }

    pub fn set_race(&mut self, race: Option<Race>) {
        self.filter.race = race;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.filter.gender = gender;
    }

    pub fn visible_characters(&self) -> Vec<Character> {
        self.filter
            .apply(&self.characters)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn display(&self) -> CollectionDisplay {
        match &self.searched {
            Some(c) => CollectionDisplay::Searched(c.clone()),
            None => CollectionDisplay::List(self.visible_characters()),
        }
    }

    /// The held page has characters but the active filters exclude all of them.
    pub fn filter_hides_everything(&self) -> bool {
        !self.filter.is_empty() && !self.characters.is_empty() && self.visible_characters().is_empty()
    }

    pub fn shows_pagination(&self) -> bool {
        self.searched.is_none()
    }
}

impl Default for CollectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiErrorKind};
    use crate::models::PageMeta;

    fn character(id: u32, name: &str, race: &str, gender: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            ki: "1".to_string(),
            max_ki: "2".to_string(),
            race: race.to_string(),
            gender: gender.to_string(),
            description: String::new(),
            image: String::new(),
            affiliation: "Z Fighter".to_string(),
        }
    }

    fn page(current: u32, total: u32, items: Vec<Character>) -> PageDescriptor {
        PageDescriptor {
            meta: PageMeta {
                total_items: total * PAGE_SIZE,
                item_count: items.len() as u32,
                items_per_page: PAGE_SIZE,
                total_pages: total,
                current_page: current,
            },
            items,
        }
    }

    fn first_page() -> Vec<Character> {
        vec![
            character(1, "Goku", "Saiyan", "Male"),
            character(2, "Vegeta", "Saiyan", "Male"),
            character(3, "Bulma", "Human", "Female"),
            character(4, "Freezer", "Frieza Race", "Male"),
        ]
    }

    fn network_error() -> ApiError {
        ApiError {
            kind: ApiErrorKind::Network,
            message: "offline".to_string(),
        }
    }

    fn loaded(total_pages: u32) -> CollectionState {
        let mut s = CollectionState::new();
        let id = s.begin_page_load();
        s.finish_page_load(id, Ok(page(1, total_pages, first_page())));
        s
    }

    #[test]
    fn test_initial_state_is_page_one() {
        let s = CollectionState::new();
        assert_eq!(s.current_page, 1);
        assert_eq!(s.total_pages, 1);
        assert!(!s.error);
        assert_eq!(s.display(), CollectionDisplay::List(vec![]));
    }

    #[test]
    fn test_page_load_replaces_list_and_total() {
        let s = loaded(5);
        assert_eq!(s.characters.len(), 4);
        assert_eq!(s.total_pages, 5);
        assert!(!s.loading);
        assert!(!s.error);
    }

    #[test]
    fn test_zero_total_pages_is_clamped_to_one() {
        let mut s = CollectionState::new();
        let id = s.begin_page_load();
        s.finish_page_load(id, Ok(page(1, 0, vec![])));
        assert_eq!(s.total_pages, 1);
        assert!(!s.has_next());
    }

    #[test]
    fn test_prev_is_noop_on_first_page() {
        let mut s = loaded(3);
        assert!(!s.prev_page());
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn test_next_is_noop_on_last_page() {
        let mut s = loaded(2);
        assert!(s.next_page());
        assert_eq!(s.current_page, 2);
        assert!(!s.next_page());
        assert_eq!(s.current_page, 2);
    }

    #[test]
    fn test_next_then_prev_returns_to_original_page() {
        let mut s = loaded(3);
        let original = s.characters.clone();

        assert!(s.next_page());
        let id = s.begin_page_load();
        s.finish_page_load(id, Ok(page(2, 3, vec![character(13, "Krilin", "Human", "Male")])));
        assert_eq!(s.characters.len(), 1);

        assert!(s.prev_page());
        let id = s.begin_page_load();
        s.finish_page_load(id, Ok(page(1, 3, first_page())));
        assert_eq!(s.current_page, 1);
        assert_eq!(s.characters, original);
    }

    #[test]
    fn test_page_failure_sets_error_and_keeps_list() {
        let mut s = loaded(3);
        s.next_page();
        let id = s.begin_page_load();
        s.finish_page_load(id, Err(network_error()));
        assert!(s.error);
        assert!(!s.loading);
        assert_eq!(s.characters.len(), 4);
    }

    #[test]
    fn test_page_success_clears_previous_error() {
        let mut s = CollectionState::new();
        let id = s.begin_page_load();
        s.finish_page_load(id, Err(network_error()));
        assert!(s.error);

        let id = s.begin_page_load();
        s.finish_page_load(id, Ok(page(1, 1, first_page())));
        assert!(!s.error);
    }

    #[test]
    fn test_stale_page_response_is_dropped() {
        let mut s = loaded(3);
        s.next_page();
        let slow = s.begin_page_load();
        s.next_page();
        let fast = s.begin_page_load();

        let page3 = vec![character(25, "Gohan", "Saiyan", "Male")];
        assert!(s.finish_page_load(fast, Ok(page(3, 3, page3.clone()))));
        assert!(!s.finish_page_load(slow, Ok(page(2, 3, first_page()))));

        assert_eq!(s.current_page, 3);
        assert_eq!(s.characters, page3);
        assert!(!s.loading);
    }

    #[test]
    fn test_search_hit_displays_first_result_and_hides_pagination() {
        let mut s = loaded(3);
        let id = s.begin_search();
        let goku = character(1, "Goku", "Saiyan", "Male");
        s.finish_search(id, Ok(vec![goku.clone(), character(99, "Goku Jr", "Saiyan", "Male")]));

        assert_eq!(s.display(), CollectionDisplay::Searched(goku));
        assert!(!s.error);
        assert!(!s.shows_pagination());
    }

    #[test]
    fn test_search_miss_sets_error_and_clears_previous_hit() {
        let mut s = loaded(3);
        let id = s.begin_search();
        s.finish_search(id, Ok(vec![character(1, "Goku", "Saiyan", "Male")]));

        let id = s.begin_search();
        s.finish_search(id, Ok(vec![]));
        assert!(s.error);
        assert!(s.searched.is_none());
        assert!(s.shows_pagination());
    }

    #[test]
    fn test_search_transport_failure_sets_error() {
        let mut s = loaded(1);
        let id = s.begin_search();
        s.finish_search(id, Err(network_error()));
        assert!(s.error);
    }

    #[test]
    fn test_reset_restores_loaded_list_unchanged() {
        let mut s = loaded(3);
        let before = s.characters.clone();

        let id = s.begin_search();
        s.finish_search(id, Ok(vec![character(3, "Bulma", "Human", "Female")]));
        s.reset_search();

        assert!(s.searched.is_none());
        assert!(!s.error);
        assert_eq!(s.display(), CollectionDisplay::List(before));
    }

    #[test]
    fn test_reset_ignores_search_still_in_flight() {
        let mut s = loaded(3);
        let id = s.begin_search();
        s.reset_search();
        assert!(!s.finish_search(id, Ok(vec![character(1, "Goku", "Saiyan", "Male")])));
        assert!(s.searched.is_none());
    }

    #[test]
    fn test_filter_is_local_and_combines_axes() {
        let mut s = loaded(3);
        s.set_race(Some(Race::Saiyan));
        let names: Vec<String> = s.visible_characters().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Goku", "Vegeta"]);

        s.set_gender(Some(Gender::Female));
        assert!(s.visible_characters().is_empty());
        assert!(s.filter_hides_everything());

        s.set_race(None);
        let names: Vec<String> = s.visible_characters().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Bulma"]);

        // The held page itself is never narrowed.
        assert_eq!(s.characters.len(), 4);
    }

    #[test]
    fn test_visible_list_never_exceeds_page_size() {
        let mut s = CollectionState::new();
        let items: Vec<Character> = (1..=PAGE_SIZE)
            .map(|i| character(i, "X", "Human", "Male"))
            .collect();
        let id = s.begin_page_load();
        s.finish_page_load(id, Ok(page(1, 5, items)));
        assert!(s.visible_characters().len() <= PAGE_SIZE as usize);
    }
}
