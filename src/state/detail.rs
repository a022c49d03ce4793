use crate::api::ApiResult;
use crate::models::CharacterDetail;
use crate::state::RequestSeq;

/// State behind `/characters/:character_id`.
#[derive(Clone, Debug, Default)]
pub(crate) struct DetailState {
    pub character: Option<CharacterDetail>,
    pub error: bool,
    pub loading: bool,
    requests: RequestSeq,
}

impl DetailState {
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.error = false;
        self.requests.next()
    }

    pub fn finish_load(&mut self, req_id: u64, result: ApiResult<CharacterDetail>) -> bool {
        if !self.requests.is_current(req_id) {
            log::debug!("dropping stale character response #{req_id}");
            return false;
        }

        self.loading = false;
        match result {
            Ok(detail) => {
                self.character = Some(detail);
                self.error = false;
            }
            Err(e) => {
                log::warn!("character load failed ({:?}): {e}", e.kind);
                self.character = None;
                self.error = true;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiErrorKind};
    use crate::models::Character;

    fn detail(id: u32, name: &str) -> CharacterDetail {
        CharacterDetail {
            character: Character {
                id,
                name: name.to_string(),
                ki: String::new(),
                max_ki: String::new(),
                race: String::new(),
                gender: String::new(),
                description: String::new(),
                image: String::new(),
                affiliation: String::new(),
            },
            origin_planet: None,
            transformations: vec![],
        }
    }

    #[test]
    fn test_load_success() {
        let mut s = DetailState::default();
        let id = s.begin_load();
        assert!(s.loading);
        assert!(s.finish_load(id, Ok(detail(1, "Goku"))));
        assert!(!s.loading);
        assert_eq!(s.character.map(|d| d.character.name).as_deref(), Some("Goku"));
    }

    #[test]
    fn test_load_failure_sets_error() {
        let mut s = DetailState::default();
        let id = s.begin_load();
        s.finish_load(
            id,
            Err(ApiError {
                kind: ApiErrorKind::NotFound,
                message: "404".to_string(),
            }),
        );
        assert!(s.error);
        assert!(s.character.is_none());
    }

    #[test]
    fn test_route_change_drops_older_response() {
        let mut s = DetailState::default();
        let first = s.begin_load();
        let second = s.begin_load();
        assert!(s.finish_load(second, Ok(detail(2, "Vegeta"))));
        assert!(!s.finish_load(first, Ok(detail(1, "Goku"))));
        assert_eq!(s.character.map(|d| d.character.id), Some(2));
    }
}
