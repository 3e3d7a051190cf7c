use crate::api::{format_year, Method, MethodResult, Mode, RecommendationResponse};

pub const NO_RESULTS_TEXT: &str = "No matching songs found";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSong {
    pub title: String,
    pub artists: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultRow {
    Error(String),
    NoResults,
    Song(RenderedSong),
}

/// Rows rendered for one method, plus an optional notice the service
/// attached to an otherwise successful result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultList {
    pub rows: Vec<ResultRow>,
    pub notice: Option<String>,
}

impl ResultList {
    pub fn clear(&mut self) {
        self.rows.clear();
        self.notice = None;
    }

    fn append(&mut self, method: Method, result: &MethodResult) {
        if !result.success {
            let message = result
                .error_message
                .clone()
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| method.fallback_error().to_string());
            self.rows.push(ResultRow::Error(message));
            return;
        }

        self.notice = result.error_message.clone().filter(|m| !m.is_empty());
        if result.data.is_empty() {
            self.rows.push(ResultRow::NoResults);
            return;
        }

        self.rows.extend(result.data.iter().map(|song| {
            ResultRow::Song(RenderedSong {
                title: song.name.clone(),
                artists: song.artists.display(),
                year: format_year(song.year),
            })
        }));
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedLists {
    pub quick: ResultList,
    pub advanced: ResultList,
}

impl RenderedLists {
    pub fn list(&self, method: Method) -> &ResultList {
        match method {
            Method::Quick => &self.quick,
            Method::Advanced => &self.advanced,
        }
    }

    fn list_mut(&mut self, method: Method) -> &mut ResultList {
        match method {
            Method::Quick => &mut self.quick,
            Method::Advanced => &mut self.advanced,
        }
    }

    pub fn clear(&mut self) {
        self.quick.clear();
        self.advanced.clear();
    }

    /// Appends rows for every method that is both present in the payload
    /// and included by `mode`.
    pub fn append(&mut self, payload: &RecommendationResponse, mode: Mode) {
        for method in [Method::Quick, Method::Advanced] {
            if !mode.includes(method) {
                continue;
            }
            if let Some(result) = payload.method(method) {
                self.list_mut(method).append(method, result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> RecommendationResponse {
        serde_json::from_value(value).unwrap()
    }

    fn render(payload: &RecommendationResponse, mode: Mode) -> RenderedLists {
        let mut lists = RenderedLists::default();
        lists.append(payload, mode);
        lists
    }

    #[test]
    fn renders_one_row_per_song_with_joined_artists() {
        let lists = render(
            &payload(json!({
                "quick": {"success": true, "data": [
                    {"name": "Song A", "year": 2000, "artists": ["X", "Y"]}
                ]}
            })),
            Mode::Quick,
        );
        assert_eq!(
            lists.quick.rows,
            vec![ResultRow::Song(RenderedSong {
                title: "Song A".to_string(),
                artists: "X, Y".to_string(),
                year: "2000".to_string(),
            })]
        );
        assert!(lists.advanced.rows.is_empty());
    }

    #[test]
    fn empty_data_renders_a_single_marker() {
        let lists = render(
            &payload(json!({"quick": {"success": true, "data": []}})),
            Mode::Quick,
        );
        assert_eq!(lists.quick.rows, vec![ResultRow::NoResults]);
    }

    #[test]
    fn failed_method_renders_its_message() {
        let lists = render(
            &payload(json!({
                "quick": {"success": false, "error_message": "boom"},
                "advanced": {"success": true, "data": [{"name": "B", "year": 1990, "artists": "['Z']"}]}
            })),
            Mode::Quick,
        );
        assert_eq!(lists.quick.rows, vec![ResultRow::Error("boom".to_string())]);
        assert!(lists.advanced.rows.is_empty());
    }

    #[test]
    fn failed_method_without_message_uses_fallback() {
        let lists = render(
            &payload(json!({"advanced": {"success": false, "data": null}})),
            Mode::Both,
        );
        assert_eq!(
            lists.advanced.rows,
            vec![ResultRow::Error(
                "Failed to get advanced recommendations".to_string()
            )]
        );
        assert!(lists.quick.rows.is_empty());
    }

    #[test]
    fn literal_artists_are_cleaned() {
        let lists = render(
            &payload(json!({
                "advanced": {"success": true, "data": [{"name": "C", "year": 1975, "artists": "['A', 'B']"}]}
            })),
            Mode::Advanced,
        );
        match &lists.advanced.rows[..] {
            [ResultRow::Song(song)] => assert_eq!(song.artists, "A, B"),
            other => panic!("unexpected rows: {other:?}"),
        }
    }

    #[test]
    fn rows_keep_received_order() {
        let lists = render(
            &payload(json!({
                "quick": {"success": true, "data": [
                    {"name": "First", "year": 2001, "artists": []},
                    {"name": "Second", "year": 2002, "artists": []}
                ]}
            })),
            Mode::Both,
        );
        let titles: Vec<&str> = lists
            .quick
            .rows
            .iter()
            .filter_map(|row| match row {
                ResultRow::Song(song) => Some(song.title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn partial_match_message_becomes_a_notice() {
        let lists = render(
            &payload(json!({
                "quick": {"success": true, "data": [], "error_message": "Some songs were not found: X"}
            })),
            Mode::Quick,
        );
        assert_eq!(lists.quick.rows, vec![ResultRow::NoResults]);
        assert_eq!(
            lists.quick.notice.as_deref(),
            Some("Some songs were not found: X")
        );
    }

    #[test]
    fn append_does_not_replace_existing_rows() {
        let response = payload(json!({"quick": {"success": true, "data": []}}));
        let mut lists = render(&response, Mode::Quick);
        lists.append(&response, Mode::Quick);
        assert_eq!(lists.quick.rows.len(), 2);
        lists.clear();
        assert_eq!(lists, RenderedLists::default());
    }
}
