use super::song_list::SongRow;
use super::UiState;
use crate::api::{RecommendationRequest, RecommendationResponse, SongEntry, MAX_YEAR, MIN_YEAR};
use crate::error::{RequestError, ValidationError};

fn parse_year(year: &str) -> Option<i32> {
    year.parse::<i32>()
        .ok()
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
}

/// Flags every row and collects the complete ones.
///
/// Flags are recomputed on every call, so a row fixed since the last
/// attempt loses its highlight.
pub fn validate_rows(rows: &mut [SongRow]) -> Result<Vec<SongEntry>, ValidationError> {
    let mut songs = Vec::with_capacity(rows.len());
    let mut flagged = false;

    for row in rows.iter_mut() {
        let name = row.name.trim();
        let year = parse_year(row.year.trim());

        row.name_invalid = name.is_empty();
        row.year_invalid = year.is_none();
        flagged |= row.name_invalid || row.year_invalid;

        if let (false, Some(year)) = (name.is_empty(), year) {
            songs.push(SongEntry {
                name: name.to_string(),
                year,
            });
        }
    }

    if flagged {
        return Err(ValidationError::MissingFields);
    }
    if songs.is_empty() {
        return Err(ValidationError::NoSongs);
    }
    Ok(songs)
}

impl UiState {
    /// Starts a submission attempt. Returns the request to send, or `None`
    /// when nothing should go over the wire.
    pub fn begin_submission(&mut self) -> Option<RecommendationRequest> {
        if self.loading {
            tracing::debug!("Submission ignored, a request is already in flight");
            return None;
        }

        self.error = None;
        self.results.clear();

        let songs = match validate_rows(self.songs.rows_mut()) {
            Ok(songs) => songs,
            Err(e) => {
                tracing::info!(error = %e, "Submission failed validation");
                self.error = Some(e.to_string());
                return None;
            }
        };

        self.loading = true;
        self.results_visible = false;

        let request = RecommendationRequest {
            songs,
            mode: self.selector.active(),
        };
        tracing::info!(
            songs = request.songs.len(),
            mode = request.mode.as_str(),
            "Submitting songs for recommendation"
        );
        Some(request)
    }

    /// Ends the in-flight attempt with whatever the service returned.
    pub fn complete(&mut self, outcome: Result<RecommendationResponse, RequestError>) {
        self.loading = false;
        match outcome {
            Ok(payload) => {
                self.results_visible = true;
                self.results.append(&payload, self.selector.active());
                tracing::info!(
                    quick = self.results.quick.rows.len(),
                    advanced = self.results.advanced.rows.len(),
                    "Rendered recommendations"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                self.error = Some(e.to_string());
            }
        }
    }
}
