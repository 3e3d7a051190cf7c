//! Client-side state and the commands that mutate it.
//!
//! Nothing in here knows about Dioxus: components keep one `UiState` in a
//! signal and route every user action through [`UiState::dispatch`].

mod mode;
mod orchestrator;
mod renderer;
mod song_list;

pub use mode::*;
pub use orchestrator::*;
pub use renderer::*;
pub use song_list::*;

use crate::api::{Mode, RecommendationRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddRow,
    RemoveRow(RowId),
    ClearRows,
    EditName(RowId, String),
    EditYear(RowId, String),
    SelectMode(Mode),
    Submit,
}

/// What the caller has to do after a command was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Idle,
    /// Send this request and report back through [`UiState::complete`].
    Send(RecommendationRequest),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub songs: SongList,
    pub selector: ModeSelector,
    pub loading: bool,
    pub error: Option<String>,
    pub results: RenderedLists,
    pub results_visible: bool,
}

impl UiState {
    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        match command {
            Command::AddRow => {
                self.songs.add_row();
            }
            Command::RemoveRow(id) => {
                self.songs.remove_row(id);
            }
            Command::ClearRows => self.songs.reset(),
            Command::EditName(id, name) => self.songs.set_name(id, name),
            Command::EditYear(id, year) => self.songs.set_year(id, year),
            Command::SelectMode(mode) => self.selector.select(mode),
            Command::Submit => {
                if let Some(request) = self.begin_submission() {
                    return Dispatch::Send(request);
                }
            }
        }
        Dispatch::Idle
    }

    pub fn loader_visible(&self) -> bool {
        self.loading
    }

    pub fn results_container_visible(&self) -> bool {
        !self.loading && self.results_visible
    }

    pub fn panels(&self) -> PanelVisibility {
        self.selector.panels()
    }
}
