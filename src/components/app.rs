use crate::api::RecommendClient;
use crate::components::{Icon, IconKind, ModeSlider, ResultsPanels, SongInputs};
use crate::config::ClientConfig;
use crate::controller::{Command, Dispatch, UiState};
use dioxus::prelude::*;

/// Handle shared with every component that can send commands.
#[derive(Clone, PartialEq)]
pub struct RecommenderController {
    pub state: Signal<UiState>,
    client: RecommendClient,
}

impl RecommenderController {
    pub fn new(state: Signal<UiState>, client: RecommendClient) -> Self {
        Self { state, client }
    }

    pub fn snapshot(&self) -> UiState {
        (self.state)()
    }

    /// Applies the command and, if it produced a request, runs it to completion.
    pub fn send(&self, command: Command) {
        let mut state = self.state;
        let Dispatch::Send(request) = state.with_mut(|state| state.dispatch(command)) else {
            return;
        };

        let client = self.client.clone();
        spawn(async move {
            let outcome = client.recommend(&request).await;
            state.with_mut(|state| state.complete(outcome));
        });
    }
}

#[component]
pub fn RecommenderShell() -> Element {
    let config = use_context::<ClientConfig>();
    let state = use_signal(UiState::default);
    let client = use_hook(|| RecommendClient::new(&config));
    let controller = RecommenderController::new(state, client);

    use_context_provider(|| controller.clone());

    let snapshot = state();
    let loading = snapshot.loader_visible();

    rsx! {
        div { class: "container",
            header { class: "page-header",
                h1 { class: "page-title",
                    Icon { kind: IconKind::Music, class: "w-8 h-8".to_string() }
                    "Song Recommender"
                }
                p { class: "page-subtitle", "Tell us a few songs you like and discover new ones" }
            }

            section { class: "input-section",
                h2 { "Your Songs" }
                SongInputs {}
                ModeSlider {}
                button {
                    class: "get-recommendations",
                    disabled: loading,
                    onclick: {
                        let controller = controller.clone();
                        move |_| controller.send(Command::Submit)
                    },
                    "Get Recommendations"
                }
            }

            if let Some(message) = snapshot.error.clone() {
                div { class: "error-message",
                    Icon { kind: IconKind::Alert, class: "w-5 h-5".to_string() }
                    p { "{message}" }
                }
            }

            if loading {
                div { class: "loader",
                    Icon { kind: IconKind::Loader, class: "w-8 h-8 spin".to_string() }
                }
            }

            ResultsPanels {}
        }
    }
}
