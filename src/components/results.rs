use crate::api::Method;
use crate::components::RecommenderController;
use crate::controller::{ResultList, ResultRow, NO_RESULTS_TEXT};
use dioxus::prelude::*;

#[component]
pub fn ResultsPanels() -> Element {
    let controller = use_context::<RecommenderController>();
    let state = controller.snapshot();
    let panels = state.panels();
    let container_class = if state.results_container_visible() {
        "recommendations"
    } else {
        "recommendations hidden"
    };

    rsx! {
        div { class: "{container_class}",
            ResultPanel {
                title: "Quick Recommendations".to_string(),
                list: state.results.list(Method::Quick).clone(),
                visible: panels.shows(Method::Quick),
            }
            ResultPanel {
                title: "Advanced Recommendations".to_string(),
                list: state.results.list(Method::Advanced).clone(),
                visible: panels.shows(Method::Advanced),
            }
        }
    }
}

#[component]
fn ResultPanel(title: String, list: ResultList, visible: bool) -> Element {
    let panel_class = if visible {
        "recommendation-panel"
    } else {
        "recommendation-panel hidden"
    };

    rsx! {
        section { class: "{panel_class}",
            h2 { "{title}" }
            if let Some(notice) = list.notice.clone() {
                p { class: "recommendation-notice", "{notice}" }
            }
            ul { class: "recommendation-list",
                for (index, row) in list.rows.iter().cloned().enumerate() {
                    ResultRowView { key: "{index}", row }
                }
            }
        }
    }
}

#[component]
fn ResultRowView(row: ResultRow) -> Element {
    match row {
        ResultRow::Error(message) => rsx! {
            li { class: "recommendation-error", "{message}" }
        },
        ResultRow::NoResults => rsx! {
            li { class: "no-results", "{NO_RESULTS_TEXT}" }
        },
        ResultRow::Song(song) => rsx! {
            li { class: "recommendation-item",
                div { class: "song-title", "{song.title}" }
                div { class: "song-artist", "{song.artists}" }
                div { class: "song-year", "{song.year}" }
            }
        },
    }
}
