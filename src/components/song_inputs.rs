use crate::api::{MAX_YEAR, MIN_YEAR};
use crate::components::{Icon, IconKind, RecommenderController};
use crate::controller::{Command, SongRow};
use dioxus::prelude::*;

fn field_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{base} input-invalid")
    } else {
        base.to_string()
    }
}

#[component]
pub fn SongInputs() -> Element {
    let controller = use_context::<RecommenderController>();
    let rows = controller.snapshot().songs.rows().to_vec();

    rsx! {
        div { class: "song-inputs",
            for row in rows {
                SongInputRow { key: "{row.id}", row: row.clone() }
            }
        }
        div { class: "song-actions",
            button {
                class: "add-song",
                onclick: {
                    let controller = controller.clone();
                    move |_| controller.send(Command::AddRow)
                },
                Icon { kind: IconKind::Plus, class: "w-4 h-4".to_string() }
                "Add Song"
            }
            button {
                class: "clear-songs",
                onclick: {
                    let controller = controller.clone();
                    move |_| controller.send(Command::ClearRows)
                },
                Icon { kind: IconKind::Trash, class: "w-4 h-4".to_string() }
                "Clear"
            }
        }
    }
}

#[component]
fn SongInputRow(row: SongRow) -> Element {
    let controller = use_context::<RecommenderController>();
    let id = row.id;
    let name_class = field_class("song-name", row.name_invalid);
    let year_class = field_class("song-year", row.year_invalid);

    rsx! {
        div { class: "song-input-row",
            input {
                r#type: "text",
                class: "{name_class}",
                placeholder: "Song Name",
                value: "{row.name}",
                oninput: {
                    let controller = controller.clone();
                    move |e: FormEvent| controller.send(Command::EditName(id, e.value()))
                },
            }
            input {
                r#type: "number",
                class: "{year_class}",
                placeholder: "Year",
                min: "{MIN_YEAR}",
                max: "{MAX_YEAR}",
                value: "{row.year}",
                oninput: {
                    let controller = controller.clone();
                    move |e: FormEvent| controller.send(Command::EditYear(id, e.value()))
                },
            }
            button {
                class: "remove-song",
                title: "Remove song",
                onclick: {
                    let controller = controller.clone();
                    move |_| controller.send(Command::RemoveRow(id))
                },
                Icon { kind: IconKind::Close, class: "w-4 h-4".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_highlight_class() {
        assert_eq!(field_class("song-name", true), "song-name input-invalid");
        assert_eq!(field_class("song-year", false), "song-year");
    }
}
