use crate::api::Mode;
use crate::components::RecommenderController;
use crate::controller::Command;
use dioxus::prelude::*;

fn option_class(active: bool) -> &'static str {
    if active {
        "slider-option active"
    } else {
        "slider-option"
    }
}

#[component]
pub fn ModeSlider() -> Element {
    let controller = use_context::<RecommenderController>();
    let selector = controller.snapshot().selector;
    let offset = selector.indicator_offset();

    rsx! {
        div { class: "recommendation-slider",
            div { class: "slider-track",
                div { class: "slider-highlight", style: "left: {offset}%;" }
                for mode in Mode::ALL {
                    button {
                        key: "{mode}",
                        class: option_class(selector.is_active(mode)),
                        "data-value": mode.as_str(),
                        onclick: {
                            let controller = controller.clone();
                            move |_| controller.send(Command::SelectMode(mode))
                        },
                        {mode.label()}
                    }
                }
            }
            p { class: "recommendation-description", {selector.description()} }
        }
    }
}
