use dioxus::prelude::*;

/// Every glyph the page draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Music,
    Plus,
    Close,
    Alert,
    Loader,
    Trash,
}

#[component]
pub fn Icon(kind: IconKind, class: String) -> Element {
    let glyph = match kind {
        IconKind::Music => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        IconKind::Plus => rsx! {
            path { d: "M12 5v14M5 12h14" }
        },
        IconKind::Close => rsx! {
            path { d: "M18 6 6 18M6 6l12 12" }
        },
        IconKind::Alert => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 8v4M12 16h.01" }
        },
        IconKind::Loader => rsx! {
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        },
        IconKind::Trash => rsx! {
            path { d: "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            {glyph}
        }
    }
}
