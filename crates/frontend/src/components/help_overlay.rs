use dioxus::prelude::*;
use munchi_shared::popup::{PopupId, Visibility};

#[component]
pub fn HelpOverlay(visibility: Visibility, on_close: EventHandler<()>) -> Element {
    if !visibility.is_displayed() {
        return rsx! {};
    }
    let class = format!("help-overlay {}", visibility.css_class());

    rsx! {
        div {
            id: PopupId::Help.element_id(),
            class: "{class}",

            h2 { "Help" }

            div { class: "help-info-section",
                h3 { "Finding snacks" }
                p { "The map opens on campus and asks for your location. Once it is found, a blue dot marks where you are." }
            }

            div { class: "help-info-section",
                h3 { "Search" }
                p { "Start typing a building name to list every building whose name begins with what you typed." }
            }

            div { class: "help-info-section",
                h3 { "Map Key" }
                p { "The cookie button lists every building and whether it has drink or food vending machines." }
            }

            div { class: "help-info-section",
                h3 { "Report an Issue" }
                p { "Empty machine, wrong location, or something broken in the app? Use the alert button to tell us." }
            }

            div { class: "shortcut-section",
                div { class: "shortcut-row",
                    span { class: "shortcut-keys", kbd { "Esc" } }
                    span { "Close any open panel" }
                }
            }

            button {
                class: "close-help",
                onclick: move |_| on_close.call(()),
                "Close"
            }
        }
    }
}
