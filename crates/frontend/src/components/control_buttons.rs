use dioxus::prelude::*;
use munchi_shared::popup::PopupId;

const ICON_BASE: &str = "https://raw.githubusercontent.com/mike-cautela/MunchiMaps/main/Website/MunchiMaps%20Assets";

/// The four fixed controls over the map. Each one asks for a panel to open.
#[component]
pub fn ControlButtons(on_open: EventHandler<PopupId>) -> Element {
    rsx! {
        button {
            class: "help-button",
            "aria-label": "Help",
            onclick: move |_| on_open.call(PopupId::Help),
            img {
                src: "{ICON_BASE}/MenuIcons/help-circle-grey.svg",
                alt: "Help",
                class: "help-button-img",
            }
        }

        button {
            class: "map-key-button",
            "aria-label": "Map Key",
            onclick: move |_| on_open.call(PopupId::MapKey),
            img {
                src: "{ICON_BASE}/CookieFavicon.png",
                alt: "Map Key",
                class: "map-key-button-img",
            }
        }

        div { id: "buttons-container",
            button {
                class: "button",
                "aria-label": "Search",
                onclick: move |_| on_open.call(PopupId::Search),
                img {
                    src: "{ICON_BASE}/MenuIcons/search-white.svg",
                    alt: "Search",
                    class: "button-img",
                }
            }
            button {
                class: "button",
                "aria-label": "Report",
                onclick: move |_| on_open.call(PopupId::Report),
                img {
                    src: "{ICON_BASE}/MenuIcons/alert-white.svg",
                    alt: "Report",
                    class: "button-img",
                }
            }
        }
    }
}
