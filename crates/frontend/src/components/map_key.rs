use dioxus::prelude::*;
use munchi_shared::models::Building;
use munchi_shared::popup::{PopupId, Visibility};

fn flag(available: bool) -> &'static str {
    if available {
        "\u{2713}"
    } else {
        "\u{2014}"
    }
}

/// Legend for the location marker plus vending availability per building.
#[component]
pub fn MapKey(visibility: Visibility, buildings: Vec<Building>, on_close: EventHandler<()>) -> Element {
    if !visibility.is_displayed() {
        return rsx! {};
    }
    let class = format!("map-key {}", visibility.css_class());

    rsx! {
        div {
            id: PopupId::MapKey.element_id(),
            class: "{class}",

            h2 { "Map Key" }

            div { class: "map-key-legend",
                span { class: "legend-icon",
                    div { class: "location-circle" }
                    div { class: "location-dot" }
                }
                span { "Your location" }
            }

            table { class: "map-key-table",
                thead {
                    tr {
                        th { "Building" }
                        th { "Drinks" }
                        th { "Food" }
                    }
                }
                tbody {
                    for b in buildings.iter() {
                        tr { key: "{b.name}",
                            title: b.amenities_label(),
                            td { "{b.name}" }
                            td { class: "flag", {flag(b.has_drink_vending)} }
                            td { class: "flag", {flag(b.has_food_vending)} }
                        }
                    }
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
