use dioxus::prelude::*;
use munchi_shared::models::Building;
use munchi_shared::popup::{PopupId, Visibility};
use munchi_shared::search::visible_results;

#[component]
pub fn SearchPopup(
    visibility: Visibility,
    query: String,
    buildings: Vec<Building>,
    on_query: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let results = visible_results(&query, &buildings);

    rsx! {
        div {
            id: PopupId::Search.element_id(),
            class: visibility.css_class(),
            style: visibility.display_style(),
            div { class: "search-bar",
                span {
                    class: "close",
                    "aria-label": "Close search",
                    onclick: move |_| on_close.call(()),
                    "\u{00d7}"
                }
                input {
                    r#type: "search",
                    id: "searchInput",
                    placeholder: "Search for a building...",
                    value: "{query}",
                    oninput: move |evt: Event<FormData>| on_query.call(evt.value()),
                }
                ul { id: "searchResult", class: "result",
                    for building in results {
                        li { key: "{building.name}", "{building.name}" }
                    }
                }
            }
        }
    }
}
