mod components;
mod leaflet;
mod pages;

use dioxus::prelude::*;

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Title { "MunchiMaps" }
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        pages::campus::CampusMap {}
    }
}

fn main() {
    launch(App);
}
