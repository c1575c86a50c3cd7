use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use munchi_shared::buildings::BuildingDirectory;
use munchi_shared::config::MapConfig;
use munchi_shared::popup::{PopupController, PopupId};
use munchi_shared::report::ReportDraft;

use crate::components::control_buttons::ControlButtons;
use crate::components::help_overlay::HelpOverlay;
use crate::components::map_key::MapKey;
use crate::components::map_view::MapView;
use crate::components::report_popup::ReportPopup;
use crate::components::search_popup::SearchPopup;

const LOGO_URL: &str = "https://github.com/mike-cautela/MunchiMaps/blob/main/Website/MunchiMaps%20Assets/MunchiMaps%20Logos/MunchiMapsCroppedLogo.png?raw=true";

/// Delay before a freshly displayed panel gets its "show" class.
const REVEAL_DELAY_MS: u32 = 10;

const REPORT_CONFIRMATION: &str = "Report submitted successfully!";

fn load_directory() -> BuildingDirectory {
    BuildingDirectory::campus().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Building list unavailable");
        BuildingDirectory::default()
    })
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

#[component]
pub fn CampusMap() -> Element {
    // Read-only inputs
    let directory = use_hook(load_directory);
    let map_config = use_hook(MapConfig::campus);

    // UI state
    let mut popups = use_signal(PopupController::new);
    let mut draft = use_signal(ReportDraft::default);

    let mut open_popup = move |id: PopupId| {
        if popups.write().open(id) {
            spawn(async move {
                TimeoutFuture::new(REVEAL_DELAY_MS).await;
                popups.write().reveal(id);
            });
        }
    };

    let mut close_all = move || popups.write().close_all();

    let submit_report = move |_: ()| {
        let result = {
            let mut form = draft.write();
            popups.write().submit_report(&mut form)
        };
        match result {
            Ok(report) => {
                tracing::info!(
                    title = %report.title,
                    issue_type = report.issue_type.value(),
                    description = %report.description,
                    "Issue report submitted"
                );
                alert(REPORT_CONFIRMATION);
            }
            Err(errors) => {
                tracing::debug!(%errors, "Report rejected");
            }
        }
    };

    let state = popups.read().clone();
    let buildings = directory.all().to_vec();

    rsx! {
        div {
            class: "app",
            tabindex: "-1",
            onkeydown: move |evt: Event<KeyboardData>| {
                if evt.key() == Key::Escape {
                    close_all();
                }
            },

            div { class: "logo-title",
                img { src: LOGO_URL, alt: "MunchiMaps" }
            }

            MapView { config: map_config }

            ControlButtons { on_open: move |id: PopupId| open_popup(id) }

            SearchPopup {
                visibility: state.visibility(PopupId::Search),
                query: state.search_query().to_string(),
                buildings: buildings.clone(),
                on_query: move |q: String| popups.write().set_search_query(&q),
                on_close: move |_| close_all(),
            }

            ReportPopup {
                visibility: state.visibility(PopupId::Report),
                draft: draft,
                errors: state.report_errors(),
                on_close: move |_| popups.write().close_report_only(),
                on_submit: submit_report,
            }

            HelpOverlay {
                visibility: state.visibility(PopupId::Help),
                on_close: move |_| close_all(),
            }

            MapKey {
                visibility: state.visibility(PopupId::MapKey),
                buildings: buildings,
                on_close: move |_| close_all(),
            }
        }
    }
}
