use dioxus::prelude::*;
use munchi_shared::models::IssueType;
use munchi_shared::popup::{PopupId, Visibility};
use munchi_shared::report::{ReportDraft, ReportErrors};

#[component]
fn FieldError(message: Option<&'static str>) -> Element {
    match message {
        Some(msg) => rsx! {
            span { class: "field-error", "role": "alert", "{msg}" }
        },
        None => rsx! {},
    }
}

#[component]
pub fn ReportPopup(
    visibility: Visibility,
    draft: Signal<ReportDraft>,
    errors: Option<ReportErrors>,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let current = draft.read().clone();
    let selected_type = current.issue_type.map(|t| t.value()).unwrap_or("");
    let errors = errors.unwrap_or_default();
    let container_class = format!("popup-container {}", visibility.css_class());

    rsx! {
        div {
            id: PopupId::Report.element_id(),
            class: "{container_class}",
            style: visibility.display_style(),
            div { class: "popup",
                div { class: "popup-header",
                    span {
                        class: "popup-close",
                        "aria-label": "Close report",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                    h2 { "Report Issue" }
                }
                form {
                    id: "reportForm",
                    class: "popup-form",
                    onsubmit: move |evt: Event<FormData>| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    div { class: "form-group",
                        label { r#for: "reportTitle", "Title:" }
                        input {
                            r#type: "text",
                            id: "reportTitle",
                            class: "form-control",
                            required: true,
                            value: "{current.title}",
                            oninput: move |evt: Event<FormData>| {
                                draft.write().title = evt.value();
                            },
                        }
                        FieldError { message: errors.title_message() }
                    }
                    div { class: "form-group",
                        label { r#for: "reportType", "Type of Issue:" }
                        select {
                            id: "reportType",
                            class: "form-control",
                            required: true,
                            value: selected_type,
                            onchange: move |evt: Event<FormData>| {
                                draft.write().issue_type = IssueType::from_value(&evt.value());
                            },
                            option { value: "", "-- Select Type --" }
                            for t in IssueType::ALL {
                                option {
                                    value: t.value(),
                                    selected: current.issue_type == Some(t),
                                    "{t}"
                                }
                            }
                        }
                        FieldError { message: errors.issue_type_message() }
                    }
                    div { class: "form-group",
                        label { r#for: "reportDescription", "Description:" }
                        textarea {
                            id: "reportDescription",
                            class: "form-control",
                            required: true,
                            value: "{current.description}",
                            oninput: move |evt: Event<FormData>| {
                                draft.write().description = evt.value();
                            },
                        }
                        FieldError { message: errors.description_message() }
                    }
                    button { r#type: "submit", class: "btn-submit", "Submit" }
                }
            }
        }
    }
}
