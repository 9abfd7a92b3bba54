//! Download control with its busy state.

#[cfg(test)]
#[path = "download_button_test.rs"]
mod download_button_test;

use leptos::prelude::*;

pub const IDLE_LABEL: &str = "Download report";
pub const BUSY_LABEL: &str = "Generating report...";

/// Button text for the given loading flag.
#[must_use]
pub fn button_label(loading: bool) -> &'static str {
    if loading { BUSY_LABEL } else { IDLE_LABEL }
}

/// Primary action button. Disabled and relabelled while `loading` is true.
#[component]
pub fn DownloadButton(#[prop(into)] loading: Signal<bool>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class=move || if loading.get() { "btn btn--primary btn--busy" } else { "btn btn--primary" }
            disabled=move || loading.get()
            on:click=move |_| on_click.run(())
        >
            {move || button_label(loading.get())}
        </button>
    }
}
