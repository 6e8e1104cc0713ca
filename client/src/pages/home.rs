//! Landing page with a hint to open a zone.

use leptos::prelude::*;

/// Placeholder shown outside any zone.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Map editor"</h1>
            <p>"Open a zone at " <code>"/zone/{id}"</code> " to edit its layout."</p>
        </div>
    }
}
