//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{editor::EditorPage, home::HomePage};
use crate::state::commands::CommandQueue;
use crate::state::editor::{ActiveZone, EditorState};
use crate::state::notices::NoticeState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor = RwSignal::new(EditorState::default());
    let ui = RwSignal::new(UiState::default());
    let notices = RwSignal::new(NoticeState::default());
    let commands = RwSignal::new(CommandQueue::default());
    let active_zone = ActiveZone(RwSignal::new(None));

    provide_context(editor);
    provide_context(ui);
    provide_context(notices);
    provide_context(commands);
    provide_context(active_zone);

    view! {
        <Stylesheet id="leptos" href="/pkg/map-editor.css"/>
        <Title text="Map Editor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("zone"), ParamSegment("id")) view=EditorPage/>
            </Routes>
        </Router>
    }
}
