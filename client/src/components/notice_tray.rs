//! Non-blocking notification tray.

use leptos::prelude::*;

use crate::state::notices::{NoticeLevel, NoticeState};

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice notice--info",
        NoticeLevel::Warning => "notice notice--warning",
        NoticeLevel::Error => "notice notice--error",
    }
}

/// Floating stack of queued notices with manual dismissal.
#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray">
            {move || {
                notices
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=level_class(notice.level)>
                                <span class="notice__message">{notice.message.clone()}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| notices.update(|n| n.dismiss(id))
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
