//! Scrollable conversation log with the empty-state prompt.
//!
//! Follows new content while `UiState::auto_scroll` is set; scrolling away
//! from the bottom clears it, scrolling back restores it.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Role};
use crate::state::ui::UiState;
use crate::util::i18n::{Text, tr};
#[cfg(feature = "hydrate")]
use crate::util::scroll::{element_at_bottom, scroll_to_bottom};

#[component]
pub fn ChatLog() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let log_ref = NodeRef::<leptos::html::Div>::new();
    let lang = move || ui.with(|u| u.language);

    Effect::new(move || {
        // Re-run on every content change and on the loading indicator.
        chat.track();
        ui.track();

        #[cfg(feature = "hydrate")]
        {
            if ui.with_untracked(|u| u.auto_scroll) {
                if let Some(el) = log_ref.get_untracked() {
                    scroll_to_bottom(&el);
                }
            }
        }
    });

    let on_scroll = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = log_ref.get_untracked() {
                let at_bottom = element_at_bottom(&el);
                if ui.with_untracked(|u| u.auto_scroll) != at_bottom {
                    ui.update(|u| u.auto_scroll = at_bottom);
                }
            }
        }
    };

    let rows = move || {
        chat.with(|c| c.entries.iter().enumerate().map(|(i, e)| (i, e.role)).collect::<Vec<_>>())
    };

    let empty_state = move || {
        view! {
            <div class="chat-empty">
                <span class="chat-empty__question">{move || tr(lang(), Text::EmptyQuestion)}</span>
                <h2 class="chat-empty__headline">{move || tr(lang(), Text::EmptyHeadline)}</h2>
                <p class="chat-empty__hint">{move || tr(lang(), Text::EmptyHint)}</p>
            </div>
        }
    };

    view! {
        <div class="chat-log" node_ref=log_ref on:scroll=on_scroll>
            <div class="chat-log__inner">
                <Show when=move || chat.with(|c| !c.entries.is_empty()) fallback=empty_state>
                    <div class="chat-log__entries">
                        <For
                            each=rows
                            key=|(i, _)| *i
                            children=move |(i, role)| {
                                let content = move || {
                                    chat.with(|c| c.entries.get(i).map(|e| e.content.clone()).unwrap_or_default())
                                };
                                let side = match role {
                                    Role::User => "chat-row chat-row--user",
                                    Role::Assistant => "chat-row chat-row--assistant",
                                };
                                let bubble = match role {
                                    Role::User => "chat-bubble chat-bubble--user",
                                    Role::Assistant => "chat-bubble chat-bubble--assistant",
                                };
                                view! {
                                    <div class=side dir=move || lang().dir()>
                                        <div class=bubble>{content}</div>
                                    </div>
                                }
                            }
                        />
                        <Show when=move || ui.with(|u| u.loading)>
                            <div class="chat-typing">
                                <span class="chat-typing__dot"></span>
                                <span class="chat-typing__dot"></span>
                                <span class="chat-typing__dot"></span>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}
