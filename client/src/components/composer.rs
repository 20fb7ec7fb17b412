//! Username input and send button.
//!
//! Enter sends, Shift+Enter inserts a newline. Focusing while signed out
//! opens the auth modal instead.

use leptos::prelude::*;

use crate::pages::chat_actions;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::i18n::{Text, tr};

#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let input = RwSignal::new(String::new());
    let lang = move || ui.with(|u| u.language);

    let submit = move || chat_actions::submit_analysis(chat, session, ui, input);
    let locked = move || ui.with(|u| u.loading) || session.with(SessionState::limit_reached);

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    let on_focus = move |_| {
        if !session.with_untracked(SessionState::is_authenticated) {
            ui.update(UiState::open_auth_modal);
        }
    };

    view! {
        <div class="composer">
            <div class="composer__inner">
                <textarea
                    class="composer__input"
                    rows="1"
                    placeholder=move || tr(lang(), Text::ComposerPlaceholder)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_key_down
                    on:focus=on_focus
                    disabled=locked
                ></textarea>
                <button
                    class="composer__send"
                    disabled=move || locked() || input.with(|text| text.trim().is_empty())
                    on:click=move |_| submit()
                >
                    "➤"
                </button>
            </div>
        </div>
    }
}
