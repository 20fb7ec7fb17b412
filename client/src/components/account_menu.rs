//! Hover account menu.
//!
//! Opens on pointer enter and closes `HOVER_CLOSE_MS` after pointer leave.
//! The close generation lives in this component's own signal, so a timer
//! that fires after unmount finds a disposed signal and does nothing.

use leptos::prelude::*;

use crate::pages::chat_actions;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::hover::HoverMenu;
#[cfg(feature = "hydrate")]
use crate::util::hover::HOVER_CLOSE_MS;
use crate::util::i18n::{Text, tr};

#[component]
pub fn AccountMenu() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let menu = RwSignal::new(HoverMenu::default());
    let lang = move || ui.with(|u| u.language);

    let on_leave = move |_| {
        let Some(seq) = menu.try_update(HoverMenu::leave) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(HOVER_CLOSE_MS).await;
            menu.try_update(|m| {
                m.close_if_current(seq);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    };

    let signed_in_items = move || {
        let who = session
            .with(|s| s.email.clone())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| tr(lang(), Text::DefaultUser).to_owned());
        view! {
            <div class="account-menu__identity">
                <p>{who}</p>
            </div>
            <button
                class="account-menu__item account-menu__item--danger"
                on:click=move |_| {
                    menu.update(HoverMenu::close);
                    chat_actions::logout(chat, session, ui);
                }
            >
                "⎋ "
                {move || tr(lang(), Text::LogoutButton)}
            </button>
        }
    };

    let signed_out_items = move || {
        view! {
            <button
                class="account-menu__item"
                on:click=move |_| {
                    menu.update(HoverMenu::close);
                    ui.update(UiState::open_auth_modal);
                }
            >
                {move || tr(lang(), Text::LoginOrSignUp)}
            </button>
        }
    };

    view! {
        <div
            class="account-menu"
            on:mouseenter=move |_| menu.update(HoverMenu::enter)
            on:mouseleave=on_leave
        >
            <button class="app-header__icon-button account-menu__trigger">"👤"</button>
            <Show when=move || menu.with(|m| m.open)>
                <div class="account-menu__panel">
                    <Show
                        when=move || session.with(SessionState::is_authenticated)
                        fallback=signed_out_items
                    >
                        {signed_in_items}
                    </Show>
                </div>
            </Show>
        </div>
    }
}
