//! Sign-in / sign-up modal.

use leptos::prelude::*;

use crate::pages::auth_actions;
use crate::state::session::SessionState;
use crate::state::ui::{NoticeTone, UiState};
use crate::util::i18n::{Text, tr};

#[component]
pub fn AuthModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let lang = move || ui.with(|u| u.language);
    let busy = move || ui.with(|u| u.loading);

    let notice = move || {
        ui.with(|u| u.auth_notice.clone()).map(|notice| {
            let class = match notice.tone {
                NoticeTone::Error => "auth-modal__notice auth-modal__notice--error",
                NoticeTone::Success => "auth-modal__notice auth-modal__notice--success",
            };
            view! { <p class=class>{notice.text}</p> }
        })
    };

    view! {
        <Show when=move || ui.with(|u| u.show_auth_modal)>
            <div class="auth-modal">
                <div class="auth-modal__card">
                    <h3 class="auth-modal__title">{move || tr(lang(), Text::SignInTitle)}</h3>
                    <p class="auth-modal__subtitle">{move || tr(lang(), Text::SignInSubtitle)}</p>
                    <div class="auth-modal__fields">
                        <input
                            class="auth-modal__input"
                            type="email"
                            placeholder=move || tr(lang(), Text::EmailPlaceholder)
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-modal__input"
                            type="password"
                            placeholder=move || tr(lang(), Text::PasswordPlaceholder)
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    {notice}
                    <div class="auth-modal__actions">
                        <button
                            class="auth-modal__button auth-modal__button--primary"
                            disabled=busy
                            on:click=move |_| {
                                auth_actions::login(session, ui, email.get_untracked(), password.get_untracked());
                            }
                        >
                            {move || tr(lang(), Text::LoginButton)}
                        </button>
                        <button
                            class="auth-modal__button"
                            disabled=busy
                            on:click=move |_| {
                                auth_actions::signup(ui, email.get_untracked(), password.get_untracked());
                            }
                        >
                            {move || tr(lang(), Text::SignUpButton)}
                        </button>
                    </div>
                    <button class="auth-modal__cancel" on:click=move |_| ui.update(UiState::close_auth_modal)>
                        {move || tr(lang(), Text::CancelButton)}
                    </button>
                </div>
            </div>
        </Show>
    }
}
