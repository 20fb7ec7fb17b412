//! Top bar: logo, title, language toggle, account menu.

use leptos::prelude::*;

use crate::components::account_menu::AccountMenu;
use crate::state::ui::UiState;
use crate::util::i18n::{Text, tr};

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let lang = move || ui.with(|u| u.language);

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <img class="app-header__logo" src="/assets/icon.png" alt="Logo"/>
                <h1 class="app-header__title">{move || tr(lang(), Text::AppTitle)}</h1>
            </div>
            <div class="app-header__actions">
                <button
                    class="app-header__icon-button"
                    title=move || lang().toggled().code()
                    on:click=move |_| ui.update(UiState::toggle_language)
                >
                    "🌐"
                </button>
                <AccountMenu/>
            </div>
        </header>
    }
}
