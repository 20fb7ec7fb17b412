//! The single chat screen: avatar backdrop, header, log, composer, and the
//! overlays that sit above them.

use leptos::prelude::*;

use crate::components::ai_warning::AiWarningToast;
use crate::components::auth_modal::AuthModal;
use crate::components::avatar_scene::AvatarScene;
use crate::components::chat_log::ChatLog;
use crate::components::composer::Composer;
use crate::components::header::Header;
use crate::state::ui::UiState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div
            class="chat-page"
            lang=move || ui.with(|u| u.language.code())
            dir=move || ui.with(|u| u.language.dir())
        >
            <AvatarScene/>
            <div class="chat-page__column">
                <Header/>
                <ChatLog/>
                <Composer/>
            </div>
            <AuthModal/>
            <AiWarningToast/>
        </div>
    }
}
