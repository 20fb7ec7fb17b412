//! Transient "AI-generated" disclaimer shown when an analysis starts.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::i18n::{Text, tr};

#[component]
pub fn AiWarningToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|u| u.show_ai_warning)>
            <div class="ai-warning" role="status">
                {move || tr(ui.with(|u| u.language), Text::AiWarning)}
            </div>
        </Show>
    }
}
