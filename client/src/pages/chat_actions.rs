//! Chat actions: submitting an analysis and logging out.
//!
//! Each action does its synchronous state changes immediately, then (in the
//! browser) spawns the async tail. Every async step re-checks the reveal
//! generation it started with, so a newer exchange or a logout silently
//! retires older work.

#[cfg(test)]
#[path = "chat_actions_test.rs"]
mod chat_actions_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::{SessionState, Submission};
use crate::state::ui::UiState;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::failure::AnalysisFailure;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::i18n::Language;

#[cfg(feature = "hydrate")]
use crate::net::stream::{AnalysisReply, ChunkReader, StreamDecoder};
#[cfg(feature = "hydrate")]
use crate::state::chat::RevealTicket;
#[cfg(feature = "hydrate")]
use crate::state::ui::AI_WARNING_MS;
#[cfg(feature = "hydrate")]
use crate::util::i18n::{Text, tr};
#[cfg(feature = "hydrate")]
use crate::util::reveal::{REVEAL_STEP_MS, char_prefixes};
#[cfg(feature = "hydrate")]
use gloo_timers::future::TimeoutFuture;

/// Chat-log line for a failed analysis.
#[cfg(any(test, feature = "hydrate"))]
fn analysis_failure_message(err: &ApiError, lang: Language) -> String {
    AnalysisFailure::classify(&err.to_string()).message(lang)
}

/// How a reveal ended when it did not fail.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealEnd {
    Completed,
    Superseded,
}

/// Submit the composer's text as a username to analyze.
///
/// Opens the auth modal when signed out; does nothing when the daily limit is
/// reached or the input is blank.
pub(crate) fn submit_analysis(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
    input: RwSignal<String>,
) {
    if ui.with_untracked(|u| u.loading) {
        return;
    }
    let submission = session.with_untracked(|s| input.with_untracked(|text| s.check_submission(text)));
    let username = match submission {
        Submission::NeedsAuth => {
            ui.update(UiState::open_auth_modal);
            return;
        }
        Submission::LimitReached | Submission::Empty => return,
        Submission::Ready(username) => username,
    };
    let Some(token) = session.with_untracked(|s| s.token.clone()) else {
        return;
    };
    let lang = ui.with_untracked(|u| u.language);

    input.set(String::new());
    ui.update(|u| {
        u.auto_scroll = true;
        u.loading = true;
    });
    let Some(generation) = chat.try_update(|c| c.begin_exchange(username.clone())) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        run_analysis(chat, session, ui, generation, &token, &username, lang).await;
        // A logout already cleared the flag and may have been followed by a new exchange.
        if chat.try_with_untracked(|c| c.is_current(generation)) == Some(true) {
            ui.update(|u| u.loading = false);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (generation, token, lang);
        ui.update(|u| u.loading = false);
    }
}

/// Drop the session and reveal the farewell line.
pub(crate) fn logout(chat: RwSignal<ChatState>, session: RwSignal<SessionState>, ui: RwSignal<UiState>) {
    let lang = ui.with_untracked(|u| u.language);
    session.update(SessionState::logout);
    ui.update(|u| u.loading = false);
    let ticket = chat
        .try_update(|c| {
            let generation = c.cancel();
            c.begin_reveal(generation)
        })
        .flatten();
    let Some(ticket) = ticket else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if reveal_text(chat, ticket, tr(lang, Text::Farewell)).await == RevealEnd::Completed {
            chat.update(|c| {
                c.finish_reveal(ticket);
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, lang);
    }
}

#[cfg(feature = "hydrate")]
async fn run_analysis(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
    generation: u64,
    token: &str,
    username: &str,
    lang: Language,
) {
    let reply = crate::net::api::fetch_analyze(token, username, lang).await;
    if chat.try_with_untracked(|c| c.is_current(generation)) != Some(true) {
        return;
    }
    let reply = match reply {
        Ok(reply) => reply,
        Err(err) => {
            leptos::logging::warn!("analysis request failed: {err}");
            chat.update(|c| {
                c.push_assistant(generation, analysis_failure_message(&err, lang));
            });
            return;
        }
    };

    show_ai_warning(ui);
    let Some(ticket) = chat.try_update(|c| c.begin_reveal(generation)).flatten() else {
        return;
    };
    let outcome = match reply {
        AnalysisReply::Whole(text) => Ok(reveal_text(chat, ticket, &text).await),
        AnalysisReply::Chunked(reader) => reveal_chunks(chat, ticket, reader).await,
    };
    match outcome {
        Ok(RevealEnd::Completed) => {
            if chat.try_update(|c| c.finish_reveal(ticket)) == Some(true) {
                session.update(SessionState::record_analysis);
            }
        }
        Ok(RevealEnd::Superseded) => {}
        Err(err) => {
            leptos::logging::warn!("analysis stream failed: {err}");
            chat.update(|c| {
                c.fail_reveal(ticket, analysis_failure_message(&err, lang));
            });
        }
    }
}

#[cfg(feature = "hydrate")]
fn show_ai_warning(ui: RwSignal<UiState>) {
    let Some(seq) = ui.try_update(UiState::raise_ai_warning) else {
        return;
    };
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(AI_WARNING_MS).await;
        ui.update(|u| u.hide_ai_warning_if(seq));
    });
}

/// Reveal `text` one character per step into the ticket's entry.
#[cfg(feature = "hydrate")]
async fn reveal_text(chat: RwSignal<ChatState>, ticket: RevealTicket, text: &str) -> RevealEnd {
    for prefix in char_prefixes(text) {
        TimeoutFuture::new(REVEAL_STEP_MS).await;
        if chat.try_update(|c| c.apply_reveal(ticket, prefix)) != Some(true) {
            return RevealEnd::Superseded;
        }
    }
    RevealEnd::Completed
}

/// Reveal a streamed body chunk by chunk, in arrival order.
#[cfg(feature = "hydrate")]
async fn reveal_chunks(
    chat: RwSignal<ChatState>,
    ticket: RevealTicket,
    mut reader: ChunkReader,
) -> Result<RevealEnd, ApiError> {
    let mut decoder = StreamDecoder::default();
    let mut shown = String::new();
    loop {
        let chunk = reader.next_chunk().await?;
        let done = chunk.is_none();
        match chunk {
            Some(bytes) => shown.push_str(&decoder.push(&bytes)),
            None => shown.push_str(&decoder.finish()),
        }
        if chat.try_update(|c| c.apply_reveal(ticket, &shown)) != Some(true) {
            reader.cancel();
            return Ok(RevealEnd::Superseded);
        }
        if done {
            return Ok(RevealEnd::Completed);
        }
    }
}
