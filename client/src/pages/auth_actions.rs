//! Auth modal actions: login and signup.
//!
//! Signup validates locally before any request. Login collapses every failure
//! into one localized message and only logs the detail.

#[cfg(test)]
#[path = "auth_actions_test.rs"]
mod auth_actions_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::{AuthNotice, UiState};
use crate::util::i18n::Language;
use crate::util::validation::validate_signup;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::failure::SignupFailure;

#[cfg(feature = "hydrate")]
use crate::net::{api, types::Credentials};
#[cfg(feature = "hydrate")]
use crate::state::ui::SIGNUP_NOTICE_MS;
#[cfg(feature = "hydrate")]
use crate::util::i18n::{Text, tr};

/// Notice for input that fails local validation, if any.
fn validation_notice(email: &str, password: &str, lang: Language) -> Option<AuthNotice> {
    validate_signup(email, password).err().map(|invalid| AuthNotice::error(invalid.message(lang)))
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_failure_message(err: &ApiError, lang: Language) -> String {
    SignupFailure::classify(err.status(), &err.to_string()).message(lang)
}

pub(crate) fn login(session: RwSignal<SessionState>, ui: RwSignal<UiState>, email: String, password: String) {
    if ui.with_untracked(|u| u.loading) {
        return;
    }
    let lang = ui.with_untracked(|u| u.language);
    ui.update(|u| {
        u.loading = true;
        u.clear_notice();
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let credentials = Credentials { email: email.clone(), password };
        let token = match api::login(&credentials).await {
            Ok(resp) => match resp.token.filter(|t| !t.is_empty()) {
                Some(token) => Some((token, resp.daily_count)),
                None => {
                    leptos::logging::warn!("login response carried no token");
                    None
                }
            },
            Err(err) => {
                leptos::logging::warn!("login failed: {err}");
                None
            }
        };
        match token {
            Some((token, daily_count)) => {
                session.update(|s| s.login(token, daily_count, email));
                ui.update(UiState::close_auth_modal);
            }
            None => ui.update(|u| {
                u.set_notice(AuthNotice::error(tr(lang, Text::LoginFailed)));
            }),
        }
        ui.update(|u| u.loading = false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, lang, email, password);
        ui.update(|u| u.loading = false);
    }
}

pub(crate) fn signup(ui: RwSignal<UiState>, email: String, password: String) {
    if ui.with_untracked(|u| u.loading) {
        return;
    }
    let lang = ui.with_untracked(|u| u.language);
    if let Some(notice) = validation_notice(&email, &password, lang) {
        ui.update(|u| {
            u.set_notice(notice);
        });
        return;
    }
    ui.update(|u| {
        u.loading = true;
        u.clear_notice();
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api::signup(&Credentials { email, password }, lang).await;
        ui.update(|u| u.loading = false);
        match result {
            Ok(()) => {
                let notice = AuthNotice::success(tr(lang, Text::SignupSucceeded));
                let Some(seq) = ui.try_update(|u| u.set_notice(notice)) else {
                    return;
                };
                gloo_timers::future::TimeoutFuture::new(SIGNUP_NOTICE_MS).await;
                ui.update(|u| u.clear_notice_if(seq));
            }
            Err(err) => {
                leptos::logging::warn!("signup failed: {err}");
                ui.update(|u| {
                    u.set_notice(AuthNotice::error(signup_failure_message(&err, lang)));
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        ui.update(|u| u.loading = false);
    }
}
