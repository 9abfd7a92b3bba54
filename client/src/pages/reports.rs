//! Usage-report page: sign-in gate, download action, and results table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It reads `AuthState` to decide what to show and
//! drives one report download at a time, folding progress into
//! `ReportsState` through [`download_report`].

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use reports::{FetchError, ReportRow};

use crate::components::download_button::DownloadButton;
use crate::components::report_table::ReportTable;
use crate::config::ClientConfig;
use crate::identity::{self, IdentitySession, MIN_TOKEN_VALIDITY_SECS};
use crate::net::api::ReportsApi;
use crate::state::auth::AuthState;
use crate::state::reports::{ReportsEvent, ReportsState};

/// Which of the three page layouts applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    /// The identity provider has not answered yet.
    Initializing,
    /// Anonymous: only the login control is shown.
    LoginRequired,
    /// Signed in: download control, errors, and results.
    Ready,
}

impl PageView {
    #[must_use]
    pub fn for_auth(auth: &AuthState) -> Self {
        if !auth.initialized {
            Self::Initializing
        } else if auth.authenticated() {
            Self::Ready
        } else {
            Self::LoginRequired
        }
    }
}

/// Run one download: refuse without a token, otherwise refresh, fetch, and
/// report the outcome through `emit`.
pub async fn download_report<S, A>(session: &S, api: &A, mut emit: impl FnMut(ReportsEvent))
where
    S: IdentitySession,
    A: ReportsApi,
{
    if session.token().is_none() {
        emit(ReportsEvent::Rejected(FetchError::Unauthorized.user_message()));
        return;
    }

    emit(ReportsEvent::Started);
    match fetch_with_fresh_token(session, api).await {
        Ok(rows) => emit(ReportsEvent::Succeeded(rows)),
        Err(e) => emit(ReportsEvent::Failed(e.user_message())),
    }
}

async fn fetch_with_fresh_token<S, A>(session: &S, api: &A) -> Result<Vec<ReportRow>, FetchError>
where
    S: IdentitySession,
    A: ReportsApi,
{
    session.update_token(MIN_TOKEN_VALIDITY_SECS).await?;
    let token = session.token().ok_or(FetchError::Unauthorized)?;
    api.fetch_reports(&token).await
}

/// Report page. Shows a login control until the user is signed in.
#[component]
pub fn ReportPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let reports = expect_context::<RwSignal<ReportsState>>();
    let config = expect_context::<ClientConfig>();

    let page_view = Memo::new(move |_| PageView::for_auth(&auth.get()));
    let error = Signal::derive(move || reports.with(|s| s.error.clone()));

    let on_login = {
        let config = config.clone();
        Callback::new(move |()| identity::login(&config.identity))
    };

    let on_logout = {
        let config = config.clone();
        Callback::new(move |()| identity::logout(&config.identity, auth))
    };

    let on_download = Callback::new(move |()| {
        if reports.with_untracked(|s| s.loading) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let session = identity::BrowserSession::new(config.identity.clone(), auth);
            let api = crate::net::api::HttpReportsApi::new(&config.api_url);
            leptos::task::spawn_local(async move {
                download_report(&session, &api, move |event| reports.update(|s| s.apply(event))).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    });

    view! {
        {move || match page_view.get() {
            PageView::Initializing => {
                view! {
                    <div class="report-page report-page--centered">
                        <p>"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
            PageView::LoginRequired => view! { <LoginPrompt on_login=on_login error=error/> }.into_any(),
            PageView::Ready => {
                view! {
                    <ReportPanel reports=reports error=error on_download=on_download on_logout=on_logout/>
                }
                    .into_any()
            }
        }}
    }
}

/// Anonymous layout: the login button, plus the last download error when a
/// failed refresh ended the session.
#[component]
pub fn LoginPrompt(on_login: Callback<()>, #[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="report-page report-page--centered">
            <button class="btn btn--primary" on:click=move |_| on_login.run(())>
                "Log in"
            </button>
            <ErrorNotice error=error/>
        </div>
    }
}

/// Signed-in layout: logout, download action, error box, and results.
#[component]
fn ReportPanel(
    reports: RwSignal<ReportsState>,
    error: Signal<Option<String>>,
    on_download: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let loading = Signal::derive(move || reports.with(|s| s.loading));

    view! {
        <div class="report-page">
            <header class="report-page__header">
                <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                    "Log out"
                </button>
            </header>
            <main class="report-page__main">
                <section class="report-card">
                    <h1 class="report-card__title">"Usage Reports"</h1>
                    <div class="report-card__actions">
                        <DownloadButton loading=loading on_click=on_download/>
                    </div>
                    <ErrorNotice error=error/>
                    {move || reports.with(|s| s.rows.clone()).map(|rows| view! { <ReportTable rows=rows/> })}
                </section>
            </main>
        </div>
    }
}

/// Alert box for the current error message; renders nothing without one.
#[component]
fn ErrorNotice(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="report-card__error" role="alert">
                    {message}
                </div>
            }
        })
    }
}
