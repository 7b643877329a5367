//! Vault HTTP routes
//!
//! Handlers for the vault page, the unlock form and the JSON API

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{AppState, SharedState};
use crate::catalog::{self, Resource};
use crate::filter::{CategoryFilter, FilteredView};
use crate::gate::{CookieStore, GateState, UnlockSource, VaultSession};
use crate::interstitial::{self, Activation, Interstitial};
use crate::leads::{LeadError, LeadForm};
use crate::page::{render_vault_page, GateForm, Links, PageContext};

/// Query parameters understood by the vault page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub user: Option<String>,
    pub q: Option<String>,
    pub category: Option<String>,
    pub resource: Option<String>,
}

impl PageQuery {
    /// Share-link name worth carrying through links
    fn share_name(&self) -> Option<&str> {
        self.user.as_deref().filter(|name| !name.trim().is_empty())
    }

    fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    fn category(&self) -> CategoryFilter {
        CategoryFilter::from_param(self.category.as_deref())
    }

    fn links(&self) -> Links<'_> {
        Links {
            user: self.share_name(),
            query: self.query(),
            category: self.category(),
        }
    }
}

fn render_page(
    state: &AppState,
    gate: &GateState,
    params: &PageQuery,
    interstitial: Interstitial<'static>,
    gate_form: GateForm,
) -> String {
    let view = FilteredView::new(catalog::all(), params.query(), params.category());
    render_vault_page(&PageContext {
        site: &state.config.site,
        gate,
        share_name: params.share_name(),
        view: &view,
        interstitial,
        gate_form,
    })
}

/// Attach the staged unlock cookie, if any
fn with_cookie(mut response: Response, store: &CookieStore) -> Response {
    if let Some(cookie) = store.set_cookie() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

fn failure_status(error: &LeadError) -> StatusCode {
    match error {
        LeadError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LeadError::SubmissionFailed => StatusCode::BAD_GATEWAY,
    }
}

/// Vault page
pub async fn index(
    State(state): State<SharedState>,
    Query(params): Query<PageQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let store = CookieStore::from_headers(state.cookie.clone(), &headers);
    let session = VaultSession::mount(params.user.as_deref(), store);
    let interstitial = Interstitial::from_param(params.resource.as_deref());

    Html(render_page(&state, session.state(), &params, interstitial, GateForm::default()))
}

/// POST /unlock body: the overlay fields plus the view to return to
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UnlockForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub user: Option<String>,
    pub q: Option<String>,
    pub category: Option<String>,
}

/// POST /unlock
pub async fn unlock(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<UnlockForm>,
) -> Response {
    let params = PageQuery {
        user: form.user,
        q: form.q,
        category: form.category,
        resource: None,
    };
    let lead = LeadForm::new(form.name, form.email, form.company);

    let store = CookieStore::from_headers(state.cookie.clone(), &headers);
    let mut session = VaultSession::mount(None, store);
    let outcome = session.submit_lead(&state.adapter, &lead).await.map(|_| ());

    match outcome {
        Ok(()) => {
            // The name rides along as a share-link parameter, so the next view
            // stays unlocked even if the browser drops the cookie
            let name = session.state().name().map(str::to_string);
            let links = Links {
                user: name.as_deref(),
                ..params.links()
            };
            let location = links.current();
            with_cookie(Redirect::to(&location).into_response(), session.store())
        }
        Err(e) => {
            debug!(error = %e, "Unlock rejected");
            let html = render_page(
                &state,
                session.state(),
                &params,
                Interstitial::Closed,
                GateForm::with_error(lead, e.to_string()),
            );
            (failure_status(&e), Html(html)).into_response()
        }
    }
}

/// GET /resources/:id
///
/// Download links redirect out; elite resources land on the interstitial,
/// keeping the share-link name and filters from the query string.
pub async fn open_resource(Path(id): Path<String>, Query(params): Query<PageQuery>) -> Response {
    let Some(resource) = catalog::find(&id) else {
        return (StatusCode::NOT_FOUND, "Resource not found").into_response();
    };

    match interstitial::activate(resource) {
        Activation::Navigate(url) => {
            info!(resource = %resource.id, tier = resource.tier.as_str(), "Resource download");
            Redirect::to(download_target(url)).into_response()
        }
        Activation::Interstitial(resource) => {
            let location = params.links().interstitial(resource.id);
            Redirect::to(&location).into_response()
        }
    }
}

// Placeholder anchors would otherwise redirect back onto this route
fn download_target(url: &str) -> &str {
    if url.is_empty() || url.starts_with('#') {
        "/"
    } else {
        url
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

// === API Endpoints ===

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Filter result split by tier
#[derive(Serialize)]
pub struct ResourcesResponse {
    pub query: String,
    pub category: &'static str,
    pub total: usize,
    pub public: Vec<&'static Resource>,
    pub vault: Vec<&'static Resource>,
    pub elite: Vec<&'static Resource>,
}

/// GET /api/resources
pub async fn api_resources(Query(params): Query<FilterQuery>) -> Json<ResourcesResponse> {
    let category = CategoryFilter::from_param(params.category.as_deref());
    let view = FilteredView::new(catalog::all(), params.q.as_deref().unwrap_or_default(), category);

    Json(ResourcesResponse {
        total: view.resources.len(),
        query: view.query,
        category: category.id(),
        public: view.sections.public,
        vault: view.sections.vault,
        elite: view.sections.elite,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct GateQuery {
    pub user: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GateResponse {
    pub state: &'static str,
    pub name: Option<String>,
    pub source: Option<UnlockSource>,
}

/// GET /api/gate
pub async fn api_gate(
    State(state): State<SharedState>,
    Query(params): Query<GateQuery>,
    headers: HeaderMap,
) -> Json<GateResponse> {
    let store = CookieStore::from_headers(state.cookie.clone(), &headers);
    let session = VaultSession::mount(params.user.as_deref(), store);
    let decision = session.decision();

    Json(GateResponse {
        state: if decision.state.is_unlocked() { "unlocked" } else { "locked" },
        name: decision.state.name().map(str::to_string),
        source: decision.source,
    })
}

#[derive(Debug, Serialize)]
pub struct UnlockResponse {
    pub unlocked: bool,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// POST /api/leads
pub async fn api_submit_lead(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(form): Json<LeadForm>,
) -> Response {
    let store = CookieStore::from_headers(state.cookie.clone(), &headers);
    let mut session = VaultSession::mount(None, store);
    let outcome = session
        .submit_lead(&state.adapter, &form)
        .await
        .map(|gate| gate.name().unwrap_or_default().to_string());

    match outcome {
        Ok(name) => {
            let body = Json(UnlockResponse { unlocked: true, name });
            with_cookie(body.into_response(), session.store())
        }
        Err(e) => (failure_status(&e), Json(ErrorResponse { error: e.to_string() })).into_response(),
    }
}
