//! Presentation shell
//!
//! Server-rendered vault page. Every fragment is plain `format!` output;
//! visitor-supplied text goes through [`text`] or [`attr`] first.

mod gallery;
mod layout;
mod overlay;

use std::time::Duration;

use crate::config::SiteConfig;
use crate::filter::{CategoryFilter, FilteredView};
use crate::gate::{GateState, USER_PARAM};
use crate::interstitial::Interstitial;
use crate::leads::LeadForm;

/// Delay before the hero and sections fade in
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(100);

/// Gate overlay contents for a locked visitor
#[derive(Debug, Clone, Default)]
pub struct GateForm {
    /// Values to re-populate after a failed attempt
    pub values: LeadForm,
    pub error: Option<String>,
}

impl GateForm {
    pub fn with_error(values: LeadForm, error: impl Into<String>) -> Self {
        Self {
            values,
            error: Some(error.into()),
        }
    }
}

/// Everything needed to render one page
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub gate: &'a GateState,
    /// `user` share-link parameter, carried through every link
    pub share_name: Option<&'a str>,
    pub view: &'a FilteredView<'a>,
    pub interstitial: Interstitial<'a>,
    /// Overlay state; ignored once unlocked
    pub gate_form: GateForm,
}

impl PageContext<'_> {
    fn links(&self) -> Links<'_> {
        Links {
            user: self.share_name,
            query: &self.view.query,
            category: self.view.category,
        }
    }
}

/// Render the full document
pub fn render_vault_page(ctx: &PageContext<'_>) -> String {
    let links = ctx.links();
    let mut html = String::with_capacity(32 * 1024);

    html.push_str(&layout::head(ctx.site));
    html.push_str("<body>\n<div class=\"backdrop-glow\"></div>\n");

    if !ctx.gate.is_unlocked() {
        html.push_str(&overlay::gate(ctx.site, &ctx.gate_form, &links));
    }

    html.push_str(&layout::nav(ctx.site, ctx.gate));
    html.push_str("<main class=\"shell\">\n");
    html.push_str(&gallery::hero(ctx.site, ctx.gate));
    html.push_str(&gallery::filter_bar(&links));
    html.push_str(&gallery::sections(ctx.site, ctx.view, &links));
    html.push_str("</main>\n");
    html.push_str(&layout::footer(ctx.site));

    if let Some(resource) = ctx.interstitial.resource() {
        html.push_str(&overlay::interstitial(ctx.site, resource, &links));
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Escape text content
pub(crate) fn text(s: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape a double-quoted attribute value
pub(crate) fn attr(s: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Query-string state shared by every in-page link
#[derive(Debug, Clone, Copy)]
pub(crate) struct Links<'a> {
    pub user: Option<&'a str>,
    pub query: &'a str,
    pub category: CategoryFilter,
}

impl<'a> Links<'a> {
    fn params(&self, category: CategoryFilter, resource: Option<&'a str>) -> Vec<(&'static str, &'a str)> {
        let mut params = Vec::new();
        if let Some(user) = self.user {
            params.push((USER_PARAM, user));
        }
        if !self.query.is_empty() {
            params.push(("q", self.query));
        }
        if category != CategoryFilter::All {
            params.push(("category", category.id()));
        }
        if let Some(id) = resource {
            params.push(("resource", id));
        }
        params
    }

    fn build(&self, category: CategoryFilter, resource: Option<&'a str>) -> String {
        let query = serde_urlencoded::to_string(self.params(category, resource)).unwrap_or_default();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", query)
        }
    }

    /// Current view, no modal
    pub fn current(&self) -> String {
        self.build(self.category, None)
    }

    pub fn category(&self, category: CategoryFilter) -> String {
        self.build(category, None)
    }

    /// Current view with the interstitial open
    pub fn interstitial(&self, id: &'a str) -> String {
        self.build(self.category, Some(id))
    }

    /// Hidden inputs that carry state through a form submission
    pub fn hidden_inputs(&self, include_query: bool) -> String {
        let mut html = String::new();
        for (name, value) in self.params(self.category, None) {
            if name == "q" && !include_query {
                continue;
            }
            html.push_str(&format!(
                "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
                name,
                attr(value)
            ));
        }
        html
    }
}
