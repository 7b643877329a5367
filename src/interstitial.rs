//! Elite interstitial
//!
//! Partner-only resources never link out. Activating one opens a modal
//! pointing at the partner call-to-action instead.

use std::time::Duration;

use crate::catalog::{self, Resource, Tier};

/// How long the modal keeps its content after dismissal so the exit
/// animation can finish
pub const EXIT_DELAY: Duration = Duration::from_millis(300);

/// What activating a resource card does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    /// Open the download in a new context
    Navigate(&'a str),
    /// Show the interstitial; no navigation
    Interstitial(&'a Resource),
}

/// Resolve a card activation
pub fn activate(resource: &Resource) -> Activation<'_> {
    match (resource.tier, resource.download_url) {
        (Tier::Elite, _) | (_, None) => Activation::Interstitial(resource),
        (_, Some(url)) => Activation::Navigate(url),
    }
}

/// Modal state for one page render
///
/// Dismissal happens in the browser: the close controls add the `closing`
/// class, wait [`EXIT_DELAY`] for the exit animation, then navigate to the
/// view without the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interstitial<'a> {
    #[default]
    Closed,
    Open(&'a Resource),
}

impl Interstitial<'static> {
    /// Open for the `resource` query parameter when activating that resource
    /// shows the interstitial. Unknown ids and downloads leave it closed.
    pub fn from_param(id: Option<&str>) -> Self {
        id.and_then(catalog::find)
            .map(activate)
            .and_then(|activation| match activation {
                Activation::Interstitial(resource) => Some(Interstitial::Open(resource)),
                Activation::Navigate(_) => None,
            })
            .unwrap_or_default()
    }
}

impl<'a> Interstitial<'a> {
    pub fn is_open(&self) -> bool {
        matches!(self, Interstitial::Open(_))
    }

    pub fn resource(&self) -> Option<&'a Resource> {
        match *self {
            Interstitial::Closed => None,
            Interstitial::Open(resource) => Some(resource),
        }
    }
}
