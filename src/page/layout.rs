//! Document head, navigation and footer

use super::{attr, text, ENTRANCE_DELAY};
use crate::config::SiteConfig;
use crate::gate::GateState;
use crate::interstitial::EXIT_DELAY;

const STYLESHEET: &str = include_str!("../../static/vault.css");

const TITLE: &str = "Exo Vault | Resource Hub";
const DESCRIPTION: &str = "Access exclusive resources, frameworks, and insights from Exo Enterprise. Unlock the value ladder to scale your business.";
const SHARE_DESCRIPTION: &str = "Your resource library for building self-running enterprises. Download frameworks, templates, and tools.";
const KEYWORDS: &str = "Exo Enterprise, Operations, AI, Scaling, Business Systems, Resources";

pub(super) fn head(site: &SiteConfig) -> String {
    let icon_script = if site.icon_script_url.is_empty() {
        String::new()
    } else {
        format!("<script src=\"{}\" async></script>\n", attr(&site.icon_script_url))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<meta name="author" content="Exo Enterprise">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{share}">
<meta property="og:type" content="website">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="Your resource library for building self-running enterprises.">
<link rel="icon" href="{favicon}">
{icon_script}<style>
:root {{ --entrance-delay: {entrance}ms; --modal-exit: {exit}ms; }}
{css}</style>
</head>
"#,
        title = TITLE,
        description = DESCRIPTION,
        keywords = KEYWORDS,
        share = SHARE_DESCRIPTION,
        favicon = attr(&site.favicon_url),
        icon_script = icon_script,
        entrance = ENTRANCE_DELAY.as_millis(),
        exit = EXIT_DELAY.as_millis(),
        css = STYLESHEET,
    )
}

pub(super) fn nav(site: &SiteConfig, gate: &GateState) -> String {
    let visitor = match gate.name() {
        Some(name) => format!(
            "<div class=\"nav-visitor\"><span class=\"pulse-dot\"></span><span>{}</span></div>\n",
            text(name)
        ),
        None => String::new(),
    };

    format!(
        r#"<nav class="topbar">
<div class="topbar-inner">
<a href="/" class="brand">
<span class="brand-mark"><img src="{logo}" alt="Exo"></span>
<span class="brand-name">{brand}</span>
</a>
<div class="topbar-right">
{visitor}<a href="{home}" class="home-link">Home <iconify-icon icon="solar:arrow-right-up-linear"></iconify-icon></a>
</div>
</div>
</nav>
"#,
        logo = attr(&site.logo_url),
        brand = text(&site.brand),
        visitor = visitor,
        home = attr(&site.home_url),
    )
}

pub(super) fn footer(site: &SiteConfig) -> String {
    format!(
        r#"<footer class="footer">
<div class="footer-inner">
<p>&copy; 2026 Exo Enterprise LLC. All rights reserved.</p>
<div class="footer-links">
<a href="{terms}">Terms of Service</a>
<a href="{privacy}">Privacy Policy</a>
<a href="mailto:{email}" class="help-link"><iconify-icon icon="solar:chat-round-dots-linear" width="14"></iconify-icon> Need Help?</a>
</div>
</div>
</footer>
"#,
        terms = attr(&site.terms_url),
        privacy = attr(&site.privacy_url),
        email = attr(&site.support_email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_embeds_timings_and_script() {
        let html = head(&SiteConfig::default());
        assert!(html.contains("--entrance-delay: 100ms"));
        assert!(html.contains("--modal-exit: 300ms"));
        assert!(html.contains("iconify-icon.min.js"));
        assert!(html.contains("<title>Exo Vault | Resource Hub</title>"));
        assert!(html.contains("<link rel=\"icon\" href=\"/static/favicon.svg\">"));
    }

    #[test]
    fn test_head_without_icon_script() {
        let site = SiteConfig {
            icon_script_url: String::new(),
            ..SiteConfig::default()
        };
        assert!(!head(&site).contains("<script"));
    }

    #[test]
    fn test_nav_shows_name_only_when_unlocked() {
        let site = SiteConfig::default();
        assert!(!nav(&site, &GateState::Locked).contains("nav-visitor"));
        assert!(nav(&site, &GateState::Unlocked { name: "Jane".into() }).contains("<span>Jane</span>"));
    }
}
