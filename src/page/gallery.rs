//! Hero, search bar and tiered resource sections

use super::{attr, text, Links};
use crate::catalog::{Resource, Tier, CATEGORY_CHIPS};
use crate::config::SiteConfig;
use crate::filter::{CategoryFilter, FilteredView};
use crate::gate::GateState;

pub(super) fn hero(site: &SiteConfig, gate: &GateState) -> String {
    let (badge, heading) = match gate.name() {
        Some(name) => (
            "Master Key Active",
            format!(
                "Welcome back, <span class=\"accent\">{}</span>.<br>Your Vault is Active.",
                text(name)
            ),
        ),
        None => (
            "Vault Access",
            format!("Welcome to the <span class=\"accent\">{}</span>.", text(&site.brand)),
        ),
    };

    format!(
        r#"<header class="hero fade-in">
<div class="status-badge"><span class="ping"></span><span>{badge}</span></div>
<h1>{heading}</h1>
<p class="tagline">Your resource library for building self-running enterprises. Download frameworks, templates, and tools designed to operationalize your growth.</p>
</header>
"#,
        badge = badge,
        heading = heading,
    )
}

pub(super) fn filter_bar(links: &Links<'_>) -> String {
    let chips: String = CATEGORY_CHIPS
        .iter()
        .map(|chip| {
            let filter = CategoryFilter::from_param(Some(chip.id));
            let class = if filter == links.category { "chip active" } else { "chip" };
            format!(
                "<a href=\"{href}\" class=\"{class}\"><iconify-icon icon=\"{icon}\" width=\"14\"></iconify-icon><span>{label}</span></a>\n",
                href = attr(&links.category(filter)),
                class = class,
                icon = chip.icon,
                label = chip.label,
            )
        })
        .collect();

    format!(
        r#"<section class="filter-bar glass fade-in">
<form method="get" action="/" class="search">
{hidden}<iconify-icon icon="solar:magnifer-linear" width="20"></iconify-icon>
<input type="search" name="q" placeholder="Query the Vault..." value="{query}">
</form>
<div class="chips">
{chips}</div>
</section>
"#,
        hidden = links.hidden_inputs(false),
        query = attr(links.query),
        chips = chips,
    )
}

struct SectionStyle {
    heading: &'static str,
    note: &'static str,
    icon: &'static str,
    class: &'static str,
}

fn section_style(tier: Tier) -> SectionStyle {
    match tier {
        Tier::Public => SectionStyle {
            heading: "Free Access",
            note: "No signup required",
            icon: "solar:unlock-linear",
            class: "tier-public",
        },
        Tier::Vault => SectionStyle {
            heading: "The Exo Vault",
            note: "Lead access",
            icon: "solar:key-linear",
            class: "tier-vault",
        },
        Tier::Elite => SectionStyle {
            heading: "Elite Resources",
            note: "X-Scale Partners Only",
            icon: "solar:crown-linear",
            class: "tier-elite",
        },
    }
}

pub(super) fn sections(site: &SiteConfig, view: &FilteredView<'_>, links: &Links<'_>) -> String {
    if view.is_empty() {
        return r#"<div class="no-results">
<div class="no-results-icon"><iconify-icon icon="solar:document-text-linear" width="32"></iconify-icon></div>
<h3>No resources found</h3>
<p>Try adjusting your search or filter criteria.</p>
</div>
"#
        .to_string();
    }

    let mut html = String::from("<div class=\"sections\">\n");
    for (tier, resources) in [
        (Tier::Public, &view.sections.public),
        (Tier::Vault, &view.sections.vault),
        (Tier::Elite, &view.sections.elite),
    ] {
        if resources.is_empty() {
            continue;
        }
        let style = section_style(tier);
        html.push_str(&format!(
            "<section class=\"tier-section {class} fade-in\">\n<div class=\"section-head\"><span class=\"section-icon\"><iconify-icon icon=\"{icon}\" width=\"18\"></iconify-icon></span><h2>{heading}</h2><span class=\"section-note\">{note}</span></div>\n<div class=\"grid\">\n",
            class = style.class,
            icon = style.icon,
            heading = style.heading,
            note = style.note,
        ));
        for resource in resources.iter() {
            html.push_str(&card(resource, links));
        }
        html.push_str("</div>\n");
        if tier == Tier::Elite {
            html.push_str(&elite_banner(site));
        }
        html.push_str("</section>\n");
    }
    html.push_str("</div>\n");
    html
}

fn card(resource: &Resource, links: &Links<'_>) -> String {
    let (badge, action) = match resource.tier {
        Tier::Public => (
            "<span class=\"badge badge-public\">Free Access</span>",
            "<span class=\"card-action\">Download <iconify-icon icon=\"solar:arrow-right-linear\" width=\"16\"></iconify-icon></span>",
        ),
        Tier::Vault => (
            "<span class=\"badge badge-vault\">Vault Access</span>",
            "<span class=\"card-action\">Access <iconify-icon icon=\"solar:arrow-right-linear\" width=\"16\"></iconify-icon></span>",
        ),
        Tier::Elite => (
            "<span class=\"badge badge-elite\">X-Scale Only</span>",
            "<span class=\"card-action locked\"><iconify-icon icon=\"solar:shield-keyhole-bold-duotone\" width=\"20\"></iconify-icon> Locked</span>",
        ),
    };

    // Elite cards stay on the page; everything else opens a new context
    let (href, target) = if resource.is_elite() {
        (links.interstitial(resource.id), "")
    } else {
        (
            format!("/resources/{}", resource.id),
            " target=\"_blank\" rel=\"noopener\"",
        )
    };

    let lock = if resource.is_elite() {
        "<span class=\"lock-icon\"><iconify-icon icon=\"solar:lock-linear\" width=\"16\"></iconify-icon></span>\n"
    } else {
        ""
    };

    format!(
        r#"<a class="card card-{tier}" href="{href}"{target} data-resource="{id}">
{lock}<div class="card-head"><span class="card-icon"><iconify-icon icon="{icon}" width="24"></iconify-icon></span>{badge}</div>
<h3>{title}</h3>
<p>{description}</p>
<div class="card-foot"><span class="card-type">{kind}</span>{action}</div>
</a>
"#,
        tier = resource.tier.as_str(),
        href = attr(&href),
        target = target,
        id = resource.id,
        lock = lock,
        icon = resource.icon,
        badge = badge,
        title = text(resource.title),
        description = text(resource.description),
        kind = resource.kind.as_str(),
        action = action,
    )
}

fn elite_banner(site: &SiteConfig) -> String {
    format!(
        r#"<div class="elite-banner glass">
<div class="elite-banner-copy">
<span class="section-icon"><iconify-icon icon="solar:shield-keyhole-bold-duotone" width="24"></iconify-icon></span>
<div>
<h3>Unlock the Complete Capability Stack</h3>
<p>X-Scale partners get full access to all Elite resources and implementation support.</p>
</div>
</div>
<a href="{audit}" class="cta-violet">Book Systems Audit</a>
</div>
"#,
        audit = attr(&site.audit_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Category, RESOURCES};

    fn links() -> Links<'static> {
        Links {
            user: None,
            query: "",
            category: CategoryFilter::All,
        }
    }

    #[test]
    fn test_elite_card_links_to_interstitial() {
        let html = card(catalog::find("revenue-accelerator").unwrap(), &links());
        assert!(html.contains("href=\"/?resource=revenue-accelerator\""));
        assert!(!html.contains("target=\"_blank\""));
        assert!(html.contains("X-Scale Only"));
    }

    #[test]
    fn test_download_card_opens_new_context() {
        let html = card(catalog::find("roadmap").unwrap(), &links());
        assert!(html.contains("href=\"/resources/roadmap\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("Download"));
    }

    #[test]
    fn test_active_chip_highlighted() {
        let l = Links {
            category: CategoryFilter::Only(Category::Hiring),
            ..links()
        };
        let html = filter_bar(&l);
        assert!(html.contains("href=\"/?category=hiring\" class=\"chip active\""));
        assert!(html.contains("href=\"/\" class=\"chip\""));
        assert!(html.contains("<input type=\"hidden\" name=\"category\" value=\"hiring\">"));
    }

    #[test]
    fn test_only_non_empty_sections_render() {
        let view = FilteredView::new(&RESOURCES, "", CategoryFilter::Only(Category::Hiring));
        let html = sections(&SiteConfig::default(), &view, &links());
        assert!(!html.contains("Free Access"));
        assert!(html.contains("The Exo Vault"));
        assert!(!html.contains("Elite Resources"));
    }
}
