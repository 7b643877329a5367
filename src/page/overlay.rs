//! Gate overlay and elite interstitial

use super::{attr, text, GateForm, Links};
use crate::catalog::Resource;
use crate::config::SiteConfig;
use crate::interstitial::EXIT_DELAY;

const PARTNER_BENEFITS: [&str; 4] = [
    "Full access to all Elite resources",
    "Custom Flow OS configuration",
    "90-day implementation support",
    "Weekly strategy sessions",
];

// Swaps the button into its pending state; the server re-renders it enabled on failure
const SUBMIT_SCRIPT: &str = "var b=this.querySelector('button[type=submit]');b.disabled=true;b.querySelector('span').textContent='Unlocking...';";

// Plays the exit animation, then follows the link to the view without the modal
fn dismiss_script() -> String {
    format!(
        "var m=document.getElementById('elite-modal');m.classList.add('closing');var h=this.href;setTimeout(function(){{location.href=h}},{});return false;",
        EXIT_DELAY.as_millis()
    )
}

pub(super) fn gate(site: &SiteConfig, form: &GateForm, links: &Links<'_>) -> String {
    let error = match &form.error {
        Some(message) => format!("<p class=\"gate-error\" role=\"alert\">{}</p>\n", text(message)),
        None => String::new(),
    };

    format!(
        r#"<div class="overlay gate" id="vault-gate">
<div class="overlay-backdrop blur"></div>
<div class="overlay-panel glass">
<div class="gate-logo"><img src="{logo}" alt="Exo"></div>
<div class="gate-header">
<h1>Welcome to the <span class="accent">{brand}</span>.</h1>
<p>Enter your details to unlock the operational scaling library.</p>
</div>
<form method="post" action="/unlock" class="gate-form" onsubmit="{script}">
{hidden}<label for="gate-name">Full Name</label>
<input type="text" id="gate-name" name="name" required placeholder="John Doe" value="{name}">
<label for="gate-email">Work Email</label>
<input type="email" id="gate-email" name="email" required placeholder="john@company.com" value="{email}">
<label for="gate-company">Company</label>
<input type="text" id="gate-company" name="company" required placeholder="Exo Corp" value="{company}">
{error}<button type="submit" class="cta-emerald"><span>Access Vault</span> <iconify-icon icon="solar:arrow-right-linear" width="18"></iconify-icon></button>
</form>
<p class="fine-print">Secure Access &bull; No Spam</p>
</div>
</div>
"#,
        logo = attr(&site.logo_url),
        brand = text(&site.brand),
        script = attr(SUBMIT_SCRIPT),
        hidden = links.hidden_inputs(true),
        name = attr(&form.values.name),
        email = attr(&form.values.email),
        company = attr(&form.values.company),
        error = error,
    )
}

/// Close button and backdrop fall back to plain navigation without scripts
pub(super) fn interstitial(site: &SiteConfig, resource: &Resource, links: &Links<'_>) -> String {
    let close = links.current();
    let dismiss = dismiss_script();
    let benefits: String = PARTNER_BENEFITS
        .iter()
        .map(|b| {
            format!(
                "<li><iconify-icon icon=\"solar:check-circle-linear\" width=\"16\"></iconify-icon> {}</li>\n",
                b
            )
        })
        .collect();

    format!(
        r#"<div class="overlay elite open" id="elite-modal" data-resource="{id}">
<a class="overlay-backdrop" href="{close}" aria-label="Close" onclick="{dismiss}"></a>
<div class="overlay-panel glass scale-in">
<a class="overlay-close" href="{close}" aria-label="Close" onclick="{dismiss}"><iconify-icon icon="solar:close-circle-linear" width="24"></iconify-icon></a>
<div class="elite-icon"><iconify-icon icon="solar:shield-keyhole-bold-duotone" width="32"></iconify-icon></div>
<h2>Reserved for <span class="accent-violet">Self-Running Enterprises</span></h2>
<p class="elite-title">{title}</p>
<p class="elite-copy">This framework is a core component of the Exo Capability Stack. It requires specific configuration within Flow OS and is reserved for active X-Scale partners.</p>
<div class="benefits">
<p>X-Scale Partners Receive:</p>
<ul>
{benefits}</ul>
</div>
<a href="{audit}" class="cta-violet block">Book Systems Audit <iconify-icon icon="solar:arrow-right-linear" width="18"></iconify-icon></a>
<p class="fine-print">No commitment required &bull; Free consultation</p>
</div>
</div>
"#,
        id = resource.id,
        close = attr(&close),
        dismiss = attr(&dismiss),
        title = text(resource.title),
        benefits = benefits,
        audit = attr(&site.audit_url),
    )
}
