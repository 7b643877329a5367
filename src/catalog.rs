//! Resource catalog
//!
//! The vault's contents are a read-only table compiled into the binary.
//! Records are listed in display order; the filter engine never re-sorts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business area a resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sales,
    Operations,
    Hiring,
    Strategy,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Sales,
        Category::Operations,
        Category::Hiring,
        Category::Strategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sales => "sales",
            Category::Operations => "operations",
            Category::Hiring => "hiring",
            Category::Strategy => "strategy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Access level of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Open to everyone
    Public,
    /// Behind the lead-capture gate
    Vault,
    /// Partner-only, reachable through the interstitial
    Elite,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Public => "public",
            Tier::Vault => "vault",
            Tier::Elite => "elite",
        }
    }
}

/// Display label for the kind of asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pdf,
    Video,
    Template,
    Tool,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Pdf => "pdf",
            ResourceType::Video => "video",
            ResourceType::Template => "template",
            ResourceType::Tool => "tool",
        }
    }
}

/// A single entry in the vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tier: Tier,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    /// Iconify icon name
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<&'static str>,
}

impl Resource {
    pub fn is_elite(&self) -> bool {
        self.tier == Tier::Elite
    }
}

/// Filter chip shown in the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    /// `all` or a [`Category`] name
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sentinel chip id that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

pub static CATEGORY_CHIPS: [CategoryChip; 5] = [
    CategoryChip { id: ALL_CATEGORIES, label: "All Resources", icon: "solar:widget-2-linear" },
    CategoryChip { id: "sales", label: "Sales", icon: "solar:graph-new-linear" },
    CategoryChip { id: "operations", label: "Operations", icon: "solar:settings-linear" },
    CategoryChip { id: "hiring", label: "Hiring", icon: "solar:users-group-rounded-linear" },
    CategoryChip { id: "strategy", label: "Strategy", icon: "solar:compass-linear" },
];

/// Placeholder until real file delivery exists
const PLACEHOLDER_URL: &str = "#";

pub static RESOURCES: [Resource; 13] = [
    // Public floor
    Resource {
        id: "roadmap",
        title: "The EXO Scaling Roadmap",
        description: "Your 90-day operational transformation blueprint. Step-by-step guide to building a self-running enterprise.",
        category: Category::Strategy,
        tier: Tier::Public,
        kind: ResourceType::Pdf,
        icon: "solar:map-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    Resource {
        id: "chaos-diagnostic",
        title: "Operational Chaos Diagnostic",
        description: "Self-assessment tool to identify your biggest bottlenecks across sales, operations, and hiring.",
        category: Category::Operations,
        tier: Tier::Public,
        kind: ResourceType::Tool,
        icon: "solar:clipboard-check-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    Resource {
        id: "quick-wins",
        title: "10 AI Quick Wins Guide",
        description: "Immediate actions you can take today to automate 10+ hours of weekly work.",
        category: Category::Operations,
        tier: Tier::Public,
        kind: ResourceType::Pdf,
        icon: "solar:bolt-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    // Vault
    Resource {
        id: "hiring-archetypes",
        title: "Hiring Archetypes for the AI Era",
        description: "Complete job description templates and interview frameworks for building an AI-native team.",
        category: Category::Hiring,
        tier: Tier::Vault,
        kind: ResourceType::Template,
        icon: "solar:users-group-rounded-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    Resource {
        id: "process-maps",
        title: "Process Map Templates",
        description: "Visual SOP templates for documenting and automating your core business operations.",
        category: Category::Operations,
        tier: Tier::Vault,
        kind: ResourceType::Template,
        icon: "solar:document-add-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    Resource {
        id: "pipeline-tracker",
        title: "Sales Pipeline Tracker",
        description: "Advanced Notion template for tracking deals, automating follow-ups, and forecasting revenue.",
        category: Category::Sales,
        tier: Tier::Vault,
        kind: ResourceType::Template,
        icon: "solar:graph-new-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    Resource {
        id: "handoff-scripts",
        title: "Automated Handoff Scripts",
        description: "Email and Slack templates for seamless handoffs between sales, delivery, and support.",
        category: Category::Sales,
        tier: Tier::Vault,
        kind: ResourceType::Template,
        icon: "solar:chat-round-dots-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    Resource {
        id: "onboarding-framework",
        title: "New Hire Onboarding Framework",
        description: "30-60-90 day onboarding templates that get new team members productive 3x faster.",
        category: Category::Hiring,
        tier: Tier::Vault,
        kind: ResourceType::Pdf,
        icon: "solar:user-plus-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    Resource {
        id: "ai-workflow-library",
        title: "AI Workflow Library",
        description: "Pre-built automation workflows for Make, Zapier, and n8n ready to deploy.",
        category: Category::Operations,
        tier: Tier::Vault,
        kind: ResourceType::Template,
        icon: "solar:magic-stick-linear",
        download_url: Some(PLACEHOLDER_URL),
    },
    // Elite floor
    Resource {
        id: "flow-os-config",
        title: "Flow OS Custom Configuration",
        description: "Complete Flow OS setup with custom dashboards, automations, and AI integrations.",
        category: Category::Operations,
        tier: Tier::Elite,
        kind: ResourceType::Tool,
        icon: "solar:settings-minimalistic-linear",
        download_url: None,
    },
    Resource {
        id: "revenue-accelerator",
        title: "Revenue Accelerator Playbook",
        description: "Proven strategies and scripts for 3x revenue growth within 90 days.",
        category: Category::Sales,
        tier: Tier::Elite,
        kind: ResourceType::Pdf,
        icon: "solar:chart-2-linear",
        download_url: None,
    },
    Resource {
        id: "ai-department",
        title: "AI Department Blueprint",
        description: "Complete guide to building an AI-powered department from scratch.",
        category: Category::Strategy,
        tier: Tier::Elite,
        kind: ResourceType::Video,
        icon: "solar:cpu-bolt-linear",
        download_url: None,
    },
    Resource {
        id: "executive-dashboard",
        title: "Executive Dashboard Suite",
        description: "Real-time KPI dashboards with predictive analytics and AI insights.",
        category: Category::Strategy,
        tier: Tier::Elite,
        kind: ResourceType::Tool,
        icon: "solar:widget-linear",
        download_url: None,
    },
];

/// The full catalog in display order
pub fn all() -> &'static [Resource] {
    &RESOURCES
}

/// Look up a resource by id
pub fn find(id: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|r| r.id == id)
}
