//! Filter engine
//!
//! Free-text search ANDed with a category selection, followed by a
//! stable split of the result into the three tier sections.

use serde::Serialize;
use std::fmt;

use crate::catalog::{Category, Resource, Tier, ALL_CATEGORIES};

/// Category selection from the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a chip id. Absent or unrecognised values select everything.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(id) if id != ALL_CATEGORIES => id
                .parse::<Category>()
                .map(CategoryFilter::Only)
                .unwrap_or_default(),
            _ => CategoryFilter::All,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => resource.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Case-insensitive substring match against title or description
pub fn matches_query(resource: &Resource, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    resource.title.to_lowercase().contains(&needle)
        || resource.description.to_lowercase().contains(&needle)
}

/// Apply search and category selection, keeping catalog order
pub fn filter<'a>(catalog: &'a [Resource], query: &str, category: CategoryFilter) -> Vec<&'a Resource> {
    catalog
        .iter()
        .filter(|r| matches_query(r, query) && category.matches(r))
        .collect()
}

/// Filtered resources split into display sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierPartition<'a> {
    pub public: Vec<&'a Resource>,
    pub vault: Vec<&'a Resource>,
    pub elite: Vec<&'a Resource>,
}

impl<'a> TierPartition<'a> {
    pub fn split(filtered: &[&'a Resource]) -> Self {
        let mut partition = TierPartition::default();
        for resource in filtered {
            match resource.tier {
                Tier::Public => partition.public.push(*resource),
                Tier::Vault => partition.vault.push(*resource),
                Tier::Elite => partition.elite.push(*resource),
            }
        }
        partition
    }

    pub fn len(&self) -> usize {
        self.public.len() + self.vault.len() + self.elite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the page needs to render the gallery for one request
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    pub query: String,
    pub category: CategoryFilter,
    pub resources: Vec<&'a Resource>,
    pub sections: TierPartition<'a>,
}

impl<'a> FilteredView<'a> {
    pub fn new(catalog: &'a [Resource], query: &str, category: CategoryFilter) -> Self {
        let resources = filter(catalog, query, category);
        let sections = TierPartition::split(&resources);
        Self {
            query: query.to_string(),
            category,
            resources,
            sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
