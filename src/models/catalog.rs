use crate::models::domain::{AgeRules, ProviderPlan};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that reject a catalog at load time
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Plan at position {0} has an empty id")]
    EmptyPlanId(usize),

    #[error("Duplicate plan id: {0}")]
    DuplicatePlanId(String),
}

/// On-disk shape of a catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub plans: Vec<ProviderPlan>,
}

/// Immutable multi-provider plan catalog.
///
/// Construct once and share behind an `Arc`; nothing in the engine mutates it.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: Vec<ProviderPlan>,
}

impl PlanCatalog {
    /// Build a catalog, rejecting missing or duplicate plan ids.
    ///
    /// Data quirks that first-match lookup resolves deterministically (duplicate
    /// matrix rows, repeated IUA tiers, overlapping custom ranges) are logged
    /// and kept.
    pub fn new(plans: Vec<ProviderPlan>) -> Result<Self, CatalogError> {
        {
            let mut seen_ids = HashSet::new();
            for (position, plan) in plans.iter().enumerate() {
                if plan.id.trim().is_empty() {
                    return Err(CatalogError::EmptyPlanId(position));
                }
                if !seen_ids.insert(plan.id.as_str()) {
                    return Err(CatalogError::DuplicatePlanId(plan.id.clone()));
                }
                audit_plan(plan);
            }
        }

        Ok(Self { plans })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.plans)
    }

    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.plans)
    }

    pub fn get(&self, plan_id: &str) -> Option<&ProviderPlan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProviderPlan> {
        self.plans.iter()
    }

    pub fn plans(&self) -> &[ProviderPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Distinct provider names in catalog order
    pub fn providers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.plans
            .iter()
            .map(|plan| plan.provider_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

impl<'a> IntoIterator for &'a PlanCatalog {
    type Item = &'a ProviderPlan;
    type IntoIter = std::slice::Iter<'a, ProviderPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.iter()
    }
}

fn audit_plan(plan: &ProviderPlan) {
    let mut row_keys = HashSet::new();
    for row in &plan.plan_matrix {
        if !row_keys.insert((row.age_bracket.as_str(), row.household_type)) {
            tracing::warn!(
                "Plan {} has duplicate matrix rows for ({}, {}); first row wins",
                plan.id,
                row.age_bracket,
                row.household_type
            );
        }

        let mut iuas = HashSet::new();
        for cost in &row.costs {
            if !iuas.insert(cost.initial_unshared_amount) {
                tracing::warn!(
                    "Plan {} repeats IUA {} in row ({}, {})",
                    plan.id,
                    cost.initial_unshared_amount,
                    row.age_bracket,
                    row.household_type
                );
            }
        }
    }

    if let AgeRules::Custom { custom_brackets } = &plan.age_rules {
        let ranges = &custom_brackets.ranges;
        for (i, range) in ranges.iter().enumerate() {
            if range.min > range.max {
                tracing::warn!(
                    "Plan {} bracket {} has min {} above max {}",
                    plan.id,
                    range.bracket,
                    range.min,
                    range.max
                );
            }
            for other in &ranges[i + 1..] {
                if range.min <= other.max && other.min <= range.max {
                    tracing::warn!(
                        "Plan {} brackets {} and {} overlap; earlier range wins",
                        plan.id,
                        range.bracket,
                        other.bracket
                    );
                }
            }
        }
    }
}
