//! Rule registry
//!
//! Maps (category, operation name) to an [`EditRule`]. Supporting a new
//! modification type is one `register` call; nothing else in the pipeline
//! changes.

use crate::add_y::AddYRule;
use crate::mark_style::MarkStyleRule;
use crate::modification::{EditCategory, Modification};
use crate::modify_x::ModifyXRule;
use crate::rule::{EditError, EditRule};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use vizdiff_spec::ChartSpec;

/// Registry key: a category plus an optional operation name
///
/// A key without a name is a category-wide rule; it matches any operation in
/// the category that has no exact (category, name) entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey {
    category: EditCategory,
    name: Option<String>,
}

impl RuleKey {
    /// Exact key for one operation
    #[must_use]
    pub fn exact(category: EditCategory, name: &str) -> Self {
        Self {
            category,
            name: Some(name.to_string()),
        }
    }

    /// Category-wide key
    #[must_use]
    pub fn category(category: EditCategory) -> Self {
        Self {
            category,
            name: None,
        }
    }
}

/// Table of edit rules, in registration order
#[derive(Debug, Default, Clone)]
pub struct RuleRegistry {
    rules: IndexMap<RuleKey, Arc<dyn EditRule>>,
}

impl RuleRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Create a registry with the built-in rules
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(RuleKey::category(EditCategory::Mark), MarkStyleRule::new());
        registry.register(
            RuleKey::exact(EditCategory::Encoding, "ADD_Y"),
            AddYRule::new(),
        );
        registry.register(
            RuleKey::exact(EditCategory::Encoding, "MODIFY_X"),
            ModifyXRule::new(),
        );
        registry
    }

    /// Register a rule, replacing any rule already under the key
    pub fn register<R: EditRule + 'static>(&mut self, key: RuleKey, rule: R) {
        self.rules.insert(key, Arc::new(rule));
    }

    /// Check whether a key has a rule
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &RuleKey) -> bool {
        self.rules.contains_key(key)
    }

    /// Number of registered rules
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the rule for a modification
    ///
    /// Exact (category, name) entries win over category-wide entries.
    #[must_use]
    pub fn lookup(&self, modification: &Modification) -> Option<&Arc<dyn EditRule>> {
        self.rules
            .get(&RuleKey::exact(
                modification.category.clone(),
                &modification.name,
            ))
            .or_else(|| {
                self.rules
                    .get(&RuleKey::category(modification.category.clone()))
            })
    }

    /// Human-readable label for a modification
    ///
    /// `None` when no rule matches or the matched rule cannot label the
    /// record's detail shape. Never mutates the modification.
    #[must_use]
    pub fn readable_name(&self, modification: &Modification) -> Option<String> {
        let rule = self.lookup(modification)?;
        rule.describe(modification)
    }

    /// Apply one modification to a spec, producing a new spec
    ///
    /// An unmatched modification is an explicit no-op: the result is an
    /// unchanged copy of the input. The input spec is never mutated.
    ///
    /// # Errors
    /// Returns [`EditError`] when a matched rule finds the record malformed
    /// or the spec missing a region it requires.
    pub fn apply(
        &self,
        spec: &ChartSpec,
        modification: &Modification,
    ) -> Result<ChartSpec, EditError> {
        match self.lookup(modification) {
            Some(rule) => rule.apply(spec, modification),
            None => {
                tracing::debug!(
                    category = %modification.category,
                    name = %modification.name,
                    "no rule for modification, returning spec unchanged"
                );
                Ok(spec.clone())
            }
        }
    }
}

static DEFAULT_REGISTRY: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::with_defaults);

/// Label a modification using the built-in rules
///
/// See [`RuleRegistry::readable_name`].
#[must_use]
pub fn readable_name(modification: &Modification) -> Option<String> {
    DEFAULT_REGISTRY.readable_name(modification)
}

/// Apply a modification using the built-in rules
///
/// See [`RuleRegistry::apply`].
///
/// # Errors
/// Returns [`EditError`] when a matched rule finds the record malformed.
pub fn apply_modification(
    spec: &ChartSpec,
    modification: &Modification,
) -> Result<ChartSpec, EditError> {
    DEFAULT_REGISTRY.apply(spec, modification)
}
