//! Case-insensitive colourspace registry.
//!
//! Maps colourspace names (and short aliases) to shared descriptors.
//! Lookups are case-insensitive and always return the identical shared
//! descriptor, never a copy. Registration is fail-fast: a second
//! registration under a name that collides after case-folding is an error,
//! and an alias can only point at a name that is already registered.
//!
//! The process-wide [`registry()`] is built once, on first access, from
//! every dataset colourspace plus the historical short aliases.
//!
//! # Example
//!
//! ```rust
//! use chroma_spaces::registry;
//!
//! let srgb = registry().lookup("srgb").unwrap();
//! assert_eq!(srgb.name(), "sRGB");
//!
//! // Aliases resolve to the very same descriptor
//! let aces = registry().lookup("aces").unwrap();
//! let full = registry().lookup("ACES2065-1").unwrap();
//! assert!(std::sync::Arc::ptr_eq(&aces, &full));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use chroma_core::{Error, Result};

use crate::colourspace::RgbColourspace;
use crate::dataset;

/// A name-keyed collection of shared colourspace descriptors.
///
/// Keys are case-folded; the canonical (display) names are kept separately
/// so iteration reports them as registered.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, Arc<RgbColourspace>>,
    canonical: Vec<String>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn fold(name: &str) -> String {
        name.to_lowercase()
    }

    /// Registers a descriptor under its canonical name.
    ///
    /// Fails with [`Error::DuplicateColourspaceName`] if the name is
    /// already taken, including names that collide only by case.
    pub fn register(&mut self, colourspace: Arc<RgbColourspace>) -> Result<()> {
        let key = Self::fold(colourspace.name());
        if self.entries.contains_key(&key) {
            return Err(Error::duplicate_name(colourspace.name()));
        }
        self.canonical.push(colourspace.name().to_string());
        self.entries.insert(key, colourspace);
        Ok(())
    }

    /// Registers an alias for an already registered canonical name.
    ///
    /// Fails with [`Error::UnknownColourspaceName`] when the canonical name
    /// is absent, or [`Error::DuplicateColourspaceName`] when the alias
    /// itself collides with an existing name or alias.
    pub fn register_alias(&mut self, alias: &str, canonical: &str) -> Result<()> {
        let target = self
            .entries
            .get(&Self::fold(canonical))
            .cloned()
            .ok_or_else(|| Error::unknown_name(canonical))?;

        let key = Self::fold(alias);
        if self.entries.contains_key(&key) {
            return Err(Error::duplicate_name(alias));
        }
        self.entries.insert(key, target);
        Ok(())
    }

    /// Looks up a descriptor by name or alias, case-insensitively.
    ///
    /// Returns the shared descriptor. Fails with
    /// [`Error::UnknownColourspaceName`] for unknown names; an ambiguous
    /// match cannot occur because registration rejects case-folded
    /// collisions.
    pub fn lookup(&self, name: &str) -> Result<Arc<RgbColourspace>> {
        self.entries
            .get(&Self::fold(name))
            .cloned()
            .ok_or_else(|| Error::unknown_name(name))
    }

    /// Returns `true` if a name or alias is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::fold(name))
    }

    /// Canonical names of all registered colourspaces, sorted.
    ///
    /// Aliases are not listed.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.canonical.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered colourspaces (aliases not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Returns `true` when no colourspace is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

static DEFAULT_REGISTRY: LazyLock<Registry> = LazyLock::new(build_default);

/// The process-wide registry of dataset colourspaces.
///
/// Built at most once, on first access; safe for unsynchronized concurrent
/// reads afterwards because nothing mutates after construction.
pub fn registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

fn build_default() -> Registry {
    let mut registry = Registry::new();

    for colourspace in dataset::all() {
        registry
            .register(colourspace)
            .expect("dataset colourspace names are distinct");
    }

    // Aliases register after their canonical targets.
    for (alias, canonical) in [
        ("aces", "ACES2065-1"),
        ("adobe1998", "Adobe RGB (1998)"),
        ("prophoto", "ProPhoto RGB"),
    ] {
        registry
            .register_alias(alias, canonical)
            .expect("alias targets are registered dataset names");
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colourspace::linear;
    use chroma_core::illuminant;
    use chroma_primaries::Primaries;

    fn make(name: &str) -> Arc<RgbColourspace> {
        Arc::new(
            RgbColourspace::new(
                name,
                Primaries::from_xy((0.64, 0.33), (0.30, 0.60), (0.15, 0.06)),
                illuminant::D65,
                linear(),
                linear(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_register_and_lookup() {
        let mut r = Registry::new();
        r.register(make("Working Space")).unwrap();

        let found = r.lookup("working space").unwrap();
        assert_eq!(found.name(), "Working Space");
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_case_insensitive_lookup_shares_descriptor() {
        let mut r = Registry::new();
        r.register(make("sRGB")).unwrap();

        let a = r.lookup("sRGB").unwrap();
        let b = r.lookup("SRGB").unwrap();
        let c = r.lookup("srgb").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&b, &c));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut r = Registry::new();
        r.register(make("sRGB")).unwrap();
        let err = r.register(make("SRGB")).unwrap_err();
        assert!(matches!(err, Error::DuplicateColourspaceName(_)));
    }

    #[test]
    fn test_alias_resolves_to_same_descriptor() {
        let mut r = Registry::new();
        r.register(make("ACES2065-1")).unwrap();
        r.register_alias("aces", "ACES2065-1").unwrap();

        let full = r.lookup("ACES2065-1").unwrap();
        let short = r.lookup("ACES").unwrap();
        assert!(Arc::ptr_eq(&full, &short));
        // Aliases do not show up as canonical names
        assert_eq!(r.names(), vec!["ACES2065-1"]);
    }

    #[test]
    fn test_alias_requires_canonical() {
        let mut r = Registry::new();
        let err = r.register_alias("aces", "ACES2065-1").unwrap_err();
        assert!(matches!(err, Error::UnknownColourspaceName(_)));
    }

    #[test]
    fn test_alias_collision_rejected() {
        let mut r = Registry::new();
        r.register(make("sRGB")).unwrap();
        r.register(make("ACES2065-1")).unwrap();
        let err = r.register_alias("SRGB", "ACES2065-1").unwrap_err();
        assert!(matches!(err, Error::DuplicateColourspaceName(_)));
    }

    #[test]
    fn test_unknown_lookup() {
        let r = Registry::new();
        let err = r.lookup("nope").unwrap_err();
        assert!(matches!(err, Error::UnknownColourspaceName(_)));
    }

    #[test]
    fn test_default_registry_aliases() {
        let aces = registry().lookup("aces").unwrap();
        let full = registry().lookup("ACES2065-1").unwrap();
        assert!(Arc::ptr_eq(&aces, &full));

        let prophoto = registry().lookup("prophoto").unwrap();
        assert_eq!(prophoto.name(), "ProPhoto RGB");
    }
}
