//! Adapter descriptors and their registry.

use derive_getters::Getters;
use std::collections::BTreeMap;
use tintoretto_core::{Destination, PublishRequest, WireEncoding, WirePayload};

use crate::adapters::builtin_adapters;

/// Everything the publisher needs to reach one destination.
///
/// A spec is data plus two plain functions: a request builder producing the
/// destination's wire shape, and a validation predicate run before any
/// dispatch. Keeping both as function pointers makes specs cheap to clone,
/// structurally comparable, and testable one at a time.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct AdapterSpec {
    /// Destination this spec serves
    destination: Destination,
    /// Body encoding the endpoint expects
    encoding: WireEncoding,
    /// Endpoint path, joined to the publisher's API base
    path: String,
    /// Builds the destination's wire payload from a request
    build: fn(&PublishRequest) -> WirePayload,
    /// Local precondition checked before dispatch
    check: fn(&PublishRequest) -> Result<(), String>,
}

impl AdapterSpec {
    /// Define an adapter.
    pub fn new(
        destination: Destination,
        encoding: WireEncoding,
        path: impl Into<String>,
        build: fn(&PublishRequest) -> WirePayload,
        check: fn(&PublishRequest) -> Result<(), String>,
    ) -> Self {
        Self {
            destination,
            encoding,
            path: path.into(),
            build,
            check,
        }
    }

    /// Build the wire payload for a request.
    pub fn build_payload(&self, request: &PublishRequest) -> WirePayload {
        (self.build)(request)
    }

    /// Run the adapter's validation predicate.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when the request does not meet the
    /// destination's local preconditions.
    pub fn validate(&self, request: &PublishRequest) -> Result<(), String> {
        (self.check)(request)
    }

    /// Resolve the full endpoint URL against an API base.
    pub fn endpoint(&self, api_base: &str) -> String {
        format!(
            "{}/{}",
            api_base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Lookup table from destination to adapter.
///
/// `resolve` is a pure lookup: no side effects, structurally equal results
/// on repeated calls.
#[derive(Debug, Clone)]
pub struct AdapterRegistry {
    adapters: BTreeMap<Destination, AdapterSpec>,
}

impl AdapterRegistry {
    /// Build a registry from explicit adapters.
    ///
    /// Later entries for the same destination replace earlier ones.
    pub fn with_adapters(specs: impl IntoIterator<Item = AdapterSpec>) -> Self {
        let adapters = specs
            .into_iter()
            .map(|spec| (*spec.destination(), spec))
            .collect();
        Self { adapters }
    }

    /// Look up the adapter for a destination.
    pub fn resolve(&self, destination: Destination) -> Option<&AdapterSpec> {
        self.adapters.get(&destination)
    }

    /// Destinations this registry can dispatch to.
    pub fn supported(&self) -> Vec<Destination> {
        self.adapters.keys().copied().collect()
    }
}

impl Default for AdapterRegistry {
    /// Registry with every built-in destination adapter.
    fn default() -> Self {
        Self::with_adapters(builtin_adapters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_registry_covers_every_destination() {
        let registry = AdapterRegistry::default();
        for destination in Destination::iter() {
            assert!(registry.resolve(destination).is_some(), "{}", destination);
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let registry = AdapterRegistry::default();
        let first = registry.resolve(Destination::Mastodon).cloned();
        let second = registry.resolve(Destination::Mastodon).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let registry = AdapterRegistry::default();
        let spec = registry.resolve(Destination::Facebook).unwrap();
        assert_eq!(
            spec.endpoint("https://api.example.com/v1/"),
            "https://api.example.com/v1/publish/facebook"
        );
    }

    #[test]
    fn partial_registry_omits_unlisted_destinations() {
        let facebook = AdapterRegistry::default()
            .resolve(Destination::Facebook)
            .cloned()
            .unwrap();
        let registry = AdapterRegistry::with_adapters([facebook]);
        assert!(registry.resolve(Destination::Facebook).is_some());
        assert!(registry.resolve(Destination::Mastodon).is_none());
        assert_eq!(registry.supported(), vec![Destination::Facebook]);
    }
}
