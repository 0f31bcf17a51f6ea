//! Request signatures
//!
//! A signature is the deterministic serialization of an endpoint template
//! and its resolved parameters, used as the response-cache key. Parameters
//! are serialized in sorted key order, so two logically identical requests
//! produce the same signature regardless of arrival order.

use std::collections::BTreeMap;
use std::fmt;

/// Deterministic cache key for a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestSignature(String);

impl RequestSignature {
    /// Build a signature from an endpoint template and resolved parameters.
    ///
    /// The map's sorted iteration order is the serialization order.
    #[must_use]
    pub fn new(template: &str, params: &BTreeMap<&'static str, String>) -> Self {
        if params.is_empty() {
            return Self(template.to_string());
        }
        let query: Vec<String> = params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        Self(format!("{template}?{}", query.join("&")))
    }

    /// The signature as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        entries
            .iter()
            .map(|(name, value)| (*name, (*value).to_string()))
            .collect()
    }

    #[test]
    fn parameterless_signature_is_the_template() {
        let sig = RequestSignature::new("/seasons", &BTreeMap::new());
        assert_eq!(sig.as_str(), "/seasons");
    }

    #[test]
    fn parameters_serialize_in_sorted_order() {
        let sig = RequestSignature::new(
            "/laps/{year}/{round}",
            &pairs(&[("year", "2024"), ("round", "5"), ("lap", "12")]),
        );
        assert_eq!(sig.as_str(), "/laps/{year}/{round}?lap=12&round=5&year=2024");
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let forward = RequestSignature::new(
            "/races/{year}/{round}",
            &pairs(&[("year", "2024"), ("round", "5")]),
        );
        let reversed = RequestSignature::new(
            "/races/{year}/{round}",
            &pairs(&[("round", "5"), ("year", "2024")]),
        );
        assert_eq!(forward, reversed);
    }

    #[test]
    fn different_templates_differ() {
        let seasons = RequestSignature::new("/seasons/{year}", &pairs(&[("year", "2024")]));
        let races = RequestSignature::new("/races/{year}", &pairs(&[("year", "2024")]));
        assert_ne!(seasons, races);
    }

    #[test]
    fn different_values_differ() {
        let a = RequestSignature::new("/seasons/{year}", &pairs(&[("year", "2024")]));
        let b = RequestSignature::new("/seasons/{year}", &pairs(&[("year", "2023")]));
        assert_ne!(a, b);
    }
}
