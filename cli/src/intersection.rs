use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("intersection names no streets")]
pub struct NoStreets;

/// A street intersection, identified by the set of its cross streets.
///
/// Street names are trimmed and compared case-insensitively; their order in
/// the source text does not matter. `"Oak, Main"` and `"main,OAK"` are the
/// same intersection.
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Sorted case-insensitively, source spelling kept for display.
    streets: Vec<String>,
    /// Lowercased streets joined with `,`: the identity used by Eq and Hash.
    key: String,
}

impl Intersection {
    pub fn streets(&self) -> &[String] {
        &self.streets
    }

    /// The street `self` and `other` have in common, spelled as in `other`.
    ///
    /// When several match, the last in sorted order wins.
    pub fn shared_street<'a>(&self, other: &'a Intersection) -> Option<&'a str> {
        other
            .streets
            .iter()
            .filter(|candidate| self.streets.iter().any(|own| same_street(own, candidate)))
            .last()
            .map(String::as_str)
    }
}

fn same_street(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl FromStr for Intersection {
    type Err = NoStreets;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut streets: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|street| !street.is_empty())
            .map(str::to_string)
            .collect();
        if streets.is_empty() {
            return Err(NoStreets);
        }

        streets.sort_by_cached_key(|street| (street.to_lowercase(), street.clone()));
        streets.dedup_by(|a, b| same_street(a, b));
        let key = streets
            .iter()
            .map(|street| street.to_lowercase())
            .collect::<Vec<_>>()
            .join(",");

        Ok(Self { streets, key })
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Intersection {}

impl Hash for Intersection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.streets.join(","))
    }
}

impl Serialize for Intersection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn at(s: &str) -> Intersection {
        s.parse().unwrap()
    }

    #[test]
    fn test_order_and_case_insensitive() {
        assert_eq!(at("Oak,Main"), at("main, OAK"));
        assert_ne!(at("Oak,Main"), at("Oak,Elm"));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(at("Oak,Main"));
        assert!(set.contains(&at(" MAIN ,oak")));
        assert!(!set.contains(&at("Main")));
    }

    #[test]
    fn test_display_sorted() {
        assert_eq!(at("oak, Main").to_string(), "Main,oak");
        assert_eq!(at("b,A,c").to_string(), "A,b,c");
    }

    #[test]
    fn test_duplicate_streets_collapse() {
        let i = at("Main,MAIN,Oak");
        assert_eq!(i.streets().len(), 2);
        assert_eq!(i, at("Oak,Main"));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!("".parse::<Intersection>().unwrap_err(), NoStreets);
        assert_eq!(" , ,".parse::<Intersection>().unwrap_err(), NoStreets);
    }

    #[test]
    fn test_shared_street() {
        let home = at("Main,Oak");
        assert_eq!(home.shared_street(&at("MAIN,Elm")), Some("MAIN"));
        assert_eq!(home.shared_street(&at("Elm,Pine")), None);
    }

    #[test]
    fn test_serializes_as_display() {
        let json = serde_json::to_string(&at("Oak,Main")).unwrap();
        assert_eq!(json, "\"Main,Oak\"");
    }
}
