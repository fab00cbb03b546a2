//! Citation marker insertion

use std::cmp::Reverse;
use std::collections::HashSet;

use super::CitationMap;

/// Insert citation markers after the phrases found in `text`
///
/// Phrases are tried longest first (by character count; ties keep map
/// order), so `RESTful API` wins over `REST API`. Each phrase present in
/// the text gets `" " + marker` right after its first occurrence, and a
/// marker is added at most once per call even if several phrases share it.
///
/// When the first occurrence is already followed by its marker, the marker
/// counts as used and nothing is inserted, so annotating annotated text
/// is a no-op.
///
/// Matching is plain substring containment: a phrase inside a longer word
/// still matches.
///
/// ```
/// use habitdoc_core::citations::{annotate, CitationMap};
///
/// let map = CitationMap::from_pairs([("Spring Boot 3.2.0", "[1]"), ("MongoDB", "[5]")]);
/// assert_eq!(
///     annotate("Бекенд використовує Spring Boot 3.2.0 та MongoDB.", &map),
///     "Бекенд використовує Spring Boot 3.2.0 [1] та MongoDB [5]."
/// );
/// ```
pub fn annotate(text: &str, map: &CitationMap) -> String {
    let mut ordered: Vec<&(String, String)> = map.entries().iter().collect();
    ordered.sort_by_key(|(phrase, _)| Reverse(phrase.chars().count()));

    let mut result = text.to_string();
    let mut used: HashSet<&str> = HashSet::new();

    for (phrase, marker) in ordered {
        if phrase.is_empty() || used.contains(marker.as_str()) {
            continue;
        }
        let Some(start) = result.find(phrase.as_str()) else {
            continue;
        };
        used.insert(marker.as_str());

        let end = start + phrase.len();
        let insertion = format!(" {marker}");
        let already_cited = result
            .get(end..)
            .is_some_and(|rest| rest.starts_with(&insertion));
        if !already_cited {
            result.insert_str(end, &insertion);
        }
    }

    result
}
