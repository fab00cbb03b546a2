//! Reference entries and phrase-to-marker maps

use std::collections::BTreeMap;

use super::CiteError;

/// A numbered bibliography entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: u32,
    pub text: String,
}

impl ReferenceEntry {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Reference entries keyed by a short topic label such as `spring_boot`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: BTreeMap<String, ReferenceEntry>,
}

impl ReferenceTable {
    /// Build a table, rejecting duplicate topics or ids
    pub fn new<I, K>(entries: I) -> Result<Self, CiteError>
    where
        I: IntoIterator<Item = (K, ReferenceEntry)>,
        K: Into<String>,
    {
        let mut table = BTreeMap::new();
        let mut seen_ids = BTreeMap::new();
        for (topic, entry) in entries {
            let topic = topic.into();
            if let Some(other) = seen_ids.insert(entry.id, topic.clone()) {
                return Err(CiteError::DuplicateId {
                    id: entry.id,
                    first: other,
                    second: topic,
                });
            }
            if table.insert(topic.clone(), entry).is_some() {
                return Err(CiteError::DuplicateTopic(topic));
            }
        }
        Ok(Self { entries: table })
    }

    pub fn get(&self, topic: &str) -> Option<&ReferenceEntry> {
        self.entries.get(topic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending id order
    pub fn sorted_by_id(&self) -> Vec<&ReferenceEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by_key(|e| e.id);
        entries
    }

    /// The bracketed marker citing the given topics, e.g. `[2, 4]`
    pub fn marker<S: AsRef<str>>(&self, topics: &[S]) -> Result<String, CiteError> {
        let ids = topics
            .iter()
            .map(|topic| {
                self.get(topic.as_ref())
                    .map(|e| e.id.to_string())
                    .ok_or_else(|| CiteError::UnknownTopic(topic.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Err(CiteError::EmptyRule);
        }
        Ok(format!("[{}]", ids.join(", ")))
    }
}

/// Ordered phrase to marker pairs
///
/// Insertion order is kept; [`annotate`](super::annotate) uses it to
/// break ties between phrases of the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationMap {
    entries: Vec<(String, String)>,
}

impl CitationMap {
    /// Build a map from literal `(phrase, marker)` pairs
    pub fn from_pairs<I, P, M>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, M)>,
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(p, m)| (p.into(), m.into()))
                .collect(),
        }
    }

    /// Build a map from phrase rules naming reference topics
    pub fn from_rules<'a, I, S>(table: &ReferenceTable, rules: I) -> Result<Self, CiteError>
    where
        I: IntoIterator<Item = (&'a str, &'a [S])>,
        S: AsRef<str> + 'a,
    {
        let mut entries = Vec::new();
        for (phrase, topics) in rules {
            if phrase.is_empty() {
                return Err(CiteError::EmptyPhrase);
            }
            let marker = table.marker(topics).map_err(|e| match e {
                CiteError::UnknownTopic(topic) => CiteError::UnknownPhraseTopic {
                    phrase: phrase.to_string(),
                    topic,
                },
                other => other,
            })?;
            entries.push((phrase.to_string(), marker));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any phrase occurs in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.entries
            .iter()
            .any(|(phrase, _)| !phrase.is_empty() && text.contains(phrase.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ReferenceTable {
        ReferenceTable::new([
            (
                "spring_security",
                ReferenceEntry::new(2, "Spring Security Reference."),
            ),
            ("jwt", ReferenceEntry::new(4, "RFC 7519.")),
            ("mongodb", ReferenceEntry::new(5, "MongoDB Documentation.")),
        ])
        .unwrap()
    }

    #[test]
    fn test_marker_joins_ids_in_rule_order() {
        let table = table();
        assert_eq!(table.marker(&["spring_security", "jwt"]).unwrap(), "[2, 4]");
        assert_eq!(table.marker(&["jwt", "spring_security"]).unwrap(), "[4, 2]");
        assert_eq!(table.marker(&["mongodb"]).unwrap(), "[5]");
    }

    #[test]
    fn test_unknown_topic_is_rejected() {
        let err = CitationMap::from_rules(&table(), [("Kafka", &["kafka"][..])]).unwrap_err();
        assert_eq!(
            err,
            CiteError::UnknownPhraseTopic {
                phrase: "Kafka".to_string(),
                topic: "kafka".to_string()
            }
        );
    }

    #[test]
    fn test_rule_without_topics_is_rejected() {
        let no_topics: &[&str] = &[];
        let err = CitationMap::from_rules(&table(), [("MongoDB", no_topics)]).unwrap_err();
        assert_eq!(err, CiteError::EmptyRule);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = ReferenceTable::new([
            ("a", ReferenceEntry::new(1, "A")),
            ("b", ReferenceEntry::new(1, "B")),
        ])
        .unwrap_err();
        assert!(matches!(err, CiteError::DuplicateId { id: 1, .. }));
    }

    #[test]
    fn test_sorted_by_id_ignores_topic_order() {
        let table = ReferenceTable::new([
            ("zeta", ReferenceEntry::new(1, "first")),
            ("alpha", ReferenceEntry::new(3, "third")),
            ("mid", ReferenceEntry::new(2, "second")),
        ])
        .unwrap();
        let ids: Vec<_> = table.sorted_by_id().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_map_matches_substrings() {
        let map = CitationMap::from_pairs([("MongoDB", "[5]")]);
        assert!(map.matches("дані зберігаються у MongoDB."));
        assert!(!map.matches("дані зберігаються у PostgreSQL."));
    }
}
