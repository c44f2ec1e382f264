//! Static catalog of science topics.
//!
//! Each topic carries a title, an embeddable 3D viewer URL, and a set of
//! descriptive key points. The key points double as the grounding context
//! sent to the answering service for every question asked about the topic.
//! The viewer URLs are opaque data; nothing in Kosmos fetches or renders
//! them.

mod topics;

use serde::{Deserialize, Serialize};

use kosmos_core::Subject;

pub use topics::catalog;

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable slug, unique across the whole catalog.
    pub id: String,
    pub subject: Subject,
    pub title: String,
    /// Public page for the 3D model.
    pub viewer_url: String,
    /// Embeddable viewer URL for hosts that render the model inline.
    pub embed_url: String,
    /// Descriptive key points shown to the user and used as answer grounding.
    pub key_points: Vec<String>,
}

impl Topic {
    /// The grounding context for this topic: all key points joined into one
    /// block of text, passed verbatim to the answering service with every
    /// question.
    pub fn context(&self) -> String {
        self.key_points.join("\n")
    }
}

/// Look up a topic by its slug.
pub fn find(id: &str) -> Option<Topic> {
    catalog().into_iter().find(|t| t.id == id)
}

/// All topics for one subject, in catalog order.
pub fn by_subject(subject: Subject) -> Vec<Topic> {
    catalog()
        .into_iter()
        .filter(|t| t.subject == subject)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ---- Lookup ----

    #[test]
    fn test_find_known_topic() {
        let topic = find("atom").expect("atom should be in the catalog");
        assert_eq!(topic.subject, Subject::Chemistry);
        assert_eq!(topic.title, "Atom");
    }

    #[test]
    fn test_find_unknown_topic() {
        assert!(find("phlogiston").is_none());
    }

    #[test]
    fn test_by_subject_physics_nonempty() {
        let physics = by_subject(Subject::Physics);
        assert!(!physics.is_empty());
        assert!(physics.iter().all(|t| t.subject == Subject::Physics));
    }

    #[test]
    fn test_by_subject_biology_currently_empty() {
        // The catalog ships with physics and chemistry models; biology has
        // no seeded models yet.
        assert!(by_subject(Subject::Biology).is_empty());
    }

    // ---- Catalog integrity ----

    #[test]
    fn test_catalog_ids_unique() {
        let all = catalog();
        let ids: HashSet<_> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_catalog_entries_complete() {
        for topic in catalog() {
            assert!(!topic.id.is_empty());
            assert!(!topic.title.is_empty(), "topic {} has no title", topic.id);
            assert!(
                topic.embed_url.ends_with("/embed"),
                "topic {} has a non-embed viewer URL",
                topic.id
            );
            assert!(
                !topic.key_points.is_empty(),
                "topic {} has no key points",
                topic.id
            );
        }
    }

    // ---- Context derivation ----

    #[test]
    fn test_context_joins_key_points() {
        let topic = find("atom").unwrap();
        let context = topic.context();
        for point in &topic.key_points {
            assert!(context.contains(point.as_str()));
        }
        assert_eq!(
            context.matches('\n').count(),
            topic.key_points.len() - 1
        );
    }

    #[test]
    fn test_topic_serializes() {
        let topic = find("prism").unwrap();
        let json = serde_json::to_string(&topic).unwrap();
        assert!(json.contains("\"subject\":\"physics\""));
        let rt: Topic = serde_json::from_str(&json).unwrap();
        assert_eq!(rt, topic);
    }
}
