//! Topic registry implementation for the quiz app
//!
//! Topics are compiled into a static table. The registry only reads that
//! table: there is no way to add, remove or edit a topic at runtime.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use super::catalog::TOPICS;

/// A quiz topic with its display metadata
///
/// `icon` and `color` are handed to the renderer untouched, and `data_file` is
/// handed to whatever loads question content. None of them are checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) slug: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) color: &'static str,
    pub(crate) total_questions: u32,
    pub(crate) data_file: &'static str,
}

impl Topic {
    /// Stable identifier used for lookups
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Routing identifier. Currently equal to `id` for every topic, but
    /// callers should not rely on that.
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Hex color in `#RRGGBB` form
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Declared number of questions, not verified against the data file
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Path of the question data, relative to the data root
    pub fn data_file(&self) -> &'static str {
        self.data_file
    }

    /// Resolves `data_file` under `root`
    ///
    /// The file is neither opened nor checked for existence.
    pub fn data_path(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(self.data_file)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Returns the full catalog in display order
pub fn topics() -> &'static [Topic] {
    TOPICS
}

/// Finds the topic whose id is exactly `topic_id`
///
/// Ids are compared byte for byte, with no trimming or case folding.
///
/// # Returns
///
/// * `Some(&Topic)` - The first topic with a matching id
/// * `None` - If no topic has that id
pub fn get_topic_by_id(topic_id: &str) -> Option<&'static Topic> {
    TopicRegistry::new().get_topic(topic_id)
}

/// Read-only handle over a topic catalog
///
/// Cheap to copy and safe to share between threads; every handle observes the
/// same static data.
#[derive(Debug, Clone, Copy)]
pub struct TopicRegistry {
    topics: &'static [Topic],
}

impl TopicRegistry {
    /// Creates a registry over the built-in catalog
    pub fn new() -> Self {
        TopicRegistry { topics: TOPICS }
    }

    /// Gets a topic by its identifier
    ///
    /// # Arguments
    ///
    /// * `topic_id` - The identifier to look for, compared exactly
    ///
    /// # Returns
    ///
    /// * `Some(&Topic)` - The topic if it exists
    /// * `None` - If the topic does not exist
    pub fn get_topic(&self, topic_id: &str) -> Option<&'static Topic> {
        let found = self.topics.iter().find(|topic| topic.id == topic_id);
        if found.is_none() {
            trace!("no topic with id {:?}", topic_id);
        }
        found
    }

    /// Gets a topic by its routing slug
    ///
    /// # Returns
    ///
    /// * `Some(&Topic)` - The first topic with a matching slug
    /// * `None` - If no topic has that slug
    pub fn get_topic_by_slug(&self, slug: &str) -> Option<&'static Topic> {
        let found = self.topics.iter().find(|topic| topic.slug == slug);
        if found.is_none() {
            trace!("no topic with slug {:?}", slug);
        }
        found
    }

    /// Like [`get_topic`](Self::get_topic), but turns a miss into an error so
    /// callers can propagate it with `?`
    ///
    /// # Returns
    ///
    /// * `Ok(&Topic)` - The topic if it exists
    /// * `Err(TopicRegistryError::TopicNotFound)` - If the topic does not exist
    pub fn require_topic(&self, topic_id: &str) -> Result<&'static Topic, TopicRegistryError> {
        self.get_topic(topic_id).ok_or_else(|| {
            debug!("required topic {:?} is not in the catalog", topic_id);
            TopicRegistryError::TopicNotFound(topic_id.to_string())
        })
    }

    /// Lists all topics in display order
    pub fn list_topics(&self) -> &'static [Topic] {
        self.topics
    }

    pub fn iter(&self) -> std::slice::Iter<'static, Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Sum of the declared question counts across all topics
    pub fn total_questions(&self) -> u32 {
        self.topics.iter().map(Topic::total_questions).sum()
    }
}

impl Default for TopicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for TopicRegistry {
    type Item = &'static Topic;
    type IntoIter = std::slice::Iter<'static, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

/// Error types for topic registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicRegistryError {
    /// Topic not found in the registry
    #[error("Topic '{0}' not found")]
    TopicNotFound(String),
}
