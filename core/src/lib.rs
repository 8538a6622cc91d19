//! Quiz topic catalog.
//!
//! The catalog is a compiled-in, read-only table of [`Topic`] records. Look a
//! topic up with [`get_topic_by_id`] or hold a [`TopicRegistry`] handle.

pub mod topic_registry;

pub use topic_registry::{
    get_topic_by_id, topics, Topic, TopicRegistry, TopicRegistryError, TOPICS,
};
