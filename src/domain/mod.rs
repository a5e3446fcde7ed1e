//! Domain layer - Core types with no knowledge of HTTP or the model API
//!
//! This layer contains:
//! - Entities: the scene breakdown record
//! - Value Objects: teaser, classification, style context, session ids

pub mod entities;
pub mod value_objects;
