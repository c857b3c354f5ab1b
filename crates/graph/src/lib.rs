//! # Class Graph
//!
//! Relationship graphs over introspected source types, the input for
//! class-relationship diagrams.
//!
//! ## Features
//!
//! - **Relation inference** - a type encapsulates another when one of its
//!   fields (or a field's generic type argument) names it
//! - **Name lookup** - every type with a given simple name, across packages
//! - **Neighborhoods** - bounded-depth, cycle-safe sub-models around a type
//! - **Type filters** - restrict the model to annotated types
//!
//! ## Architecture
//!
//! ```text
//! Type[] (from an introspector)
//!     │
//!     ├──> Model Builder
//!     │      ├─ Apply type filters
//!     │      ├─ Match field types / type arguments against type names
//!     │      └─ Emit one Encapsulates edge per (from, to)
//!     │
//!     ├──> Model (petgraph)
//!     │      ├─ Nodes: shared Type descriptors
//!     │      └─ Edges: RelationType
//!     │
//!     └──> Neighborhood
//!            ├─ Breadth-first, both directions, up to depth
//!            └─ New Model with the reached types and their relations
//! ```
//!
//! ## Example
//!
//! ```rust
//! use class_graph::{Field, ModelBuilder, Type};
//!
//! let types = vec![
//!     Type::new("User", "app").field(Field::new("address", "Address")),
//!     Type::new("Address", "app").field(Field::new("city", "String")),
//! ];
//!
//! let model = ModelBuilder::new().build(types);
//! assert_eq!(model.relation_count(), 1);
//!
//! let focused = model.focus("Address", 1).unwrap();
//! assert_eq!(focused.type_count(), 2);
//! ```

mod builder;
mod config;
mod error;
mod filter;
mod graph;
mod model;
mod types;

pub use builder::ModelBuilder;
pub use config::{InferenceConfig, MatchMode};
pub use error::{GraphError, Result};
pub use filter::TypeFilter;
pub use model::{Model, RelationType, TypeId, TypeRelation};
pub use types::{Annotation, Field, Method, Parameter, Type, TypeKind, Visibility};
