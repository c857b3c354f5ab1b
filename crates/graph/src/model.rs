use crate::error::{GraphError, Result};
use crate::types::Type;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Handle of a type inside one [`Model`]. Handles are only meaningful for
/// the model that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub(crate) NodeIndex);

impl TypeId {
    /// Position of the type in the model's type list
    pub fn index(self) -> usize {
        self.0.index()
    }
}

/// Kind of relationship between two types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RelationType {
    /// A holds a field whose declared type, or one of its type arguments, is B
    Encapsulates,
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationType::Encapsulates => f.write_str("encapsulates"),
        }
    }
}

/// Directed, labeled relation `from -> to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRelation {
    pub from: TypeId,
    pub to: TypeId,
    pub kind: RelationType,
}

/// Types plus the relations between them
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Nodes are types in insertion order; edges are relations
    pub(crate) graph: DiGraph<Arc<Type>, RelationType>,
}

impl Model {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    /// Model holding `types` in order and no relations
    pub fn with_types(types: impl IntoIterator<Item = Arc<Type>>) -> Self {
        let mut model = Self::new();
        for ty in types {
            model.add_type(ty);
        }
        model
    }

    /// Append a type. Same-named types are distinct nodes.
    pub fn add_type(&mut self, ty: Arc<Type>) -> TypeId {
        TypeId(self.graph.add_node(ty))
    }

    /// Add a relation unless an identical one already exists
    pub fn add_relation(&mut self, from: TypeId, to: TypeId, kind: RelationType) -> Result<()> {
        self.check(from)?;
        self.check(to)?;

        if self.find_relation(from, to, kind).is_none() {
            self.graph.add_edge(from.0, to.0, kind);
        }
        Ok(())
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.graph.node_weight(id.0).is_some()
    }

    pub(crate) fn check(&self, id: TypeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::type_not_found(format!("#{}", id.index())))
        }
    }

    /// Get type data
    pub fn get_type(&self, id: TypeId) -> Option<&Type> {
        self.graph.node_weight(id.0).map(Arc::as_ref)
    }

    /// Shared handle to the type data
    pub fn get_shared(&self, id: TypeId) -> Option<&Arc<Type>> {
        self.graph.node_weight(id.0)
    }

    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.graph.node_indices().map(TypeId)
    }

    /// All types in insertion order
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.graph
            .node_indices()
            .map(move |idx| (TypeId(idx), self.graph[idx].as_ref()))
    }

    /// All relations in creation order
    pub fn relations(&self) -> impl Iterator<Item = TypeRelation> + '_ {
        self.graph.edge_references().map(|e| TypeRelation {
            from: TypeId(e.source()),
            to: TypeId(e.target()),
            kind: *e.weight(),
        })
    }

    pub fn relations_from(&self, id: TypeId) -> Vec<TypeRelation> {
        self.relations().filter(|r| r.from == id).collect()
    }

    pub fn relations_to(&self, id: TypeId) -> Vec<TypeRelation> {
        self.relations().filter(|r| r.to == id).collect()
    }

    pub fn find_relation(&self, from: TypeId, to: TypeId, kind: RelationType) -> Option<TypeRelation> {
        self.graph
            .edges_connecting(from.0, to.0)
            .find(|e| *e.weight() == kind)
            .map(|_| TypeRelation { from, to, kind })
    }

    /// Every type whose simple name equals `name`, in model order
    pub fn types_with_name(&self, name: &str) -> Vec<TypeId> {
        self.types()
            .filter(|(_, ty)| ty.name == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// Types with no incoming or outgoing relation
    pub fn unused_types(&self) -> Vec<TypeId> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Outgoing)
                    .next()
                    .is_none()
                    && self
                        .graph
                        .neighbors_directed(idx, Direction::Incoming)
                        .next()
                        .is_none()
            })
            .map(TypeId)
            .collect()
    }

    pub fn type_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model {{")?;
        for (_, ty) in self.types() {
            writeln!(f, " {},", ty.name)?;
        }
        write!(f, "}}")
    }
}
