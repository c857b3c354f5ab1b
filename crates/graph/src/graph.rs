use crate::error::{GraphError, Result};
use crate::model::{Model, TypeId};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, VecDeque};

impl Model {
    /// Types directly related to `id` in either direction, without duplicates
    pub fn neighbors(&self, id: TypeId) -> Vec<TypeId> {
        let mut seen = Vec::new();
        for idx in self.graph.neighbors_undirected(id.0) {
            let neighbor = TypeId(idx);
            if !seen.contains(&neighbor) {
                seen.push(neighbor);
            }
        }
        seen
    }

    /// Sub-model of every type within `depth` hops of `seed`, following
    /// relations in either direction, plus the relations among them.
    ///
    /// Types appear in discovery order with the seed first. The result shares
    /// type data with `self`; handles are re-issued by the new model.
    pub fn neighborhood(&self, seed: TypeId, depth: usize) -> Result<Model> {
        self.check(seed)?;
        Ok(self.extract(&[seed], depth))
    }

    /// Neighborhood of every type named `name`, merged into one model
    pub fn focus(&self, name: &str, depth: usize) -> Result<Model> {
        let seeds = self.types_with_name(name);
        if seeds.is_empty() {
            return Err(GraphError::type_not_found(name));
        }
        Ok(self.extract(&seeds, depth))
    }

    /// Breadth-first expansion from `seeds`. Each node is expanded at most
    /// once and at its shortest distance.
    fn extract(&self, seeds: &[TypeId], depth: usize) -> Model {
        let mut order: Vec<NodeIndex> = Vec::new();
        let mut distance: HashMap<NodeIndex, usize> = HashMap::new();
        let mut queue = VecDeque::new();

        for seed in seeds {
            if distance.insert(seed.0, 0).is_none() {
                order.push(seed.0);
                queue.push_back(seed.0);
            }
        }

        while let Some(current) = queue.pop_front() {
            let level = distance[&current];
            if level >= depth {
                continue;
            }

            for next in self.graph.neighbors_undirected(current) {
                if distance.contains_key(&next) {
                    continue;
                }
                distance.insert(next, level + 1);
                order.push(next);
                queue.push_back(next);
            }
        }

        let mut sub = Model::new();
        let mut remap: HashMap<NodeIndex, TypeId> = HashMap::with_capacity(order.len());
        for idx in &order {
            let id = sub.add_type(self.graph[*idx].clone());
            remap.insert(*idx, id);
        }

        for edge in self.graph.edge_references() {
            if let (Some(&from), Some(&to)) = (remap.get(&edge.source()), remap.get(&edge.target())) {
                sub.graph.add_edge(from.0, to.0, *edge.weight());
            }
        }

        log::debug!(
            "Extracted neighborhood (depth {}): {} of {} types, {} of {} relations",
            depth,
            sub.type_count(),
            self.type_count(),
            sub.relation_count(),
            self.relation_count()
        );

        sub
    }
}
