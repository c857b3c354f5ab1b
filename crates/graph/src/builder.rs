use crate::config::{InferenceConfig, MatchMode};
use crate::error::Result;
use crate::filter::{accepts_all, TypeFilter};
use crate::model::{Model, RelationType, TypeId};
use crate::types::{Field, Type};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Assembles introspected types into a [`Model`] with inferred relations
#[derive(Debug, Default)]
pub struct ModelBuilder {
    config: InferenceConfig,
    filters: Vec<TypeFilter>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InferenceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            filters: Vec::new(),
        })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Keep only types annotated with `annotation`. Unannotated types drop
    /// out of the model entirely.
    #[must_use]
    pub fn filter_for_annotation(self, annotation: impl Into<String>) -> Self {
        self.filter(TypeFilter::annotated_with(annotation))
    }

    /// Keep only types accepted by `predicate`
    #[must_use]
    pub fn filter_each_type(
        self,
        predicate: impl Fn(&Type) -> bool + Send + Sync + 'static,
    ) -> Self {
        let label = format!("custom#{}", self.filters.len());
        self.filter(TypeFilter::new(label, predicate))
    }

    #[must_use]
    pub fn filter(mut self, filter: TypeFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Build model from introspected types
    pub fn build(&self, types: Vec<Type>) -> Model {
        self.build_shared(types.into_iter().map(Arc::new).collect())
    }

    /// Build model from types shared with the caller
    pub fn build_shared(&self, types: Vec<Arc<Type>>) -> Model {
        let total = types.len();

        // Phase 1: Filter and create nodes
        let kept = types.into_iter().filter(|ty| self.keeps(ty));
        let mut model = Model::with_types(kept);

        if model.type_count() < total {
            log::debug!(
                "Filtered out {} of {} types",
                total - model.type_count(),
                total
            );
        }

        // Phase 2: Infer encapsulation, one target set per source
        let ids: Vec<TypeId> = model.type_ids().collect();
        let mut encapsulations: Vec<(TypeId, BTreeSet<TypeId>)> = Vec::new();

        for &source_id in &ids {
            let Some(source) = model.get_type(source_id) else {
                continue;
            };

            let mut targets = BTreeSet::new();
            for &target_id in &ids {
                if source_id == target_id {
                    continue;
                }
                let Some(target) = model.get_type(target_id) else {
                    continue;
                };

                if source
                    .fields
                    .iter()
                    .any(|field| self.field_references(source, field, target))
                {
                    targets.insert(target_id);
                }
            }

            if !targets.is_empty() {
                log::debug!(
                    "{} encapsulates {} type(s)",
                    source.qualified_name(),
                    targets.len()
                );
                encapsulations.push((source_id, targets));
            }
        }

        // Phase 3: Create relations
        for (source_id, targets) in encapsulations {
            for target_id in targets {
                // Both ids were issued by `model` above
                if let Err(e) = model.add_relation(source_id, target_id, RelationType::Encapsulates) {
                    log::warn!("Skipping relation: {}", e);
                }
            }
        }

        log::info!(
            "Built type model: {} types, {} relations",
            model.type_count(),
            model.relation_count()
        );

        model
    }

    fn keeps(&self, ty: &Type) -> bool {
        self.config
            .required_annotations
            .iter()
            .all(|annotation| ty.has_annotation(annotation))
            && accepts_all(&self.filters, ty)
    }

    /// Does `field` of `source` name `target`?
    fn field_references(&self, source: &Type, field: &Field, target: &Type) -> bool {
        if self.refers_to(source, &field.type_name, target) {
            return true;
        }

        self.config.match_type_arguments
            && field
                .type_arguments
                .iter()
                .any(|arg| self.refers_to(source, arg, target))
    }

    fn refers_to(&self, source: &Type, reference: &str, target: &Type) -> bool {
        match self.config.match_mode {
            MatchMode::SimpleName => reference == target.name,
            MatchMode::PackageAware => resolves_in_package(source, reference, target),
        }
    }
}

fn resolves_in_package(source: &Type, reference: &str, target: &Type) -> bool {
    if reference.contains('.') {
        return reference == target.qualified_name();
    }
    if reference != target.name {
        return false;
    }

    // Without package information fall back to the name alone
    if source.package.is_empty() || target.package.is_empty() {
        return true;
    }
    if source.package == target.package {
        return true;
    }

    let qualified = target.qualified_name();
    let wildcard = format!("{}.*", target.package);
    source
        .imports
        .iter()
        .any(|import| *import == qualified || *import == wildcard)
}
