use crate::types::Type;
use std::fmt;

/// Predicate deciding whether a type takes part in the model
pub struct TypeFilter {
    label: String,
    predicate: Box<dyn Fn(&Type) -> bool + Send + Sync>,
}

impl TypeFilter {
    pub fn new(
        label: impl Into<String>,
        predicate: impl Fn(&Type) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Accept only types annotated with `annotation`
    pub fn annotated_with(annotation: impl Into<String>) -> Self {
        let annotation = annotation.into();
        Self::new(format!("@{annotation}"), move |ty| {
            ty.has_annotation(&annotation)
        })
    }

    pub fn accepts(&self, ty: &Type) -> bool {
        (self.predicate)(ty)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeFilter")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// True when every filter accepts the type
pub(crate) fn accepts_all(filters: &[TypeFilter], ty: &Type) -> bool {
    filters.iter().all(|filter| filter.accepts(ty))
}
