use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for relation inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// How field type names are resolved against candidate types
    pub match_mode: MatchMode,

    /// Also match generic type arguments (`List<Address>` -> Address)
    pub match_type_arguments: bool,

    /// Keep only types carrying every one of these annotations (empty = keep all)
    #[serde(default)]
    pub required_annotations: Vec<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::SimpleName,
            match_type_arguments: true,
            required_annotations: Vec::new(),
        }
    }
}

impl InferenceConfig {
    /// Resolve references with package information where it is available
    pub fn package_aware() -> Self {
        Self {
            match_mode: MatchMode::PackageAware,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.required_annotations.iter().any(|a| a.trim().is_empty()) {
            return Err(GraphError::invalid_config(
                "required_annotations must not contain empty names",
            ));
        }

        Ok(())
    }
}

/// Strategy for matching a referenced type name to a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Exact string equality on the simple name. Same-named types in
    /// unrelated packages all match.
    SimpleName,

    /// Qualified references must match `package.Name`; simple references
    /// match when the packages agree, the source imports the target (or its
    /// package with `.*`), or either side has no package.
    PackageAware,
}
