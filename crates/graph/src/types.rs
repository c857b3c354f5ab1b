use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of declared type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
}

/// Declared visibility of a member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    Package,
}

/// Class, interface or enum as produced by a source introspector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    /// Simple name (e.g., "User"). Not unique across packages.
    pub name: String,

    /// Package path (e.g., "com.example.model"). Empty when unknown.
    #[serde(default)]
    pub package: String,

    #[serde(default)]
    pub kind: TypeKind,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub methods: Vec<Method>,

    /// Names of super-types, unresolved
    #[serde(default)]
    pub super_type_names: Vec<String>,

    /// Names of implemented interfaces, unresolved
    #[serde(default)]
    pub interface_names: Vec<String>,

    /// Enclosing type name for nested types
    #[serde(default)]
    pub parent_type: Option<String>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    /// Documentation comment if available
    #[serde(default)]
    pub doc: Option<String>,

    #[serde(default)]
    pub imports: Vec<String>,
}

impl Type {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Default::default()
        }
    }

    /// Builder: set kind
    #[must_use]
    pub const fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder: add field
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Builder: add method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Builder: add super-type name
    #[must_use]
    pub fn super_type(mut self, name: impl Into<String>) -> Self {
        self.super_type_names.push(name.into());
        self
    }

    /// Builder: add implemented interface name
    #[must_use]
    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.interface_names.push(name.into());
        self
    }

    /// Builder: set enclosing type
    #[must_use]
    pub fn parent_type(mut self, name: impl Into<String>) -> Self {
        self.parent_type = Some(name.into());
        self
    }

    /// Builder: add annotation
    #[must_use]
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Builder: set documentation
    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Builder: add import
    #[must_use]
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// `package.Name`, or just `Name` when the package is unknown
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotations.iter().any(|a| a.type_name == type_name)
    }
}

/// Field declared on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    /// Declared type name, as written in source
    pub type_name: String,

    /// Generic type arguments (e.g., `List<Address>` -> ["Address"])
    #[serde(default)]
    pub type_arguments: Vec<String>,

    #[serde(default)]
    pub visibility: Visibility,

    /// Display hint only
    #[serde(default = "default_show")]
    pub show: bool,
}

fn default_show() -> bool {
    true
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            type_arguments: Vec::new(),
            visibility: Visibility::Public,
            show: true,
        }
    }

    /// Builder: add generic type argument
    #[must_use]
    pub fn type_argument(mut self, type_name: impl Into<String>) -> Self {
        self.type_arguments.push(type_name.into());
        self
    }

    /// Builder: set visibility
    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn hide(&mut self) {
        self.show = false;
    }

    pub const fn should_show(&self) -> bool {
        self.show
    }

    /// Declared type name followed by each type argument
    pub fn referenced_type_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.type_name.as_str()).chain(self.type_arguments.iter().map(String::as_str))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.name, self.type_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,

    /// Empty for constructors and unit returns
    #[serde(default)]
    pub return_type_name: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub visibility: Visibility,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type_name: return_type_name.into(),
            ..Default::default()
        }
    }

    /// Builder: add parameter
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Builder: set visibility
    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Annotation applied to a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub type_name: String,

    #[serde(default)]
    pub arguments: BTreeMap<String, String>,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// Builder: add argument (replaces an existing value for the same name)
    #[must_use]
    pub fn argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }
}
