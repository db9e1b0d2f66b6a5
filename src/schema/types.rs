//! Schema model: the endpoints described by an API definition file

use serde::{Deserialize, Serialize};

/// All endpoints from the definition file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Schema {
    #[serde(rename = "api")]
    pub endpoints: Vec<Endpoint>,
}

/// One API operation with its parameters and results
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    /// Identifier of the generated handler function
    pub name: String,
    /// Base name of the generated files
    pub prefix: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub params: Vec<Attr>,
    #[serde(default)]
    pub results: Vec<Attr>,
}

/// One field of a parameter or result binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// JSON key
    pub tag: String,
    /// Exported field identifier
    pub field: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Endpoint {
    /// The route of this endpoint, if it has a non-empty one
    pub fn route(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

impl Attr {
    pub fn new<T, F, Y>(tag: T, field: F, ty: Y) -> Self
    where
        T: Into<String>,
        F: Into<String>,
        Y: Into<String>,
    {
        Self {
            tag: tag.into(),
            field: field.into(),
            ty: ty.into(),
        }
    }
}
