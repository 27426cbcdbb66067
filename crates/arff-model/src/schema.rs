//! Attribute declarations and the ordered schema built from them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// A named column with its declared data type (kept verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub declared_type: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// Ordered attribute sequence. Position in the sequence is the column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    attributes: Vec<Attribute>,
    index: BTreeMap<String, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from attributes in column order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateAttribute`] if two attributes share a name.
    pub fn from_attributes(attributes: impl IntoIterator<Item = Attribute>) -> Result<Self> {
        let mut schema = Self::new();
        for attribute in attributes {
            schema.push(attribute)?;
        }
        Ok(schema)
    }

    /// Appends an attribute at the next column index and returns that index.
    pub fn push(&mut self, attribute: Attribute) -> Result<usize> {
        if self.index.contains_key(&attribute.name) {
            return Err(ModelError::DuplicateAttribute {
                name: attribute.name,
            });
        }
        let column = self.attributes.len();
        self.index.insert(attribute.name.clone(), column);
        self.attributes.push(attribute);
        Ok(column)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn get(&self, column: usize) -> Option<&Attribute> {
        self.attributes.get(column)
    }

    /// Column index for an attribute name (exact, case-sensitive match).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|attribute| attribute.name.as_str())
    }
}
