//! The table holding all of a plugin's parameters.

use anyhow::bail;
use serde::Serialize;
use std::collections::HashMap;

use super::{FloatParam, FloatRange, Param};

/// All of a plugin's parameters, in declaration order, with an index on their IDs. The set of
/// parameters is fixed once the layout has been built. A plugin creates this once, puts it in an
/// `Arc`, and hands clones of that `Arc` to the editor and to the host. The audio thread only reads
/// values from it.
pub struct ParamLayout {
    /// The parameters in the order they were declared. This order is used both for mapping a
    /// parameter index to the audio thread's view of the parameters and for laying out the editor.
    params: Vec<FloatParam>,
    /// Maps a parameter ID to its index in `params`.
    indices: HashMap<String, usize>,
}

/// A read-only snapshot of a parameter's description and current value. Used by the standalone
/// host to list a plugin's parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamInfo {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub unit: &'static str,
    pub range: FloatRange,
    pub default: f32,
    pub value: f32,
    pub normalized_value: f32,
    /// The current value formatted as text, including the unit.
    pub display: String,
}

impl ParamLayout {
    /// Build the layout from a list of parameters. Returns an error if two parameters share the
    /// same ID.
    pub fn new(params: Vec<FloatParam>) -> anyhow::Result<Self> {
        let mut indices = HashMap::with_capacity(params.len());
        for (index, param) in params.iter().enumerate() {
            if let Some(other_index) = indices.insert(param.id().to_owned(), index) {
                bail!(
                    "Parameters {} ('{}') and {} ('{}') share the ID '{}'",
                    other_index,
                    params[other_index].name(),
                    index,
                    param.name(),
                    param.id()
                );
            }
        }

        paramex_trace!(
            "Created a parameter layout with {} parameters: {:?}",
            params.len(),
            params
        );

        Ok(Self { params, indices })
    }

    /// The number of parameters in this layout.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the layout contains no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FloatParam> {
        self.params.iter()
    }

    /// All parameters as a slice, in declaration order. The slice's indices match
    /// [`index_of()`][Self::index_of()].
    pub fn as_slice(&self) -> &[FloatParam] {
        &self.params
    }

    /// Get a parameter by its ID.
    pub fn param(&self, id: &str) -> Option<&FloatParam> {
        self.index_of(id).map(|index| &self.params[index])
    }

    /// Get a parameter by its position in the layout.
    pub fn param_at(&self, index: usize) -> Option<&FloatParam> {
        self.params.get(index)
    }

    /// Get the position of a parameter in the layout.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.indices.get(id).copied()
    }

    /// Describe every parameter in declaration order.
    pub fn param_info(&self) -> Vec<ParamInfo> {
        self.params
            .iter()
            .enumerate()
            .map(|(index, param)| ParamInfo {
                index,
                id: param.id().to_owned(),
                name: param.name().to_owned(),
                unit: param.unit(),
                range: param.range(),
                default: param.default_plain_value(),
                value: param.value(),
                normalized_value: param.normalized_value(),
                display: param.to_string(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ParamLayout {
    type Item = &'a FloatParam;
    type IntoIter = std::slice::Iter<'a, FloatParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
