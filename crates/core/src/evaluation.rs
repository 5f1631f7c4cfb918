//! Output vectors returned by one evaluation

use std::collections::BTreeMap;

use serde::Serialize;

use crate::declaration::OutputDeclaration;
use crate::error::{Error, Result};

/// Channel values of one output, in declaration order.
pub type OutputVector = Vec<f64>;

/// Output vectors keyed by output id.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Evaluation {
    outputs: BTreeMap<&'static str, OutputVector>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, id: &'static str, values: impl Into<OutputVector>) -> Self {
        self.insert(id, values);
        self
    }

    pub fn insert(&mut self, id: &'static str, values: impl Into<OutputVector>) {
        self.outputs.insert(id, values.into());
    }

    pub fn get(&self, id: &str) -> Option<&[f64]> {
        self.outputs.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[f64])> + '_ {
        self.outputs.iter().map(|(id, v)| (*id, v.as_slice()))
    }

    /// Check ids and channel counts against a declaration.
    ///
    /// Every declared id must be present with exactly the declared number of
    /// channels, and no undeclared id may appear.
    pub fn conform(&self, declaration: &OutputDeclaration) -> Result<()> {
        for id in self.outputs.keys() {
            if declaration.output(id).is_none() {
                return Err(Error::UnknownOutput(id.to_string()));
            }
        }
        for out in declaration.output {
            let values = self
                .outputs
                .get(out.id)
                .ok_or_else(|| Error::MissingOutput(out.id.to_string()))?;
            if values.len() != out.bands {
                return Err(Error::ShapeMismatch {
                    what: format!("output {}", out.id),
                    expected: out.bands,
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }

    /// Apply each output's declared sample type to its channels.
    pub fn encode(&self, declaration: &OutputDeclaration) -> Result<Evaluation> {
        self.conform(declaration)?;
        let outputs = declaration
            .output
            .iter()
            .map(|out| {
                let encoded = self.outputs[out.id]
                    .iter()
                    .map(|&v| out.sample_type.encode(v))
                    .collect();
                (out.id, encoded)
            })
            .collect();
        Ok(Evaluation { outputs })
    }
}
