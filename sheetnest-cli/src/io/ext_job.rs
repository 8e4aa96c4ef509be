use serde::{Deserialize, Serialize};

use sheetnest::io::ext_repr::ExtSketch;

/// A nesting job: the sketches of the parts to lay out on a single sheet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtJob {
    pub parts: Vec<ExtJobPart>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtJobPart {
    pub sketch: ExtSketch,
    /// Copies requested, falls back to the configured quantity when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<usize>,
}
