use serde::{Deserialize, Serialize};

use sheetnest::io::ext_repr::{ExtNestingResult, ExtSketch};
use sheetnest::io::{export_result, export_sketch};

use crate::config::NestConfig;
use crate::job::NestOutcome;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NestOutput {
    pub config: NestConfig,
    pub result: ExtNestingResult,
    /// Absent when nothing could be placed
    pub layout: Option<ExtSketch>,
    /// Curves of the part sketches which could not be moved into the layout
    pub n_skipped_curves: usize,
    pub message: String,
}

impl NestOutput {
    pub fn new(config: NestConfig, outcome: &NestOutcome) -> Self {
        Self {
            config,
            result: export_result(&outcome.result),
            layout: outcome.layout.as_ref().map(|l| export_sketch(&l.sketch)),
            n_skipped_curves: outcome.layout.as_ref().map_or(0, |l| l.n_skipped),
            message: outcome.message.clone(),
        }
    }
}
