use std::collections::HashSet;

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::{debug, info};

use sheetnest::entities::{NestingResult, Part, Sketch};
use sheetnest::io::{ImportedSketch, import_sketch};
use sheetnest::nesting::{NestingMode, nest_grid, pack_shelves};

use crate::config::{NestConfig, Strategy};
use crate::io::ext_job::ExtJob;
use crate::layout::{Layout, build_layout, layout_name, summary_message};

/// A part to nest together with the sketch it was derived from
#[derive(Clone, Debug, PartialEq)]
pub struct JobPart {
    pub part: Part,
    pub sketch: Sketch,
}

/// Everything a nesting job produced
#[derive(Clone, Debug)]
pub struct NestOutcome {
    /// "Simple", "Advanced" or "Shelf"
    pub label: &'static str,
    pub result: NestingResult,
    /// [`None`] when the part was too large to place a single copy
    pub layout: Option<Layout>,
    pub message: String,
}

/// Upper bound on the copies requested of a single part
pub const MAX_QUANTITY: usize = 10_000;

/// Imports all sketches of the job and derives a part from each of them.
///
/// Part ids are the sketch names. Repeated names get the position of the sketch in the job appended.
/// Fails if any sketch has no readable geometry or requests more than [`MAX_QUANTITY`] copies.
pub fn import_parts(job: &ExtJob, config: &NestConfig) -> Result<Vec<JobPart>> {
    ensure!(!job.parts.is_empty(), "job contains no parts");

    let mut ids = HashSet::new();
    job.parts
        .iter()
        .enumerate()
        .map(|(i, ext_part)| -> Result<JobPart> {
            let ImportedSketch {
                sketch,
                n_unreadable,
            } = import_sketch(&ext_part.sketch);

            let id = match ids.contains(&sketch.name) {
                false => sketch.name.clone(),
                true => format!("{}#{i}", sketch.name),
            };
            ensure!(ids.insert(id.clone()), "duplicate part id: {id}");

            let quantity = ext_part.quantity.unwrap_or(config.quantity);
            ensure!(
                quantity <= MAX_QUANTITY,
                "part {id}: {quantity} copies requested, at most {MAX_QUANTITY} are supported"
            );

            let part = Part::from_sketch(id, &sketch, quantity).with_context(|| {
                format!("could not compute bounding box for sketch {}", sketch.name)
            })?;
            debug!(
                "[JOB] part {}: {:.3}x{:.3}, {quantity} copies requested, {n_unreadable} unreadable curve(s)",
                part.id,
                part.bbox.width(),
                part.bbox.height()
            );

            Ok(JobPart { part, sketch })
        })
        .collect()
}

/// Runs a job from start to finish: import, nesting and layout construction.
///
/// With [`Strategy::Auto`], a job with a single part is grid nested and a job with several parts is shelf packed.
pub fn nest_job(job: &ExtJob, config: &NestConfig) -> Result<NestOutcome> {
    let sheet = config.sheet_spec()?;
    let parts = import_parts(job, config)?;

    info!(
        "[JOB] nesting {} part(s) on a {}x{} sheet ({:?})",
        parts.len(),
        sheet.width,
        sheet.height,
        config.units
    );

    let (label, result) = match (config.strategy, parts.as_slice()) {
        (Strategy::Auto | Strategy::Grid, [single]) => (
            mode_label(config.mode),
            nest_grid(&single.part, &sheet, config.mode)?,
        ),
        (Strategy::Grid, _) => bail!(
            "grid nesting takes a single part, the job has {}",
            parts.len()
        ),
        (Strategy::Auto | Strategy::Shelf, _) => {
            let shelf_parts = parts.iter().map(|p| p.part.clone()).collect_vec();
            ("Shelf", pack_shelves(&sheet, &shelf_parts)?)
        }
    };

    let layout = match result.n_placed() {
        0 => None,
        _ => Some(build_layout(
            &layout_name(label),
            &sheet,
            config.border,
            &parts,
            &result,
        )?),
    };
    let message = summary_message(label, &result);

    Ok(NestOutcome {
        label,
        result,
        layout,
        message,
    })
}

pub fn mode_label(mode: NestingMode) -> &'static str {
    match mode {
        NestingMode::Simple => "Simple",
        NestingMode::Advanced => "Advanced",
    }
}
