//! Replay loop: script lines in, one JSON record per event out.

use std::io::{BufRead, Write};

use magnifier::engine::{Action, MagnifierCore};
use magnifier::render::DrawOp;
use serde::Serialize;

use crate::config::ConfigError;
use crate::script::{self, ScriptLine};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid event: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode output record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Output for one script event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRecord {
    /// 1-based line number in the script.
    pub line: usize,
    pub event: &'static str,
    pub actions: Vec<Action>,
    /// Present whenever a render was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<DrawOp>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub renders: usize,
}

/// Replay options.
#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    /// Feed reported zoom center/factor back into the bound parameters, as a
    /// two-way bound host would.
    pub echo: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self { echo: true }
    }
}

/// Run every event in `input` through `core`, writing one JSON line per event.
///
/// # Errors
///
/// Returns [`ReplayError::Parse`] for the first invalid line, [`ReplayError::Io`]
/// for read/write failures and [`ReplayError::Encode`] if a record cannot be
/// serialized.
pub fn run<R: BufRead, W: Write>(
    core: &mut MagnifierCore,
    input: R,
    mut output: W,
    options: ReplayOptions,
) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let event = match script::parse_line(&line) {
            Ok(ScriptLine::Event(event)) => event,
            Ok(ScriptLine::Blank) => continue,
            Err(source) => return Err(ReplayError::Parse { line: line_no, source }),
        };

        let name = event.name();
        let mut actions = event.apply(core);
        if options.echo {
            for action in echo_bindings(core, &actions) {
                if !actions.contains(&action) {
                    actions.push(action);
                }
            }
        }
        tracing::trace!(line = line_no, event = name, actions = actions.len(), "replayed event");

        let rendered = actions.iter().any(|a| matches!(a, Action::RenderNeeded));
        let record = ReplayRecord {
            line: line_no,
            event: name,
            actions,
            plan: rendered.then(|| core.draw_plan()),
        };
        serde_json::to_writer(&mut output, &record).map_err(ReplayError::Encode)?;
        output.write_all(b"\n")?;

        summary.events += 1;
        if rendered {
            summary.renders += 1;
        }
    }
    output.flush()?;
    Ok(summary)
}

/// Push reported values back into the bound parameters.
///
/// Only the actions of the triggering event are echoed, so a binding round
/// trip cannot loop.
fn echo_bindings(core: &mut MagnifierCore, actions: &[Action]) -> Vec<Action> {
    let mut echoed = Vec::new();
    for action in actions {
        match action {
            Action::ZoomCenterChanged(center) => {
                let unit = core.params().zoom_center_unit;
                echoed.extend(core.set_zoom_center(*center, unit));
            }
            Action::ZoomFactorChanged(factor) => echoed.extend(core.set_zoom_factor(*factor)),
            Action::RenderNeeded => {}
        }
    }
    echoed
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
