//! Summary command handler

use courier_engine::Engine;

use crate::{Output, Result};

/// Handle Summary command.
pub fn summary(engine: &Engine) -> Result<Output> {
    Ok(Output::Summary(engine.tracking_summary()?))
}
