//! Health check

use crate::{Output, Result};

/// Handle Ping command.
pub fn ping() -> Result<Output> {
    Ok(Output::Pong {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
