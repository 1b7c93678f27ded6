//! Command execution layer for Courier
//!
//! Every request the engine understands is a [`Command`]; every answer is an
//! [`Output`]. The [`Executor`] dispatches commands to the engines, and
//! [`Session`] wraps it with typed methods bound to one acting user.
//!
//! ```ignore
//! use courier_executor::{Command, Executor, Output};
//!
//! let executor = Executor::new(engine);
//! match executor.execute(Command::ListStatuses)? {
//!     Output::Statuses(s) => println!("{:?}", s),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Commands and outputs serialize as externally tagged JSON, so a front end
//! can forward them without knowing the engine types.

#![warn(missing_docs)]

mod command;
mod executor;
mod handlers;
mod output;
mod session;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use executor::Executor;
pub use output::Output;
pub use session::Session;

pub use courier_core::{Error, Result};
