//! Per-process CLI state: the session and who is acting.

use courier::Courier;
use courier_core::{Result, UserId};
use courier_executor::{Command, Output, Session};

/// Session plus the acting user, shared by every line of a REPL or pipe run.
pub struct SessionState {
    session: Session,
}

impl SessionState {
    pub fn new(db: &Courier, user: UserId) -> Self {
        Self {
            session: db.session(user),
        }
    }

    pub fn user(&self) -> &UserId {
        self.session.user()
    }

    pub fn switch_user(&mut self, user: UserId) {
        self.session.switch_user(user);
    }

    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.session.execute(cmd)
    }

    /// REPL prompt, e.g. `courier:u1> `
    pub fn prompt(&self) -> String {
        format!("courier:{}> ", self.user())
    }
}
