use crate::error::{Error, Result};

/// Lifecycle of a stream.
///
/// ```text
///   Active ──► Exhausted
///     │
///     └──────► Failed(err)
/// ```
///
/// Both `Exhausted` and `Failed` are terminal. A failed stream keeps handing
/// out the same error on every pull.
#[derive(Debug, Clone, Default)]
pub enum State {
    #[default]
    Active,
    Exhausted,
    Failed(Error),
}

impl State {
    pub fn is_active(&self) -> bool {
        matches!(self, State::Active)
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, State::Exhausted)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, State::Failed(_))
    }

    /// The latched error, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            State::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the latched error, if any.
    pub(crate) fn check(&self) -> Result<()> {
        match self {
            State::Failed(e) => Err(e.clone()),
            _ => Ok(()),
        }
    }

    /// Latch `err`. The first error wins.
    pub(crate) fn fail(&mut self, err: Error) {
        if self.is_failed() {
            return;
        }
        tracing::debug!(error = %err, "stream failed, latching error");
        *self = State::Failed(err);
    }

    /// Mark end of stream. No-op once failed.
    pub(crate) fn finish(&mut self) {
        if self.is_active() {
            *self = State::Exhausted;
        }
    }
}
