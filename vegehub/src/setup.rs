//! Setup progress tracking

use std::fmt;

use tracing::debug;

/// Where a [`VegeHub::setup`](crate::VegeHub::setup) call got to
///
/// ```text
/// Start -> ConfigFetched -> ConfigPushed    -> InfoFetched -> Done
///                        \-> ConfigUnchanged -/
/// ```
///
/// Any gate can end in `Failed`. A call that returns an error leaves the
/// stage where the error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupStage {
    #[default]
    Start,
    ConfigFetched,
    ConfigPushed,
    ConfigUnchanged,
    InfoFetched,
    Done,
    Failed,
}

impl SetupStage {
    pub(crate) fn advance(&mut self, next: SetupStage) {
        debug!("Setup: {} -> {}", self, next);
        *self = next;
    }

    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::ConfigFetched => "config fetched",
            Self::ConfigPushed => "config pushed",
            Self::ConfigUnchanged => "config unchanged",
            Self::InfoFetched => "info fetched",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
