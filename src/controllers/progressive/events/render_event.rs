use crate::controllers::progressive::data::render_session::SessionToken;
use crate::core::data::canvas_size::CanvasSize;
use std::time::Duration;

/// Published by the renderer in order. Every session begins with `Started`
/// and ends with exactly one of `Completed`, `Aborted` or `Failed`; progress
/// within a session strictly increases.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Started {
        session: SessionToken,
        size: CanvasSize,
    },
    Progress {
        session: SessionToken,
        percent: f64,
    },
    Throughput {
        session: SessionToken,
        pixels_per_second: f64,
    },
    Completed {
        session: SessionToken,
        elapsed: Duration,
    },
    Aborted {
        session: SessionToken,
        rows_completed: u32,
    },
    Failed {
        session: SessionToken,
        message: String,
    },
}

impl RenderEvent {
    #[must_use]
    pub fn session(&self) -> SessionToken {
        match self {
            Self::Started { session, .. }
            | Self::Progress { session, .. }
            | Self::Throughput { session, .. }
            | Self::Completed { session, .. }
            | Self::Aborted { session, .. }
            | Self::Failed { session, .. } => *session,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed { .. } | Self::Aborted { .. } | Self::Failed { .. }
        )
    }
}
