use crate::core::data::render_job::RenderJob;
use crate::core::util::calculate_band_height::calculate_band_height;
use std::fmt;
use std::time::Instant;

/// Identifies one render session. Tokens increase with every `start`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(pub u64);

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub struct RenderSession {
    pub token: SessionToken,
    pub job: RenderJob,
    pub band_height: u32,
    pub next_row: u32,
    pub pixels_rendered: u64,
    pub started_at: Instant,
}

impl RenderSession {
    #[must_use]
    pub fn new(token: SessionToken, job: RenderJob) -> Self {
        Self {
            token,
            band_height: calculate_band_height(job.viewport.size),
            job,
            next_row: 0,
            pixels_rendered: 0,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn total_rows(&self) -> u32 {
        self.job.viewport.size.height()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next_row >= self.total_rows()
    }

    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        100.0 * f64::from(self.next_row) / f64::from(self.total_rows())
    }
}
