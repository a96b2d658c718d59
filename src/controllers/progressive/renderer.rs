use crate::controllers::progressive::data::render_session::{RenderSession, SessionToken};
use crate::controllers::progressive::errors::render_error::RenderError;
use crate::controllers::progressive::events::render_event::RenderEvent;
use crate::controllers::progressive::ports::observer::RenderObserver;
use crate::core::actions::cancellation::Generations;
use crate::core::actions::render_band::ports::pixel_sink::PixelSink;
use crate::core::actions::render_band::render_band::{RenderBandError, render_band};
use crate::core::data::render_job::RenderJob;
use std::sync::Arc;

/// Stops whichever session is current when [`StopHandle::stop`] is called.
///
/// Cloneable and usable from any thread. The renderer notices at its next
/// per-pixel check.
#[derive(Debug, Clone)]
pub struct StopHandle {
    generations: Arc<Generations>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.generations.stop_current();
    }

    #[must_use]
    pub fn is_stale(&self, session: SessionToken) -> bool {
        self.generations.is_stale(session.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    Idle,
    Running,
    Completed,
    Aborted,
}

/// Renders a [`RenderJob`] into a sink one band of rows per [`step`].
///
/// Only one session is current. Starting another, or stopping, makes the
/// old session stale; a stale session writes no further pixels.
///
/// [`step`]: ProgressiveRenderer::step
pub struct ProgressiveRenderer<S: PixelSink> {
    sink: S,
    observer: Arc<dyn RenderObserver>,
    generations: Arc<Generations>,
    session: Option<RenderSession>,
}

impl<S: PixelSink> ProgressiveRenderer<S> {
    pub fn new(sink: S, observer: Arc<dyn RenderObserver>) -> Self {
        Self {
            sink,
            observer,
            generations: Arc::new(Generations::default()),
            session: None,
        }
    }

    /// Aborts any running session, then begins a new one at row 0.
    pub fn start(&mut self, job: RenderJob) -> SessionToken {
        let token = SessionToken(self.generations.advance());

        if let Some(previous) = self.session.take() {
            self.abort(previous);
        }

        let size = job.viewport.size;
        self.sink.prepare(size);

        let session = RenderSession::new(token, job);
        log::debug!(
            "render session {} started: {}x{}, {} rows per band",
            token,
            size.width(),
            size.height(),
            session.band_height
        );

        self.observer.notify(RenderEvent::Started {
            session: token,
            size,
        });
        self.session = Some(session);

        token
    }

    /// Flags the current session as stopped without blocking. The next
    /// [`step`](Self::step) reports it as aborted.
    pub fn stop(&self) {
        self.stop_handle().stop();
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            generations: Arc::clone(&self.generations),
        }
    }

    /// Renders the next band of the current session.
    pub fn step(&mut self) -> Result<RenderStatus, RenderError> {
        let Some(mut session) = self.session.take() else {
            return Ok(RenderStatus::Idle);
        };

        let token = session.token;
        if self.generations.is_stale(token.0) {
            self.abort(session);
            return Ok(RenderStatus::Aborted);
        }

        let cancel = Generations::token(&self.generations, token.0);
        let band_end = session
            .next_row
            .saturating_add(session.band_height)
            .min(session.total_rows());
        let rows = session.next_row..band_end;

        match render_band(&session.job, rows.clone(), &mut self.sink, &cancel) {
            Ok(written) => {
                session.next_row = rows.end;
                session.pixels_rendered += written;
                self.report_band(&session);

                if session.is_finished() {
                    self.complete(session);
                    Ok(RenderStatus::Completed)
                } else {
                    self.session = Some(session);
                    Ok(RenderStatus::Running)
                }
            }
            Err(RenderBandError::Cancelled(_)) => {
                self.abort(session);
                Ok(RenderStatus::Aborted)
            }
            Err(RenderBandError::Sink(err)) => {
                let error = RenderError {
                    session: token,
                    message: err.to_string(),
                };

                log::error!("{}", error);
                self.observer.notify(RenderEvent::Failed {
                    session: token,
                    message: error.message.clone(),
                });

                Err(error)
            }
        }
    }

    /// Steps until the session ends, calling `between_bands` after every
    /// band that leaves work remaining.
    pub fn run<F>(&mut self, mut between_bands: F) -> Result<RenderStatus, RenderError>
    where
        F: FnMut(&StopHandle),
    {
        let handle = self.stop_handle();

        loop {
            match self.step()? {
                RenderStatus::Running => between_bands(&handle),
                status => return Ok(status),
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn current_session(&self) -> Option<SessionToken> {
        self.session.as_ref().map(|session| session.token)
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn report_band(&self, session: &RenderSession) {
        let elapsed = session.started_at.elapsed().as_secs_f64();
        let pixels_per_second = session.pixels_rendered as f64 / elapsed.max(f64::EPSILON);

        log::debug!(
            "render session {} finished rows up to {} of {}",
            session.token,
            session.next_row,
            session.total_rows()
        );

        self.observer.notify(RenderEvent::Progress {
            session: session.token,
            percent: session.percent_complete(),
        });
        self.observer.notify(RenderEvent::Throughput {
            session: session.token,
            pixels_per_second,
        });
    }

    fn complete(&self, session: RenderSession) {
        let elapsed = session.started_at.elapsed();

        log::info!(
            "render session {} completed: {} pixels in {:?}",
            session.token,
            session.pixels_rendered,
            elapsed
        );

        self.observer.notify(RenderEvent::Completed {
            session: session.token,
            elapsed,
        });
    }

    fn abort(&self, session: RenderSession) {
        log::warn!(
            "render session {} aborted after {} of {} rows",
            session.token,
            session.next_row,
            session.total_rows()
        );

        self.observer.notify(RenderEvent::Aborted {
            session: session.token,
            rows_completed: session.next_row,
        });
    }
}
