use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::PresenterPort;
use crate::controllers::interactive::session::FractalSession;
use crate::core::util::sync::lock;
use log::{debug, warn};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const THREAD_NAME: &str = "fractal-frame-pump";

struct PumpState {
    stopped: Mutex<bool>,
    wake: Condvar,
}

/// Pushes the session's latest frame to a presenter at a fixed cadence,
/// independently of how far the computation has got.
///
/// A `Status` event goes out whenever the processing flag flips, and once at
/// start-up.
pub struct FramePump {
    state: Arc<PumpState>,
    worker: Option<JoinHandle<()>>,
}

impl FramePump {
    /// Starts pumping at the session's configured draw interval.
    pub fn start(
        session: Arc<FractalSession>,
        presenter: Arc<dyn PresenterPort>,
    ) -> Result<Self, RenderError> {
        let interval = session.config().draw_interval;
        Self::with_interval(session, presenter, interval)
    }

    pub fn with_interval(
        session: Arc<FractalSession>,
        presenter: Arc<dyn PresenterPort>,
        interval: Duration,
    ) -> Result<Self, RenderError> {
        let state = Arc::new(PumpState {
            stopped: Mutex::new(false),
            wake: Condvar::new(),
        });

        let worker_state = Arc::clone(&state);
        let worker = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || Self::pump_loop(&worker_state, &session, presenter.as_ref(), interval))
            .map_err(|source| RenderError::Spawn {
                thread: THREAD_NAME,
                source,
            })?;

        Ok(Self {
            state,
            worker: Some(worker),
        })
    }

    /// Stops the pump and waits for its thread. No events are presented
    /// after this returns.
    pub fn stop(&mut self) {
        *lock(&self.state.stopped) = true;
        self.state.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn pump_loop(
        state: &PumpState,
        session: &FractalSession,
        presenter: &dyn PresenterPort,
        interval: Duration,
    ) {
        let mut last_processing = None;

        loop {
            let processing = session.is_processing();
            if last_processing != Some(processing) {
                presenter.present(RenderEvent::Status { processing });
                last_processing = Some(processing);
            }

            match session.render_frame() {
                Ok(Some(frame)) => presenter.present(RenderEvent::Frame(frame)),
                Ok(None) => {}
                Err(err) => warn!("frame draw failed: {err}"),
            }

            let stopped = lock(&state.stopped);
            let (stopped, _) = state
                .wake
                .wait_timeout_while(stopped, interval, |stopped| !*stopped)
                .unwrap_or_else(PoisonError::into_inner);
            if *stopped {
                debug!("frame pump stopped");
                return;
            }
        }
    }
}

impl Drop for FramePump {
    fn drop(&mut self) {
        self.stop();
    }
}
