use crate::controllers::interactive::errors::render_error::RenderError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourParams};
use crate::core::actions::generate_stage::generate_stage_rayon::{
    GenerateStageError, StageSampling, generate_stage_cancelable,
};
use crate::core::actions::generate_stage::stage::{RenderStage, STAGE_COUNT};
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::settings::render_settings::RenderSettings;
use crate::core::settings::shared_settings::{SettingsSnapshot, SharedSettings};
use crate::core::util::sync::lock;
use log::{debug, trace, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

const THREAD_NAME: &str = "fractal-render";

#[derive(Debug, Clone, Copy)]
struct RestartRequest {
    antialiasing: bool,
}

/// The last fully finished pass, the only iteration data readers ever see.
struct CompleteFrame {
    iterations: IterationBuffer,
    generation: u64,
    stages_completed: usize,
    iterations_limit: i32,
}

struct SharedState {
    settings: Arc<SharedSettings>,
    colour_map: Arc<dyn ColourMap>,
    generation: AtomicU64,
    /// Passes finished for the current generation.
    stage: AtomicUsize,
    pending: Mutex<Option<RestartRequest>>,
    wake: Condvar,
    shutdown: AtomicBool,
    complete: Mutex<CompleteFrame>,
    /// Copy of the complete frame taken by `draw_into`, so colourizing runs
    /// without holding the complete-frame lock. Locked before `complete`.
    reader: Mutex<IterationBuffer>,
}

/// Renders the session's viewport progressively on one dedicated thread.
///
/// Every restart bumps a generation counter. The computation thread polls it
/// before each pixel, abandons a pass as soon as it changes, and only
/// publishes a finished pass while its generation is still current. After the
/// last pass the thread parks until the next restart.
pub struct ProgressiveRenderer {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl ProgressiveRenderer {
    /// Starts the computation thread and queues the first render.
    pub fn new(
        settings: Arc<SharedSettings>,
        colour_map: Arc<dyn ColourMap>,
    ) -> Result<Self, RenderError> {
        let SettingsSnapshot {
            settings: initial,
            viewport,
        } = settings.snapshot();

        let shared = Arc::new(SharedState {
            settings,
            colour_map,
            generation: AtomicU64::new(1),
            stage: AtomicUsize::new(0),
            pending: Mutex::new(Some(RestartRequest {
                antialiasing: false,
            })),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            complete: Mutex::new(CompleteFrame {
                iterations: IterationBuffer::new(viewport.pixel_rect()),
                generation: 0,
                stages_completed: 0,
                iterations_limit: initial.iterations_limit(),
            }),
            reader: Mutex::new(IterationBuffer::new(viewport.pixel_rect())),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || Self::worker_loop(&worker_shared))
            .map_err(|source| RenderError::Spawn {
                thread: THREAD_NAME,
                source,
            })?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// True until the last pass of the current generation has finished.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.stage() < STAGE_COUNT
    }

    /// True once the first pass of the current generation has finished.
    #[must_use]
    pub fn has_any_data(&self) -> bool {
        self.stage() > 0
    }

    /// Passes finished for the current generation, `0..=STAGE_COUNT`.
    #[must_use]
    pub fn stage(&self) -> usize {
        self.shared.stage.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Drops the current render and starts over from the coarsest pass,
    /// picking up the latest settings and viewport.
    pub fn request_restart(&self) -> u64 {
        self.restart(RestartRequest {
            antialiasing: false,
        })
    }

    /// Like [`Self::request_restart`], but every pass of the new render
    /// supersamples each pixel.
    pub fn request_restart_with_antialiasing(&self) -> u64 {
        self.restart(RestartRequest { antialiasing: true })
    }

    fn restart(&self, request: RestartRequest) -> u64 {
        let mut pending = lock(&self.shared.pending);

        // The stage counter and the generation change together with respect
        // to publishing, which happens under the complete-frame lock.
        let generation = {
            let _complete = lock(&self.shared.complete);
            self.shared.stage.store(0, Ordering::Release);
            self.shared.generation.fetch_add(1, Ordering::AcqRel) + 1
        };

        *pending = Some(request);
        drop(pending);
        self.shared.wake.notify_one();

        debug!(
            "restart requested: generation {}, antialiasing {}",
            generation, request.antialiasing
        );
        generation
    }

    /// Colourizes the last finished pass into `target`.
    ///
    /// Returns `Ok(0)` without touching `target` while no pass of the current
    /// generation has finished, otherwise the number of finished passes.
    /// Colour mode and periodicity come from `settings`; the iteration limit
    /// is the one the frame was computed with.
    pub fn draw_into(
        &self,
        target: &mut PixelBuffer,
        settings: &RenderSettings,
    ) -> Result<usize, RenderError> {
        let mut frame = lock(&self.shared.reader);
        let (stages_completed, iterations_limit) = {
            let complete = lock(&self.shared.complete);
            if !self.is_current(&complete) {
                return Ok(0);
            }
            if frame.copy_from(&complete.iterations).is_err() {
                *frame = complete.iterations.clone();
            }
            (complete.stages_completed, complete.iterations_limit)
        };

        let params = ColourParams {
            iterations_limit,
            mode: settings.colour_mode(),
            periodicity: settings.colour_periodicity(),
        };
        generate_pixel_buffer(&frame, self.shared.colour_map.as_ref(), &params, target)?;

        Ok(stages_completed)
    }

    /// The last finished pass and its raw iteration counts, if any.
    #[must_use]
    pub fn iterations_snapshot(&self) -> Option<(usize, IterationBuffer)> {
        let complete = lock(&self.shared.complete);
        self.is_current(&complete)
            .then(|| (complete.stages_completed, complete.iterations.clone()))
    }

    fn is_current(&self, complete: &CompleteFrame) -> bool {
        complete.stages_completed > 0
            && self.stage() > 0
            && complete.generation == self.generation()
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        {
            // Pairs with the shutdown check in `wait_for_restart`.
            let _pending = lock(&self.shared.pending);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &SharedState) {
        let mut working = IterationBuffer::new(shared.settings.viewport().pixel_rect());

        while let Some((generation, request)) = Self::wait_for_restart(shared) {
            Self::render_generation(shared, generation, request, &mut working);
        }
    }

    fn wait_for_restart(shared: &SharedState) -> Option<(u64, RestartRequest)> {
        let mut pending = lock(&shared.pending);
        if pending.is_none() {
            debug!("computation thread suspended");
        }

        loop {
            if shared.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(request) = pending.take() {
                return Some((shared.generation.load(Ordering::Acquire), request));
            }

            pending = shared
                .wake
                .wait(pending)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn render_generation(
        shared: &SharedState,
        generation: u64,
        request: RestartRequest,
        working: &mut IterationBuffer,
    ) {
        let SettingsSnapshot { settings, viewport } = shared.settings.snapshot();
        let kernel = FractalKernel::new(settings.fractal_kind(), settings.constant());
        let pixel_rect = viewport.pixel_rect();

        working.reset(pixel_rect);
        {
            let mut complete = lock(&shared.complete);
            if shared.generation.load(Ordering::Acquire) != generation {
                return;
            }
            complete.iterations.reset(pixel_rect);
            complete.generation = generation;
            complete.stages_completed = 0;
            complete.iterations_limit = settings.iterations_limit();
        }

        let cancel = || {
            shared.shutdown.load(Ordering::Relaxed)
                || shared.generation.load(Ordering::Relaxed) != generation
        };

        let started = Instant::now();
        for stage in RenderStage::ALL {
            // Antialiasing is the one setting that may change mid-render.
            let antialiasing = request.antialiasing || shared.settings.settings().antialiasing();
            let sampling = StageSampling {
                iterations_limit: settings.iterations_limit(),
                antialiasing,
            };

            match generate_stage_cancelable(stage, &viewport, &kernel, sampling, working, &cancel) {
                Ok(()) => {
                    if !Self::publish(shared, generation, stage, working) {
                        trace!("generation {generation} superseded after {stage:?}");
                        return;
                    }
                    debug!(
                        "stage {} of generation {} finished after {:?} (antialiasing {})",
                        stage.index() + 1,
                        generation,
                        started.elapsed(),
                        antialiasing
                    );
                }
                Err(GenerateStageError::Cancelled(_)) => {
                    trace!("generation {generation} abandoned during {stage:?}");
                    return;
                }
                Err(err) => {
                    warn!("generation {generation} stopped: {err}");
                    return;
                }
            }
        }
    }

    /// Copies a finished pass into the complete frame unless a restart has
    /// superseded it.
    fn publish(
        shared: &SharedState,
        generation: u64,
        stage: RenderStage,
        working: &IterationBuffer,
    ) -> bool {
        let mut complete = lock(&shared.complete);
        if shared.generation.load(Ordering::Acquire) != generation {
            return false;
        }

        if let Err(err) = complete.iterations.copy_from(working) {
            warn!("complete frame did not match the working buffer: {err}");
            complete.iterations = working.clone();
        }
        complete.stages_completed = stage.index() + 1;
        shared.stage.store(complete.stages_completed, Ordering::Release);
        true
    }
}

impl Drop for ProgressiveRenderer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
