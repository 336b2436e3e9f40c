use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::Dashboard;

/// Input forwarded by the host that owns the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Resized { width: u32, height: u32 },
    CloseRequested,
}

/// Cloneable sender half for host events.
#[derive(Debug, Clone)]
pub struct HostEventSender {
    sender: Sender<HostEvent>,
}

impl HostEventSender {
    /// Returns `false` once the frame loop is gone.
    pub fn send(&self, event: HostEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Presented,
    Closed,
}

/// Per-tick driver: poll host events, refresh elements, draw, present.
///
/// Single-threaded by construction; `RenderThread` runs one on its own thread.
pub struct FrameLoop<R: Renderer> {
    dashboard: Dashboard,
    renderer: R,
    events: Receiver<HostEvent>,
    sender: Sender<HostEvent>,
    tick_interval: Duration,
    ticks: u64,
    closed: bool,
}

impl<R: Renderer> FrameLoop<R> {
    #[must_use]
    pub fn new(dashboard: Dashboard, renderer: R, tick_interval: Duration) -> Self {
        let (sender, events) = mpsc::channel();
        Self {
            dashboard,
            renderer,
            events,
            sender,
            tick_interval,
            ticks: 0,
            closed: false,
        }
    }

    #[must_use]
    pub fn event_sender(&self) -> HostEventSender {
        HostEventSender {
            sender: self.sender.clone(),
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn into_parts(self) -> (Dashboard, R) {
        (self.dashboard, self.renderer)
    }

    /// Drains pending host events. Consecutive resizes collapse into the last
    /// valid one; a close request wins over everything else.
    pub fn poll_events(&mut self) -> PlotResult<()> {
        let pending: SmallVec<[HostEvent; 4]> =
            std::iter::from_fn(|| self.events.try_recv().ok()).collect();

        let mut resize = None;
        for event in pending {
            match event {
                HostEvent::Resized { width, height } => {
                    if Viewport::new(width, height).is_valid() {
                        resize = Some((width, height));
                    } else {
                        warn!(width, height, "ignoring invalid host resize");
                    }
                }
                HostEvent::CloseRequested => self.closed = true,
            }
        }

        if let Some((width, height)) = resize {
            self.dashboard.resize(width, height)?;
        }
        Ok(())
    }

    pub fn tick(&mut self) -> PlotResult<TickOutcome> {
        if let Err(err) = self.poll_events() {
            warn!(error = %err, "host resize failed");
        }
        if self.closed {
            return Ok(TickOutcome::Closed);
        }

        self.dashboard.tick(&mut self.renderer)?;
        self.ticks += 1;
        Ok(TickOutcome::Presented)
    }

    /// Ticks at the configured interval until `shutdown` is raised or the host
    /// requests close. Surface failures are logged and the loop keeps going.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        debug!(interval_ms = self.tick_interval.as_millis() as u64, "frame loop started");
        while !shutdown.load(Ordering::Acquire) {
            let started = Instant::now();
            match self.tick() {
                Ok(TickOutcome::Closed) => break,
                Ok(TickOutcome::Presented) => {}
                Err(err) => warn!(error = %err, "frame presentation failed"),
            }
            if let Some(remaining) = self.tick_interval.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
        debug!(ticks = self.ticks, "frame loop stopped");
    }
}

/// What a render thread hands back when it is joined.
#[derive(Debug)]
pub struct RenderThreadReport {
    pub dashboard: Dashboard,
    pub ticks: u64,
}

/// Owned render thread running a `FrameLoop`.
///
/// The thread is never detached: `shutdown` (or drop) raises the stop flag,
/// sends a close request and joins.
#[derive(Debug)]
pub struct RenderThread {
    shutdown: Arc<AtomicBool>,
    events: HostEventSender,
    handle: Option<JoinHandle<RenderThreadReport>>,
}

impl RenderThread {
    /// Starts the render thread, paced at the dashboard's tick interval. The
    /// surface is created on that thread by `make_renderer`, so non-`Send`
    /// surfaces work; a failure to create it is reported here and the thread
    /// is joined.
    pub fn spawn<F, R>(dashboard: Dashboard, make_renderer: F) -> PlotResult<Self>
    where
        F: FnOnce() -> PlotResult<R> + Send + 'static,
        R: Renderer + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let (status_tx, status_rx) = mpsc::sync_channel::<PlotResult<HostEventSender>>(1);
        let thread_shutdown = Arc::clone(&shutdown);
        let tick_interval = dashboard.tick_interval();

        let handle = thread::Builder::new()
            .name("dash-plot-render".to_owned())
            .spawn(move || {
                let renderer = match make_renderer() {
                    Ok(renderer) => renderer,
                    Err(err) => {
                        let _ = status_tx.send(Err(err));
                        return RenderThreadReport {
                            dashboard,
                            ticks: 0,
                        };
                    }
                };

                let mut frame_loop = FrameLoop::new(dashboard, renderer, tick_interval);
                let _ = status_tx.send(Ok(frame_loop.event_sender()));
                frame_loop.run(&thread_shutdown);

                let ticks = frame_loop.ticks();
                let (dashboard, _renderer) = frame_loop.into_parts();
                RenderThreadReport { dashboard, ticks }
            })
            .map_err(|err| PlotError::RenderThread(format!("failed to spawn: {err}")))?;

        match status_rx.recv() {
            Ok(Ok(events)) => Ok(Self {
                shutdown,
                events,
                handle: Some(handle),
            }),
            Ok(Err(err)) => {
                let _ = handle.join();
                Err(err)
            }
            Err(_) => {
                let _ = handle.join();
                Err(PlotError::RenderThread(
                    "render thread exited before reporting status".to_owned(),
                ))
            }
        }
    }

    #[must_use]
    pub fn event_sender(&self) -> HostEventSender {
        self.events.clone()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .is_none_or(|handle| handle.is_finished())
    }

    /// Signals the loop to stop and joins the thread.
    pub fn shutdown(mut self) -> PlotResult<RenderThreadReport> {
        self.join_inner()
    }

    fn join_inner(&mut self) -> PlotResult<RenderThreadReport> {
        self.shutdown.store(true, Ordering::Release);
        let _ = self.events.send(HostEvent::CloseRequested);
        let handle = self
            .handle
            .take()
            .ok_or_else(|| PlotError::RenderThread("render thread already joined".to_owned()))?;
        handle
            .join()
            .map_err(|_| PlotError::RenderThread("render thread panicked".to_owned()))
    }
}

impl Drop for RenderThread {
    fn drop(&mut self) {
        if self.handle.is_some() {
            if let Err(err) = self.join_inner() {
                warn!(error = %err, "render thread did not shut down cleanly");
            }
        }
    }
}
