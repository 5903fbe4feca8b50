use crate::assets::theme::Theme;
use crate::cabin::model::CabinMap;
use crate::cabin::occupancy::OccupancyState;
use crate::foundation::core::{Canvas, Rect, Vec2};
use crate::foundation::error::{SeatMapError, SeatMapResult};
use crate::foundation::hash::{InputFingerprint, StableHasher};
use crate::layout::engine::{SeatPlacement, layout_cabin};
use crate::render::scheduler::{FrameId, FrameScheduler, IdleBudget};
use crate::render::surface::{DrawSurface, FrameRGBA, SpriteImages};
use crate::sprite::provider::{SpriteLoader, sprite_raster_px};

const DEFAULT_FRAME_BUDGET: u32 = 10;

/// Options for a [`SeatMapView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatMapOpts {
    /// Logical canvas size.
    pub canvas: Canvas,
    /// Offset of the canvas within the host layout, in logical pixels.
    pub translate: Vec2,
    /// Consecutive unchanged cycles that keep rescheduling before the loop parks.
    pub frame_budget: u32,
    /// Background color; `None` leaves the surface transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for SeatMapOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1000,
                height: 150,
            },
            translate: Vec2::new(243.0, 78.0),
            frame_budget: DEFAULT_FRAME_BUDGET,
            clear_rgba: None,
        }
    }
}

impl SeatMapOpts {
    /// Defaults with `SEATMAP_FRAME_BUDGET` applied when it holds a positive integer.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(n) = std::env::var("SEATMAP_FRAME_BUDGET")
            .ok()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
        {
            opts.frame_budget = n;
        }
        opts
    }

    /// Return options with a different logical canvas.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Return options with a different host translation.
    pub fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = translate;
        self
    }

    /// Return options with a different idle frame budget.
    pub fn with_frame_budget(mut self, frame_budget: u32) -> Self {
        self.frame_budget = frame_budget;
        self
    }

    /// Return options with a configured background color.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// Lifecycle of a [`SeatMapView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// No surface yet.
    Uninitialized,
    /// Surface sized; sprites pending or available.
    Ready,
    /// Frame loop active.
    Rendering,
    /// Loop cancelled, resources released.
    TornDown,
}

/// What one frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The id was not the outstanding request, or the view is not rendering.
    Stale,
    /// Surface or sprites unavailable; nothing drawn.
    NotReady,
    /// Inputs identical to the last repaint; nothing drawn.
    Unchanged,
    /// Surface cleared and every seat redrawn.
    Drawn,
}

/// Counters for observing the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewStats {
    /// Frame callbacks accepted (stale ones excluded).
    pub cycles: u64,
    /// Full repaints.
    pub draws: u64,
    /// Cycles skipped because sprites were not ready.
    pub skipped_not_ready: u64,
    /// Cycles whose inputs matched the last repaint.
    pub idle: u64,
}

/// One seat as drawn in the last repaint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatDraw {
    /// Where the seat went.
    pub placement: SeatPlacement,
    /// Whether the filled sprite was used.
    pub filled: bool,
}

/// Seat map view: owns the surface and sprites and repaints from caller-owned inputs.
///
/// The host drives it: [`SeatMapView::mount`], [`SeatMapView::start`], then forwards each fired
/// frame to [`SeatMapView::on_frame`] with the current cabin and occupancy. Repaints happen only
/// when those inputs (or the sprites) change; unchanged cycles keep rescheduling until the idle
/// budget runs out, and [`SeatMapView::invalidate`] re-arms the loop.
pub struct SeatMapView<S: FrameScheduler> {
    opts: SeatMapOpts,
    scheduler: S,
    state: ViewState,
    theme: Theme,
    device_pixel_ratio: f64,

    surface: Option<DrawSurface>,
    sprites: Option<SpriteImages>,
    loader: Option<SpriteLoader>,

    pending: Option<FrameId>,
    budget: IdleBudget,
    last_drawn: Option<InputFingerprint>,
    last_draws: Vec<SeatDraw>,
    stats: ViewStats,
}

impl<S: FrameScheduler> SeatMapView<S> {
    /// Create an unmounted view.
    pub fn new(opts: SeatMapOpts, theme: Theme, scheduler: S) -> Self {
        Self {
            budget: IdleBudget::new(opts.frame_budget),
            opts,
            scheduler,
            state: ViewState::Uninitialized,
            theme,
            device_pixel_ratio: 1.0,
            surface: None,
            sprites: None,
            loader: None,
            pending: None,
            last_drawn: None,
            last_draws: Vec::new(),
            stats: ViewStats::default(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Options the view was built with.
    pub fn opts(&self) -> &SeatMapOpts {
        &self.opts
    }

    /// Loop counters.
    pub fn stats(&self) -> ViewStats {
        self.stats
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The frame scheduler, mutably (hosts drain due frames through this).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Outstanding frame request, if any.
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    /// Whether both sprites are available for drawing.
    pub fn sprites_ready(&self) -> bool {
        self.sprites.is_some()
    }

    /// Canvas placement in host coordinates.
    pub fn host_rect(&self) -> Rect {
        self.opts.canvas.rect() + self.opts.translate
    }

    /// Acquire and size the surface, then start building sprites for the current theme.
    pub fn mount(&mut self, device_pixel_ratio: f64) -> SeatMapResult<()> {
        if self.state != ViewState::Uninitialized {
            return Err(SeatMapError::validation(format!(
                "mount requires an uninitialized view (state {:?})",
                self.state
            )));
        }
        let surface = DrawSurface::new(self.opts.canvas, device_pixel_ratio, self.opts.clear_rgba)?;
        tracing::debug!(
            width = surface.width(),
            height = surface.height(),
            device_pixel_ratio,
            "seat map surface mounted"
        );
        self.device_pixel_ratio = device_pixel_ratio;
        self.surface = Some(surface);
        self.loader = Some(SpriteLoader::spawn(
            self.theme,
            sprite_raster_px(device_pixel_ratio),
        ));
        self.state = ViewState::Ready;
        Ok(())
    }

    /// Begin the frame loop. Calling it while already rendering is a no-op.
    pub fn start(&mut self) -> SeatMapResult<()> {
        match self.state {
            ViewState::Ready => {
                self.state = ViewState::Rendering;
                self.budget.reset();
                self.schedule();
                tracing::debug!("seat map frame loop started");
                Ok(())
            }
            ViewState::Rendering => Ok(()),
            other => Err(SeatMapError::validation(format!(
                "start requires a mounted view (state {other:?})"
            ))),
        }
    }

    /// Switch theme and rebuild sprites. The previous sprites stay on screen until the new ones
    /// arrive.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        if matches!(self.state, ViewState::Ready | ViewState::Rendering) {
            self.loader = Some(SpriteLoader::spawn(
                theme,
                sprite_raster_px(self.device_pixel_ratio),
            ));
        }
        tracing::debug!(?theme, "seat map theme changed");
        self.invalidate();
    }

    /// Signal that caller inputs may have changed: re-arms the idle budget and schedules a frame.
    pub fn invalidate(&mut self) {
        self.budget.reset();
        if self.state == ViewState::Rendering && self.pending.is_none() {
            self.schedule();
        }
    }

    /// Block until the outstanding sprite build finishes and install the result.
    pub fn block_on_sprites(&mut self) -> SeatMapResult<()> {
        let Some(mut loader) = self.loader.take() else {
            return Ok(());
        };
        let pair = loader.wait()?;
        self.sprites = Some(SpriteImages::from_raster(&pair)?);
        Ok(())
    }

    /// Handle one fired frame.
    ///
    /// Malformed inputs fail the cycle before any pixel is touched and park the loop until the
    /// next [`SeatMapView::invalidate`].
    pub fn on_frame(
        &mut self,
        id: FrameId,
        cabin: &CabinMap,
        occupancy: &OccupancyState,
    ) -> SeatMapResult<CycleOutcome> {
        if self.state != ViewState::Rendering || self.pending != Some(id) {
            tracing::trace!(?id, "stale frame ignored");
            return Ok(CycleOutcome::Stale);
        }
        self.pending = None;
        self.stats.cycles += 1;
        self.poll_sprites();

        let outcome = self.repaint(cabin, occupancy)?;
        match outcome {
            CycleOutcome::Drawn => {
                self.stats.draws += 1;
                self.budget.reset();
                self.schedule();
            }
            CycleOutcome::NotReady => {
                self.stats.skipped_not_ready += 1;
                // A running build will resolve on its own; a failed one must not spin forever.
                if self.loader.is_none() {
                    self.budget.record_idle();
                }
                if !self.budget.exhausted() {
                    self.schedule();
                }
            }
            CycleOutcome::Unchanged => {
                self.stats.idle += 1;
                // Old sprites stay on screen during a rebuild; keep polling until the new pair lands.
                if self.loader.is_none() {
                    self.budget.record_idle();
                }
                if !self.budget.exhausted() {
                    self.schedule();
                } else {
                    tracing::trace!("idle budget exhausted; frame loop parked");
                }
            }
            CycleOutcome::Stale => {}
        }
        tracing::trace!(?id, ?outcome, "seat map cycle");
        Ok(outcome)
    }

    /// Snapshot of the surface, once mounted.
    pub fn frame(&self) -> Option<FrameRGBA> {
        self.surface.as_ref().map(DrawSurface::frame)
    }

    /// Seats drawn by the last repaint, in draw order.
    pub fn last_draws(&self) -> &[SeatDraw] {
        &self.last_draws
    }

    /// Cancel the outstanding frame and release the surface and sprites. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        if self.state != ViewState::TornDown {
            tracing::debug!(cycles = self.stats.cycles, "seat map torn down");
        }
        self.surface = None;
        self.sprites = None;
        self.loader = None;
        self.last_drawn = None;
        self.state = ViewState::TornDown;
    }

    fn schedule(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    fn poll_sprites(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        let Some(result) = loader.poll() else {
            return;
        };
        self.loader = None;
        match result.and_then(|pair| SpriteImages::from_raster(&pair)) {
            Ok(images) if images.theme != self.theme => {
                tracing::debug!(theme = ?images.theme, "sprites for a superseded theme dropped");
            }
            Ok(images) => {
                tracing::debug!(theme = ?images.theme, "sprites ready");
                self.sprites = Some(images);
            }
            Err(e) => tracing::warn!(error = %e, "seat sprite build failed"),
        }
    }

    fn repaint(&mut self, cabin: &CabinMap, occupancy: &OccupancyState) -> SeatMapResult<CycleOutcome> {
        cabin.validate()?;
        occupancy.validate_against(cabin)?;

        let (Some(surface), Some(sprites)) = (self.surface.as_mut(), self.sprites.as_ref()) else {
            return Ok(CycleOutcome::NotReady);
        };

        let fp = fingerprint_inputs(cabin, occupancy, sprites.theme);
        if self.last_drawn == Some(fp) {
            return Ok(CycleOutcome::Unchanged);
        }

        let layout = layout_cabin(cabin);
        self.last_draws.clear();
        surface.begin();
        for placement in layout.placements() {
            let filled = occupancy.is_occupied(placement.section, placement.seat_id);
            surface.draw_sprite(sprites, filled, placement.rect());
            self.last_draws.push(SeatDraw {
                placement: *placement,
                filled,
            });
        }
        surface.finish();
        self.last_drawn = Some(fp);
        Ok(CycleOutcome::Drawn)
    }
}

impl<S: FrameScheduler> Drop for SeatMapView<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn fingerprint_inputs(cabin: &CabinMap, occupancy: &OccupancyState, theme: Theme) -> InputFingerprint {
    let mut h = StableHasher::new();
    h.write_u8(theme as u8);
    h.write_usize(cabin.sections.len());
    for (si, section) in cabin.sections.iter().enumerate() {
        h.write_usize(section.rows.len());
        let mut seat_id = 0usize;
        for row in &section.rows {
            h.write_f64(row.x_offset);
            h.write_f64(row.y_offset);
            h.write_usize(row.seats.len());
            for seat in &row.seats {
                h.write_u8(seat.class.rank());
                h.write_f64(seat.y_offset);
                h.write_u8(u8::from(occupancy.is_occupied(si, seat_id)));
                seat_id += 1;
            }
        }
        h.write_u32(seat_id as u32);
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/view.rs"]
mod tests;
