use super::{layout, PopupConfig, PopupSurface};
use crate::input::Viewport;
use crate::memory::MemoryPayload;
use crate::timer::{DismissTicket, ManualTimers, TimerService};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ShownPopup {
    pub content: MemoryPayload,
    pub anchor: Vec2,
    pub position: Vec2,
    pub size: Vec2,
    pub expires_at: Instant,
    pub ticket: DismissTicket,
}

#[derive(Clone, Debug, Default)]
pub enum PopupState {
    #[default]
    Hidden,
    Showing(ShownPopup),
}

/// Sole owner of the popup surface and its dismissal timer.
///
/// At most one popup exists. Showing while another is up replaces its content
/// and position and restarts the timer; the old timer is cancelled and, should
/// it fire anyway, its ticket no longer matches.
pub struct PopupPresenter<S, T: TimerService> {
    surface: S,
    timers: T,
    config: PopupConfig,
    state: PopupState,
    pending: Option<T::Handle>,
    generation: u64,
}

impl<S: PopupSurface, T: TimerService> PopupPresenter<S, T> {
    pub fn new(surface: S, timers: T, config: PopupConfig) -> Self {
        Self {
            surface,
            timers,
            config,
            state: PopupState::Hidden,
            pending: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, PopupState::Showing(_))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Show `payload` near `anchor`. Returns the top-left corner chosen.
    pub fn show(&mut self, payload: &MemoryPayload, anchor: Vec2, viewport: Viewport) -> Vec2 {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }

        self.surface.set_content(payload, self.config.max_image_width);
        let size = self.surface.measure();
        let position = layout::place(anchor, size, viewport, &self.config);
        self.surface.set_position(position);
        self.surface.set_visible(true);

        self.generation += 1;
        let ticket = DismissTicket(self.generation);
        self.pending = Some(self.timers.schedule(self.config.timeout, ticket));
        let expires_at = self.timers.now() + self.config.timeout;

        log::info!(
            "[popup] show #{} at ({:.0},{:.0}) size {:.0}x{:.0}",
            ticket.0,
            position.x,
            position.y,
            size.x,
            size.y
        );
        self.state = PopupState::Showing(ShownPopup {
            content: payload.clone(),
            anchor,
            position,
            size,
            expires_at,
            ticket,
        });
        position
    }

    /// Hide immediately and drop any pending dismissal.
    pub fn hide(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
        if self.is_visible() {
            log::info!("[popup] hide");
        }
        self.surface.set_visible(false);
        self.state = PopupState::Hidden;
    }

    /// Timer callback. Hides the popup if `ticket` belongs to the one on
    /// screen; stale tickets are ignored. Returns whether anything was hidden.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        match &self.state {
            PopupState::Showing(shown) if shown.ticket == ticket => {
                // already fired, nothing to cancel
                self.pending = None;
                self.surface.set_visible(false);
                self.state = PopupState::Hidden;
                log::info!("[popup] dismissed #{}", ticket.0);
                true
            }
            _ => {
                log::debug!("[popup] stale dismissal #{}", ticket.0);
                false
            }
        }
    }
}

impl<S: PopupSurface> PopupPresenter<S, ManualTimers> {
    /// Advance the virtual clock and deliver whatever came due.
    pub fn advance(&mut self, by: Duration) {
        for ticket in self.timers.advance(by) {
            self.dismiss(ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::popup::MeasuredSurface;

    fn presenter() -> PopupPresenter<MeasuredSurface, ManualTimers> {
        PopupPresenter::new(
            MeasuredSurface::default(),
            ManualTimers::new(),
            PopupConfig::default(),
        )
    }

    #[test]
    fn hides_after_timeout() {
        let mut p = presenter();
        let m = MemoryPayload::new("rain on the tin roof", None).unwrap();
        p.show(&m, Vec2::new(400.0, 400.0), Viewport::new(800.0, 600.0));
        assert!(p.is_visible());
        p.advance(Duration::from_millis(5999));
        assert!(p.is_visible());
        p.advance(Duration::from_millis(1));
        assert!(!p.is_visible());
        assert!(!p.surface().visible);
    }

    #[test]
    fn explicit_hide_cancels_timer() {
        let mut p = presenter();
        let m = MemoryPayload::new("x", None).unwrap();
        p.show(&m, Vec2::new(10.0, 10.0), Viewport::new(800.0, 600.0));
        p.hide();
        assert_eq!(p.timers().pending(), 0);
        assert!(!p.is_visible());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut p = presenter();
        let m = MemoryPayload::new("x", None).unwrap();
        p.show(&m, Vec2::new(10.0, 10.0), Viewport::new(800.0, 600.0));
        p.show(&m, Vec2::new(20.0, 20.0), Viewport::new(800.0, 600.0));
        assert!(!p.dismiss(DismissTicket(1)));
        assert!(p.is_visible());
        assert!(p.dismiss(DismissTicket(2)));
    }
}
