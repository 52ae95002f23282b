// Popup placement and dismissal tests driven by the virtual clock.

use garden_core::popup::{clamp_anchor, place};
use garden_core::{
    ManualTimers, MemoryPayload, PopupConfig, PopupPresenter, PopupState, PopupSurface,
    TimerService, Viewport,
};
use glam::Vec2;
use std::time::Duration;

/// Surface with a fixed rendered size that records what it was told.
#[derive(Default)]
struct FixedSurface {
    size: Vec2,
    content: Option<String>,
    position: Vec2,
    visible: bool,
    shows: usize,
}

impl PopupSurface for FixedSurface {
    fn set_content(&mut self, payload: &MemoryPayload, _max_image_width: f32) {
        self.content = Some(payload.text().to_string());
    }
    fn measure(&self) -> Vec2 {
        self.size
    }
    fn set_position(&mut self, top_left: Vec2) {
        self.position = top_left;
    }
    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.shows += 1;
        }
        self.visible = visible;
    }
}

fn presenter(size: Vec2) -> PopupPresenter<FixedSurface, ManualTimers> {
    PopupPresenter::new(
        FixedSurface {
            size,
            ..FixedSurface::default()
        },
        ManualTimers::new(),
        PopupConfig::default(),
    )
}

fn memory(text: &str) -> MemoryPayload {
    MemoryPayload::new(text, None).unwrap()
}

#[test]
fn click_near_right_edge_shifts_popup_left() {
    let mut p = presenter(Vec2::new(240.0, 100.0));
    let pos = p.show(&memory("a"), Vec2::new(990.0, 50.0), Viewport::new(1000.0, 800.0));
    assert_eq!(pos.x, 750.0);
    assert_eq!(p.surface().position, pos);
    assert!(p.surface().visible);
}

#[test]
fn anchors_outside_viewport_are_clamped_inside_margins() {
    let vp = Viewport::new(640.0, 480.0);
    let m = 10.0;
    for anchor in [
        Vec2::new(-50.0, -50.0),
        Vec2::new(700.0, 10.0),
        Vec2::new(320.0, 900.0),
        Vec2::new(-1.0, 481.0),
    ] {
        let a = clamp_anchor(anchor, vp, m);
        assert!(a.x >= m && a.x <= vp.width - m, "{a:?}");
        assert!(a.y >= m && a.y <= vp.height - m, "{a:?}");
    }
}

#[test]
fn popup_that_fits_is_always_fully_on_screen() {
    let cfg = PopupConfig::default();
    let vp = Viewport::new(800.0, 600.0);
    let sizes = [
        Vec2::new(50.0, 30.0),
        Vec2::new(240.0, 100.0),
        Vec2::new(780.0, 580.0),
    ];
    for size in sizes {
        for ax in [-100.0, 0.0, 5.0, 400.0, 795.0, 900.0] {
            for ay in [-100.0, 0.0, 15.0, 300.0, 599.0, 700.0] {
                let pos = place(Vec2::new(ax, ay), size, vp, &cfg);
                assert!(pos.x >= cfg.margin, "{size:?} {pos:?}");
                assert!(pos.y >= cfg.margin, "{size:?} {pos:?}");
                assert!(pos.x + size.x <= vp.width - cfg.margin + 1e-3, "{size:?} {pos:?}");
                assert!(pos.y + size.y <= vp.height - cfg.margin + 1e-3, "{size:?} {pos:?}");
            }
        }
    }
}

#[test]
fn same_click_twice_lands_in_same_place() {
    let mut p = presenter(Vec2::new(180.0, 90.0));
    let vp = Viewport::new(1024.0, 768.0);
    let m = memory("same");
    let first = p.show(&m, Vec2::new(100.0, 200.0), vp);
    let second = p.show(&m, Vec2::new(100.0, 200.0), vp);
    assert_eq!(first, second);
}

#[test]
fn second_popup_replaces_first_and_restarts_timer() {
    let mut p = presenter(Vec2::new(100.0, 50.0));
    let vp = Viewport::new(800.0, 600.0);

    p.show(&memory("A"), Vec2::new(200.0, 300.0), vp);
    p.advance(Duration::from_secs(1));
    p.show(&memory("B"), Vec2::new(500.0, 300.0), vp);
    assert_eq!(p.timers().pending(), 1);

    // A's original deadline passes without hiding B
    p.advance(Duration::from_secs(5));
    assert!(p.is_visible());
    assert_eq!(p.surface().content.as_deref(), Some("B"));

    p.advance(Duration::from_millis(999));
    assert!(p.is_visible());

    p.advance(Duration::from_millis(1));
    assert!(!p.is_visible());
    assert!(!p.surface().visible);
    assert_eq!(p.surface().content.as_deref(), Some("B"));
    assert_eq!(p.surface().shows, 2);
}

#[test]
fn showing_state_records_anchor_and_expiry() {
    let mut p = presenter(Vec2::new(100.0, 50.0));
    let vp = Viewport::new(800.0, 600.0);
    p.advance(Duration::from_secs(2));
    p.show(&memory("note"), Vec2::new(400.0, 300.0), vp);
    match p.state() {
        PopupState::Showing(shown) => {
            assert_eq!(shown.anchor, Vec2::new(400.0, 300.0));
            assert_eq!(shown.content.text(), "note");
            assert_eq!(shown.expires_at, p.timers().now() + Duration::from_secs(6));
        }
        PopupState::Hidden => panic!("popup should be showing"),
    }
}

#[test]
fn simple_config_times_out_sooner() {
    let mut p = PopupPresenter::new(
        FixedSurface::default(),
        ManualTimers::new(),
        PopupConfig::simple(),
    );
    p.show(&memory("quick"), Vec2::new(10.0, 10.0), Viewport::new(100.0, 100.0));
    p.advance(Duration::from_secs(3));
    assert!(!p.is_visible());
}
