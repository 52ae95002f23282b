// DOM hooks and interaction tuning for the browser front-end.
//
// Kept free of `web_sys` so host-side tests can include this file directly.
// Elements the page is expected to provide; created on demand when missing
pub const POPUP_ID: &str = "popup";
pub const POPUP_SHOW_CLASS: &str = "show";
pub const MUSIC_BUTTON_ID: &str = "music-toggle";
pub const DATA_SEED_ATTR: &str = "data-seed"; // on <body>, pins the garden layout

// Popup styling applied from code
pub const POPUP_IMAGE_MARGIN_TOP_PX: f32 = 8.0;
pub const POPUP_FALLBACK_STYLE: &str =
    "position:absolute;display:none;max-width:260px;padding:12px;border-radius:10px;\
     background:rgba(255,250,250,0.95);box-shadow:0 4px 14px rgba(0,0,0,0.2);\
     font:14px system-ui;color:#4a3b3b;transition:opacity 0.4s;pointer-events:none;";

// Background music
pub const MUSIC_SRC: &str = "assets/bg-music.mp3";
pub const MUSIC_BUTTON_STYLE: &str = "position:absolute;top:10px;left:10px;padding:8px;\
     border-radius:8px;background:#fff5f5;border:1px solid #ccc;";

// Orbit drag
pub const ORBIT_ROTATE_SPEED: f32 = 1.0; // full turn per viewport height of drag
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 5.0; // drags longer than this swallow the click
