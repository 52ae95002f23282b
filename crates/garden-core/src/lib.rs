pub mod animation;
pub mod constants;
pub mod error;
pub mod garden;
pub mod input;
pub mod memory;
pub mod music;
pub mod picking;
pub mod popup;
pub mod scene;
pub mod state;
pub mod timer;

pub use error::SceneError;
pub use garden::{FlowerKind, Garden, GardenConfig, MemorySeed};
pub use input::{PointerInput, Viewport};
pub use memory::MemoryPayload;
pub use music::MusicToggle;
pub use picking::{hit_test, select, Hit, Ray, Selection};
pub use popup::{MeasuredSurface, PopupConfig, PopupPresenter, PopupState, PopupSurface};
pub use scene::{DrawItem, NodeId, SceneGraph, Shape, Transform};
pub use state::{Camera, OrbitCamera, OrbitConfig};
pub use timer::{DismissTicket, ManualTimers, TimerService};
