// Shared scene and motion tuning constants used by both web and native frontends.

// Scene layout
pub const SCATTER_HALF_EXTENT: f32 = 40.0; // flowers, trees, rocks, bushes, hearts, fireflies
pub const CLOUD_HALF_EXTENT: f32 = 50.0;
pub const GROUND_SIZE: f32 = 100.0;
pub const PATH_WIDTH: f32 = 8.0;
pub const CLOUD_HEIGHT: f32 = 20.0;
pub const SKY_RADIUS: f32 = 500.0;

// Motion, per second
pub const SWAY_AMPLITUDE: f32 = 0.1; // flower yaw and tree leaf offset
pub const BUSH_BREATH_AMPLITUDE: f32 = 0.05;
pub const CLOUD_DRIFT_PER_SEC: f32 = 6.0;
pub const CLOUD_WRAP_X: f32 = 60.0; // clouds past +X reappear at -X
pub const HEART_RISE_PER_SEC: f32 = 0.6;
pub const HEART_CEILING: f32 = 20.0;
pub const HEART_FLOOR: f32 = 5.0;
pub const FIREFLY_BOB_AMPLITUDE: f32 = 0.5;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const SUN_BASE_INTENSITY: f32 = 1.5;
pub const SUN_FLICKER: f32 = 0.05;
