//! Camera types shared with the web and native frontends.
//!
//! These types avoid platform-specific APIs. The web frontend feeds pointer
//! drags into [`OrbitCamera`] and reads back a [`Camera`] for picking.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct OrbitConfig {
    pub min_polar: f32,
    pub max_polar: f32,
    /// Fraction of the pending rotation applied per update.
    pub damping: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_polar: std::f32::consts::PI / 3.0,
            max_polar: std::f32::consts::PI / 2.2,
            damping: 0.05,
            fovy_radians: 60f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

/// Orbit around a fixed target with damped rotation and no zoom.
///
/// Angles follow the y-up spherical convention: `polar` is measured from +Y,
/// `azimuth` around Y starting at +Z.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    config: OrbitConfig,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(Vec3::new(0.0, 10.0, 25.0), Vec3::ZERO, OrbitConfig::default())
    }
}

impl OrbitCamera {
    pub fn from_eye(eye: Vec3, target: Vec3, config: OrbitConfig) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(1e-3);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            target,
            radius,
            azimuth,
            polar: polar.clamp(config.min_polar, config.max_polar),
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            config,
        }
    }

    /// Queue a rotation; applied gradually by [`OrbitCamera::update`].
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.pending_azimuth += d_azimuth;
        self.pending_polar += d_polar;
    }

    /// Advance damping by one frame. Returns true while the camera is moving.
    pub fn update(&mut self) -> bool {
        let k = self.config.damping.clamp(0.0, 1.0);
        self.azimuth += self.pending_azimuth * k;
        self.polar = (self.polar + self.pending_polar * k)
            .clamp(self.config.min_polar, self.config.max_polar);
        self.pending_azimuth *= 1.0 - k;
        self.pending_polar *= 1.0 - k;
        // settle
        if self.pending_azimuth.abs() < 1e-5 {
            self.pending_azimuth = 0.0;
        }
        if self.pending_polar.abs() < 1e-5 {
            self.pending_polar = 0.0;
        }
        self.pending_azimuth != 0.0 || self.pending_polar != 0.0
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.polar.sin();
        self.target
            + self.radius
                * Vec3::new(s * self.azimuth.sin(), self.polar.cos(), s * self.azimuth.cos())
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.config.fovy_radians,
            znear: self.config.znear,
            zfar: self.config.zfar,
        }
    }
}
