// Pure backdrop-scene state: particle field generation and the per-frame
// motion of the point cloud, the floating sphere, and the orbiting camera.
//
// Nothing here touches platform APIs; the web frontend advances these values
// once per animation frame and hands the results to the renderer. Host-side
// tests exercise the same code directly.

use glam::Vec3;
use rand::prelude::*;

/// Number of points in the backdrop cloud.
pub const PARTICLE_COUNT: usize = 5000;

/// Shell radii bounding every generated point.
pub const SHELL_INNER_RADIUS: f32 = 2.0;
pub const SHELL_OUTER_RADIUS: f32 = 4.0;

// Cloud rotation rates: radians accumulated per second of frame time.
pub const SPIN_X_DIVISOR: f32 = 10.0;
pub const SPIN_Y_DIVISOR: f32 = 15.0;

/// Fixed roll applied to the whole cloud around Z, on top of the spin.
pub const GROUP_TILT_Z: f32 = std::f32::consts::FRAC_PI_4;

// Floating sphere motion
pub const FLOAT_SPEED: f32 = 2.0; // bob phase advance (rad/s)
pub const FLOAT_AMPLITUDE: f32 = 0.25; // vertical bob extent (world units)
pub const SPHERE_SPIN_RATE: f32 = 1.0; // constant self-rotation (rad/s)

// Camera: fixed-radius orbit, zoom and pan disabled
pub const CAMERA_RADIUS: f32 = 5.0;
pub const AUTO_ORBIT_RATE: f32 = 0.05; // yaw rad/s

/// Point positions for the backdrop cloud, generated once and never
/// reallocated. Stored as a flat `[x, y, z, x, y, z, ..]` buffer ready for
/// upload as a vertex buffer.
pub struct ParticleField {
    positions: Vec<f32>,
}

impl ParticleField {
    /// Generate `PARTICLE_COUNT` points uniformly over the spherical shell
    /// between `SHELL_INNER_RADIUS` and `SHELL_OUTER_RADIUS`.
    ///
    /// Uniformity over the shell comes from the usual spherical sampling:
    /// θ uniform in [0, 2π), φ = arccos(2u − 1). The seed is explicit so the
    /// same field can be reproduced in tests.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(PARTICLE_COUNT * 3);
        for _ in 0..PARTICLE_COUNT {
            let theta = 2.0 * std::f32::consts::PI * rng.gen::<f32>();
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            let r = SHELL_INNER_RADIUS + (SHELL_OUTER_RADIUS - SHELL_INNER_RADIUS) * rng.gen::<f32>();
            positions.push(r * phi.sin() * theta.cos());
            positions.push(r * phi.sin() * theta.sin());
            positions.push(r * phi.cos());
        }
        Self { positions }
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Accumulated rotation of the particle cloud. Purely additive: over any
/// sequence of deltas the angles equal `-Σd / divisor` regardless of how the
/// sequence is split.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleSpin {
    pub x: f32,
    pub y: f32,
}

impl ParticleSpin {
    #[must_use]
    pub fn advanced(self, dt_sec: f32) -> Self {
        Self {
            x: self.x - dt_sec / SPIN_X_DIVISOR,
            y: self.y - dt_sec / SPIN_Y_DIVISOR,
        }
    }
}

/// Bob-and-spin state of the distorted sphere. Distortion amplitude and speed
/// are fixed in the shader; only phase advances here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SphereMotion {
    pub bob_phase: f32,
    pub angle: f32,
}

impl SphereMotion {
    #[must_use]
    pub fn advanced(self, dt_sec: f32) -> Self {
        Self {
            bob_phase: self.bob_phase + dt_sec * FLOAT_SPEED,
            angle: self.angle + dt_sec * SPHERE_SPIN_RATE,
        }
    }

    /// Vertical offset from the sphere's rest position, in world units.
    #[inline]
    pub fn bob_y(&self) -> f32 {
        self.bob_phase.sin() * FLOAT_AMPLITUDE
    }
}

/// Fixed-rate camera orbit around the scene origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraOrbit {
    pub yaw: f32,
}

impl CameraOrbit {
    #[must_use]
    pub fn advanced(self, dt_sec: f32) -> Self {
        Self {
            yaw: self.yaw + dt_sec * AUTO_ORBIT_RATE,
        }
    }

    /// Eye position on the orbit circle, looking at the origin.
    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            CAMERA_RADIUS * self.yaw.sin(),
            0.0,
            CAMERA_RADIUS * self.yaw.cos(),
        )
    }
}
