use glam::Vec3;

// Renderer tuning constants for the backdrop scene. Motion constants that the
// host tests exercise live in `core::scene`; these only shape how the scene
// is drawn.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Particle cloud
pub const PARTICLE_SIZE: f32 = 0.015; // world-space half extent of a point quad
pub const PARTICLE_COLOR: [f32; 3] = [0.0, 0.94, 1.0]; // cyan

// Distorted sphere
pub const SPHERE_OFFSET: Vec3 = Vec3::new(2.5, -0.5, 0.0); // rest position
pub const SPHERE_SCALE: f32 = 1.2;
pub const SPHERE_RINGS: u32 = 64;
pub const SPHERE_SEGMENTS: u32 = 96;
pub const SPHERE_COLOR: [f32; 3] = [0.44, 0.0, 1.0]; // purple

// Scene lighting: ambient plus two fixed point lights. The light tints and
// the sphere's distortion amplitude/speed are fixed in the shader.
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const LIGHT_A_POS: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const LIGHT_B_POS: Vec3 = Vec3::new(-10.0, -10.0, -10.0);

// Page background behind the DOM content
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.016,
    g: 0.016,
    b: 0.035,
    a: 1.0,
};
