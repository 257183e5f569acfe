pub mod content;
pub mod scene;
pub mod ui;

pub use content::*;
pub use scene::*;
pub use ui::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
