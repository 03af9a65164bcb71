pub mod analyzer;
pub mod color;
pub mod constants;
pub mod frame;
pub mod mesh;
pub mod orbit;
pub mod panel;
pub mod progress;
pub mod rings;
pub mod scene;
pub mod state;
pub mod subscription;
pub mod texture;
pub mod transport;
pub mod tween;
pub mod uniforms;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SHADOW_WGSL: &str = include_str!("../shaders/shadow.wgsl");

pub use analyzer::*;
pub use color::*;
pub use constants::*;
pub use frame::*;
pub use mesh::*;
pub use orbit::*;
pub use panel::*;
pub use progress::*;
pub use rings::*;
pub use scene::*;
pub use state::*;
pub use subscription::*;
pub use texture::*;
pub use transport::*;
pub use tween::*;
pub use uniforms::*;
