pub mod config;
pub mod constants;
pub mod fps;
pub mod input;
pub mod projection;
pub mod state;
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use config::*;
pub use constants::*;
pub use fps::*;
pub use input::*;
pub use projection::*;
pub use state::*;
