pub mod projection;
pub mod color;
pub mod template;
pub mod scene;
pub mod renderers;

pub use renderers::{JsonRenderer, SceneRenderer, ThreeJsRenderer};
pub use template::Theme;
pub use projection::WorldBox;
