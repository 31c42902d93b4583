mod renderer;
mod state;
pub mod theme;

pub use renderer::render;
pub use state::{AppState, BackendStatus, SearchPhase};
pub use theme::Theme;
