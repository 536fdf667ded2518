pub mod full_screen;
pub mod grid;
pub mod stage;
pub mod status;
pub mod top_bar;

pub use full_screen::full_screen;
pub use grid::{GRID_SCROLL_ID, grid};
pub use stage::{STAGE_SCROLL_ID, stage};
pub use status::status;
pub use top_bar::top_bar;
