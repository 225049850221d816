mod courtyard;
mod stacked;

pub use courtyard::create_courtyard_scene;
pub use stacked::create_stacked_scene;
