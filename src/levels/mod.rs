pub mod fibonacci;
pub mod gann_angles;
pub mod gann_box;
pub mod gann_wave;
pub mod pivots;
pub mod square_of_nine;
pub mod time_cycles;

pub use pivots::{pivot_levels, PivotLevels};
pub use square_of_nine::{degree_levels, rings, square_of_144};
