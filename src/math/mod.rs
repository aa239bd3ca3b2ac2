mod color;

pub use color::{hex_to_rgb, BLACK, BRIGHT_GOLD, GOLD, SILVER, WHITE};
