use crate::batch::Color;

// seconds between two visibility toggles of a manual blink
pub const MANUAL_BLINK_INTERVAL: f32 = 0.1;
pub const MANUAL_NUM_BLINKS: usize = 14;

// rows are squashed compared to columns
pub const ROW_HEIGHT_RATIO: f32 = 1.5;

pub const DEFAULT_MAX_VALUE: i32 = 10;

pub const BLACK: Color = Color(0, 0, 0, 255);
pub const WHITE: Color = Color(255, 255, 255, 255);
pub const RED: Color = Color(255, 0, 0, 255);
pub const GREEN: Color = Color(0, 128, 0, 255);
