// Page-side presentation constants: element ids the crate drives plus
// the decorative pointer/scroll tuning.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "scene-canvas";
pub const FIREWORKS_LAYER_ID: &str = "fireworks-layer";
pub const TRIGGER_BUTTON_ID: &str = "fireworks-button";
pub const CURSOR_HALO_ID: &str = "cursor-halo";
pub const PARALLAX_LAYER_ID: &str = "parallax-bg";

// Cursor-follow highlight
pub const CURSOR_HALO_SIZE_PX: f64 = 50.0;

// Fraction of the scroll offset applied to the background layer
pub const PARALLAX_FACTOR: f64 = 0.5;

// How far a spark travels from the burst core
pub const SPARK_TRAVEL_NARROW_PX: f32 = 10.0;
pub const SPARK_TRAVEL_WIDE_PX: f32 = 20.0;
