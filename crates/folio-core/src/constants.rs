// Entry sequence tuning shared by the web frontend and host tests.

// Input
pub const SENSITIVITY_DIVISOR: f32 = 3000.0; // device scroll units per full progress
pub const SETTLE_DELAY_MS: u64 = 800; // pause between completion and host hand-off
pub const PROGRESS_SNAP_EPSILON: f64 = 1e-5; // summed deltas this close to 1 count as 1

// Smoothing spring (damping 20 / stiffness 100 / mass 1 is critical)
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 20.0;
pub const SPRING_MASS: f32 = 1.0;
pub const MIN_SPRING_DAMPING_RATIO: f32 = 0.7; // below this the filter visibly overshoots
pub const SPRING_REST_DELTA: f32 = 0.001; // snap when this close and slow
pub const SPRING_REST_SPEED: f32 = 0.01;
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // backgrounded tabs report huge gaps

// Per-glyph flight
pub const OVERLAP_FACTOR: f32 = 2.0; // active window spans two partition steps
pub const OPACITY_FADE_SPAN: f32 = 0.1;
pub const DEPTH_MAX_PX: f32 = 1500.0; // flies past the camera
pub const BLUR_MAX_PX: f32 = 10.0;
pub const GLOW_RADIUS_MAX_PX: f32 = 20.0;
pub const GLOW_ALPHA_MAX: f32 = 0.8;
pub const REDUCED_MOTION_MIN_OPACITY: f32 = 0.2;

// Overlay container
pub const BACKDROP_FADE_START: f32 = 0.8;
pub const CONTAINER_SCALE_END: f32 = 1.5;

// Default display name
pub const FIRST_NAME: &str = "VICTOR";
pub const LAST_NAME: &str = "VALERO";

// Main view
pub const SECTION_COUNT: usize = 5;
pub const PHOTO_ALBUM_KEY: &str = "about-widget";

// Target cursor
pub const CURSOR_BORDER_PX: f32 = 3.0;
pub const CURSOR_CORNER_PX: f32 = 12.0;
pub const CURSOR_SPIN_PERIOD_SEC: f32 = 2.0;
pub const CURSOR_HOVER_RAMP_SEC: f32 = 0.2;
