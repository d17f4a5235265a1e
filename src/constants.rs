// DOM hooks and presentation tuning for the web frontend.

// Element ids
pub const ENTRY_OVERLAY_ID: &str = "entry-overlay";
pub const ENTRY_WIDE_ID: &str = "entry-name-wide";
pub const ENTRY_NARROW_ID: &str = "entry-name-narrow";
pub const ENTRY_HINT_ID: &str = "entry-hint";
pub const MAIN_VIEW_ID: &str = "main-view";
pub const SECTIONS_ID: &str = "sections";
pub const INDICATOR_ID: &str = "page-indicator";
pub const AUDIO_ID: &str = "bg-audio";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const MUSIC_NEXT_ID: &str = "music-next";
pub const MUSIC_PREV_ID: &str = "music-prev";
pub const NOW_PLAYING_ID: &str = "now-playing";
pub const ABOUT_ID: &str = "about-content";
pub const PROJECTS_ID: &str = "projects-grid";
pub const EXPERIENCE_ID: &str = "experience-list";
pub const PHOTOS_ID: &str = "photo-widget";
pub const CURSOR_ID: &str = "target-cursor";

// Selectors
pub const CURSOR_TARGET_SELECTOR: &str = ".cursor-target, button, a[href], [role='button']";
pub const LANG_BUTTON_SELECTOR: &str = "[data-lang]";
pub const SECTION_LINK_SELECTOR: &str = "[data-section]";

// Classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const SERIF_CLASS: &str = "glyph-serif";
pub const SANS_CLASS: &str = "glyph-sans";
pub const SPACER_CLASS: &str = "glyph-spacer";

// Wheel deltaMode scaling (DOM_DELTA_LINE / DOM_DELTA_PAGE to px)
pub const WHEEL_LINE_PX: f64 = 16.0;
pub const WHEEL_PAGE_FALLBACK_PX: f64 = 800.0;
pub const TOUCH_DELTA_GAIN: f64 = 3.0; // finger travel is short next to wheel deltas

// Glow colour channel (white) used by the text-shadow
pub const GLOW_RGB: [u8; 3] = [255, 255, 255];

// Main view fade-in once the entry hands off
pub const MAIN_FADE_MS: u32 = 1000;
