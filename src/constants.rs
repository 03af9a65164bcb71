/// Page wiring and startup timing constants for the web front-end.
///
/// Scene layout and animation constants live in `rings_core::constants`; this
/// module only holds what the browser side needs: selectors, asset URLs and
/// the delays of the startup sequence.
// DOM selectors
pub const LOADER_SELECTOR: &str = ".loader";
pub const PLAY_INTRO_SELECTOR: &str = ".play-intro";
pub const PLAY_SELECTOR: &str = ".play";
pub const PAUSE_SELECTOR: &str = ".pause";
pub const AUDIO_ID: &str = "audio";
pub const PANEL_ID: &str = "panel";

// CSS classes toggled by the app
pub const CLASS_SHOW: &str = "control-show";
pub const CLASS_REMOVE_LOADER: &str = "removeLoader";

// Assets
pub const AUDIO_URL: &str = "https://iondrimbafilho.me/chaos.mp3";
/// Attribute on `#audio` that overrides [`AUDIO_URL`].
pub const AUDIO_SRC_ATTR: &str = "data-src";
pub const NORMAL_MAP_URL: &str =
    "https://raw.githubusercontent.com/iondrimba/images/master/metal_plate_Nor_1k.jpg";
/// +X, -X, +Y, -Y, +Z, -Z
pub const CUBE_FACE_URLS: [&str; 6] = [
    "https://iondrimbafilho.me/3d5/img/posx.jpg",
    "https://iondrimbafilho.me/3d5/img/negx.jpg",
    "https://iondrimbafilho.me/3d5/img/posy.jpg",
    "https://iondrimbafilho.me/3d5/img/negy.jpg",
    "https://iondrimbafilho.me/3d5/img/posz.jpg",
    "https://iondrimbafilho.me/3d5/img/negz.jpg",
];

// Startup timings (milliseconds)
pub const REVEAL_DELAY_MS: i32 = 300;
pub const SCENE_BUILD_DELAY_MS: i32 = 200;
pub const AUDIO_SRC_DELAY_MS: i32 = 500;

// Audio
pub const AUDIO_VOLUME: f64 = 0.5;

// Cursor styles while orbiting
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

// Panel toggle labels
pub const PANEL_OPEN_LABEL: &str = "Open Controls";
pub const PANEL_CLOSE_LABEL: &str = "Close Controls";

// Placeholder texels until the real textures arrive
pub const FLAT_NORMAL_TEXEL: [u8; 4] = [128, 128, 255, 255];
pub const NEUTRAL_ENV_TEXEL: [u8; 4] = [24, 24, 24, 255];

/// CSS transform for the progress bar at `percent`.
#[inline]
pub fn loader_transform(percent: u8) -> String {
    format!("scale({}, 1)", f32::from(percent.min(100)) / 100.0)
}

pub const LOADER_COLLAPSED: &str = "scale(1, 0)";
