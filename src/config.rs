use std::path::PathBuf;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;
pub const TICKS_PER_SECOND: u32 = 60;
pub const WINDOW_TITLE: &str = "Cracker Chase";

pub const CRACKER_COUNT: usize = 20;
pub const CAPTURE_POINTS: u32 = 10;
// Exact match only; a different award step would skip it.
pub const MILESTONE_SCORE: u32 = 990;

/// Tomato entry delays in frames: 300, 600, ..., 2700.
pub const TOMATO_DELAY_STEP: u32 = 300;
pub const TOMATO_DELAY_END: u32 = 3000;

pub const TEXT_SCALE: i32 = 4;

pub const ASSET_DIR_ENV: &str = "CRACKER_CHASE_ASSETS";

pub const BACKGROUND_FILE: &str = "background.png";
pub const START_SCREEN_FILE: &str = "start background.png";
pub const CHEESE_FILE: &str = "cheese.png";
pub const CRACKER_FILE: &str = "cracker.png";
pub const TOMATO_FILE: &str = "tomato.png";
pub const CAPTURE_SOUND_FILE: &str = "burp.wav";
pub const MILESTONE_SOUND_FILE: &str = "1000.mp3";
pub const DEATH_SOUND_FILE: &str = "die.mp3";

pub fn tomato_delays() -> impl Iterator<Item = u32> {
    (TOMATO_DELAY_STEP..TOMATO_DELAY_END).step_by(TOMATO_DELAY_STEP as usize)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub asset_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(dir) = lookup(ASSET_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            settings.asset_dir = PathBuf::from(dir);
        }
        settings
    }
}
