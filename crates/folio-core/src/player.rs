//! Background music: playlist order and playback state.
//!
//! The `<audio>` element is owned by the web layer; this module only decides
//! which track should be loaded and what the now-playing card shows.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub src: String,
    pub title: String,
    pub artist: Option<String>,
    pub cover_url: Option<String>,
}

impl Track {
    pub fn new(src: &str, title: &str, artist: &str, cover_url: &str) -> Self {
        Self {
            src: src.to_owned(),
            title: title.to_owned(),
            artist: Some(artist.to_owned()),
            cover_url: Some(cover_url.to_owned()),
        }
    }
}

pub fn default_playlist() -> Vec<Track> {
    vec![
        Track::new(
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/casiopea-3GUpLiMeo45hk5TGob3mSbQGGAuzmQ.mp3",
            "Casiopea",
            "Casiopea",
            "/music/casiopea-cover.png",
        ),
        Track::new(
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Cosmic%20Surfin-DKe96czTJBaj9pqb5RtglR73mHxz8S.mp3",
            "Cosmic Surfin",
            "Casiopea",
            "/music/pacific-cover.png",
        ),
        Track::new("/music/milk.mp3", "Milk", "Sweet Trip", "/music/milk-cover.png"),
        Track::new(
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/I%20Want%20To%20Talk%20About%20You-9UcBLTBcuLs0hwvlZIY3Bes8zs6HoH.mp3",
            "I Want To Talk About You",
            "Ryo Fukui",
            "/music/souvenir-cover.png",
        ),
    ]
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub index: usize,
    pub playing: bool,
    pub current_time: f64,
    pub duration: f64,
}

impl PlayerState {
    /// Skip forward, wrapping. A no-op on an empty playlist.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
        self.reset_position();
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
        self.reset_position();
    }

    /// The element fired `ended`: continue with the next track.
    pub fn track_ended(&mut self, len: usize) {
        self.next(len);
    }

    pub fn set_position(&mut self, current_time: f64, duration: f64) {
        self.current_time = current_time;
        self.duration = duration;
    }

    /// Elapsed share of the current track in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.duration.is_nan() || self.duration <= 0.0 {
            return 0.0;
        }
        (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
    }

    fn reset_position(&mut self) {
        self.current_time = 0.0;
        self.duration = 0.0;
    }
}

/// `m:ss`, with "0:00" for anything not positive and finite.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
