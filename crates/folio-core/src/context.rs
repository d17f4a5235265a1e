//! Root-owned application state handed down to every view.

use crate::player::{default_playlist, PlayerState, Track};
use crate::store::Store;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Fr, Language::De];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_ascii_lowercase();
        // "es-MX" and friends map to their base language
        let base = lower.split(['-', '_']).next().unwrap_or("");
        Self::ALL.into_iter().find(|l| l.code() == base)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPhase {
    #[default]
    Entry,
    Main,
}

/// Created once at startup and lives for the whole session.
#[derive(Clone)]
pub struct AppContext {
    pub language: Store<Language>,
    pub view: Store<ViewPhase>,
    pub section: Store<usize>,
    pub player: Store<PlayerState>,
    pub playlist: Rc<Vec<Track>>,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(default_playlist())
    }
}

impl AppContext {
    pub fn new(playlist: Vec<Track>) -> Self {
        Self {
            language: Store::default(),
            view: Store::default(),
            section: Store::default(),
            player: Store::default(),
            playlist: Rc::new(playlist),
        }
    }

    pub fn has_entered(&self) -> bool {
        self.view.get() == ViewPhase::Main
    }

    pub fn current_track(&self) -> Option<Track> {
        let index = self.player.with(|p| p.index);
        self.playlist.get(index).cloned()
    }

    pub fn skip_next(&self) {
        let len = self.playlist.len();
        self.player.update(|p| p.next(len));
    }

    pub fn skip_prev(&self) {
        let len = self.playlist.len();
        self.player.update(|p| p.prev(len));
    }

    pub fn track_ended(&self) {
        let len = self.playlist.len();
        self.player.update(|p| p.track_ended(len));
    }
}
