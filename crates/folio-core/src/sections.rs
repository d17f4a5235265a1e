use crate::constants::SECTION_COUNT;

/// The horizontally snapped sections of the main view, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Work,
    About,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; SECTION_COUNT] = [
        Section::Home,
        Section::Work,
        Section::About,
        Section::Skills,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// DOM id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }
}

/// Section currently snapped into view for a horizontal scroll offset.
#[inline]
pub fn section_for_scroll(scroll_left: f64, width: f64) -> usize {
    if width.is_nan() || width <= 0.0 || !scroll_left.is_finite() {
        return 0;
    }
    let idx = (scroll_left / width).round().max(0.0) as usize;
    idx.min(SECTION_COUNT - 1)
}

#[inline]
pub fn scroll_offset(index: usize, width: f64) -> f64 {
    index.min(SECTION_COUNT - 1) as f64 * width.max(0.0)
}

/// One dot of the page indicator plus the connector drawn after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorDot {
    pub active: bool,
    /// `None` for the last dot.
    pub connector_filled: Option<bool>,
}

pub fn indicator(current: usize, count: usize) -> Vec<IndicatorDot> {
    (0..count)
        .map(|i| IndicatorDot {
            active: i == current,
            connector_filled: (i + 1 < count).then_some(current > i),
        })
        .collect()
}

/// Section navigation gated on the entry sequence having finished.
#[derive(Clone, Debug, Default)]
pub struct SectionNav {
    entered: bool,
    current: usize,
}

impl SectionNav {
    pub fn set_entered(&mut self, entered: bool) {
        self.entered = entered;
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Record the section reported by the scroll container.
    pub fn on_scroll(&mut self, scroll_left: f64, width: f64) -> Option<usize> {
        if !self.entered {
            return None;
        }
        let idx = section_for_scroll(scroll_left, width);
        if idx == self.current {
            return None;
        }
        self.current = idx;
        Some(idx)
    }

    /// Target scroll offset for a jump, or `None` before entry.
    pub fn jump_to(&self, index: usize, width: f64) -> Option<f64> {
        self.entered.then(|| scroll_offset(index, width))
    }

    pub fn next(&self, width: f64) -> Option<f64> {
        self.jump_to((self.current + 1).min(SECTION_COUNT - 1), width)
    }

    pub fn prev(&self, width: f64) -> Option<f64> {
        self.jump_to(self.current.saturating_sub(1), width)
    }
}
