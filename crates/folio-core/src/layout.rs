//! Splitting the display name into animated glyphs.

use smallvec::SmallVec;

pub type GlyphLine = SmallVec<[Glyph; 16]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeVariant {
    Sans,
    SerifItalic,
}

/// Which glyphs get the alternate typographic treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleRule {
    /// Indices `>= n` are serif.
    SplitAt(usize),
    /// Odd indices are serif.
    Parity,
}

impl StyleRule {
    #[inline]
    pub fn variant_for(self, index: usize) -> TypeVariant {
        let serif = match self {
            StyleRule::SplitAt(n) => index >= n,
            StyleRule::Parity => index % 2 == 1,
        };
        if serif {
            TypeVariant::SerifItalic
        } else {
            TypeVariant::Sans
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Letter {
        ch: char,
        index: usize,
        variant: TypeVariant,
    },
    /// Fixed-width gap; never animated.
    Spacer,
}

#[derive(Clone, Debug)]
pub struct NameLayout {
    pub first: String,
    pub last: String,
    pub rule: StyleRule,
}

impl NameLayout {
    /// Surname gets the serif treatment.
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            first: first.to_owned(),
            last: last.to_owned(),
            rule: StyleRule::SplitAt(first.chars().count() + 1),
        }
    }

    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        self.rule = rule;
        self
    }

    /// Glyph count used for range partitioning, the separating space included.
    pub fn total(&self) -> usize {
        self.first.chars().count() + 1 + self.last.chars().count()
    }

    pub fn single_line(&self) -> GlyphLine {
        let full = format!("{} {}", self.first, self.last);
        self.glyphs(&full, 0)
    }

    /// Narrow screens: first and last name stacked. Indices continue across
    /// the break so both layouts animate identically.
    pub fn two_lines(&self) -> [GlyphLine; 2] {
        let offset = self.first.chars().count() + 1;
        [self.glyphs(&self.first, 0), self.glyphs(&self.last, offset)]
    }

    fn glyphs(&self, text: &str, offset: usize) -> GlyphLine {
        text.chars()
            .enumerate()
            .map(|(i, ch)| {
                if ch.is_whitespace() {
                    Glyph::Spacer
                } else {
                    let index = offset + i;
                    Glyph::Letter {
                        ch,
                        index,
                        variant: self.rule.variant_for(index),
                    }
                }
            })
            .collect()
    }
}
