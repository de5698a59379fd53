use std::fmt;

/// The institutional grade scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    O,
    APlus,
    A,
    BPlus,
    B,
    C,
    F,
}

impl LetterGrade {
    pub const ALL: [LetterGrade; 7] = [
        Self::O,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::C,
        Self::F,
    ];

    /// Looks up an already-normalised (uppercase, trimmed) symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "O" => Some(Self::O),
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "F" => Some(Self::F),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::F => "F",
        }
    }

    pub fn points(self) -> u8 {
        match self {
            Self::O => 10,
            Self::APlus => 9,
            Self::A => 8,
            Self::BPlus => 7,
            Self::B => 6,
            Self::C => 5,
            Self::F => 0,
        }
    }
}

/// A grade as submitted, normalised to uppercase.
///
/// Symbols outside [`LetterGrade`] are kept verbatim and score zero points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grade(String);

impl Grade {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letter(&self) -> Option<LetterGrade> {
        LetterGrade::from_symbol(&self.0)
    }

    pub fn points(&self) -> u8 {
        self.letter().map_or(0, LetterGrade::points)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<LetterGrade> for Grade {
    fn from(value: LetterGrade) -> Self {
        Self(value.symbol().to_string())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
