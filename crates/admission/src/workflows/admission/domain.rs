use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier handed out to applicants at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollNumber(pub u32);

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reservation categories recognised by seat ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    General,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "EWS")]
    Ews,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [Self::General, Self::Obc, Self::Sc, Self::St, Self::Ews]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Ews => "EWS",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::General => 0,
            Self::Obc => 1,
            Self::Sc => 2,
            Self::St => 3,
            Self::Ews => 4,
        }
    }

    /// Exact, case-sensitive label lookup. Surrounding whitespace is not
    /// stripped; `None` for anything outside the fixed set.
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == raw)
    }

    /// Unrecognised labels fall back to [`Category::General`].
    pub fn normalize(raw: &str) -> Self {
        Self::from_label(raw).unwrap_or(Self::General)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Case-folds the input and expands `f`. Anything else, including padded
    /// text, is treated as male.
    pub fn normalize(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "female" | "f" => Self::Female,
            _ => Self::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dining plan tiers offered by a mess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MessPlan {
    Basic,
    Standard,
    Premium,
}

impl MessPlan {
    pub const fn ordered() -> [Self; 3] {
        [Self::Basic, Self::Standard, Self::Premium]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered().into_iter().find(|plan| plan.label() == raw)
    }
}

impl fmt::Display for MessPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-size table with one slot per [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryTable<T> {
    slots: [T; Category::COUNT],
}

impl<T: Copy + Default> CategoryTable<T> {
    pub fn new() -> Self {
        Self {
            slots: [T::default(); Category::COUNT],
        }
    }

    pub fn with(mut self, category: Category, value: T) -> Self {
        self.set(category, value);
        self
    }
}

impl<T> CategoryTable<T> {
    pub fn get(&self, category: Category) -> &T {
        &self.slots[category.index()]
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        &mut self.slots[category.index()]
    }

    pub fn set(&mut self, category: Category, value: T) {
        self.slots[category.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> + '_ {
        Category::ordered()
            .into_iter()
            .map(move |category| (category, &self.slots[category.index()]))
    }
}

impl<T: Copy + Default> FromIterator<(Category, T)> for CategoryTable<T> {
    fn from_iter<I: IntoIterator<Item = (Category, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (category, value) in iter {
            table.set(category, value);
        }
        table
    }
}

/// Inclusive `[opening, closing]` rank range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankWindow {
    opening: u32,
    closing: u32,
}

impl RankWindow {
    /// Both bounds are raised to at least 1 and `closing` is lifted to `opening` when inverted.
    pub fn new(opening: u32, closing: u32) -> Self {
        let opening = opening.max(1);
        let closing = closing.max(1).max(opening);
        Self { opening, closing }
    }

    pub const fn unbounded() -> Self {
        Self {
            opening: 1,
            closing: u32::MAX,
        }
    }

    pub const fn opening(&self) -> u32 {
        self.opening
    }

    pub const fn closing(&self) -> u32 {
        self.closing
    }

    pub const fn contains(&self, rank: u32) -> bool {
        rank >= self.opening && rank <= self.closing
    }
}

impl Default for RankWindow {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for RankWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.opening, self.closing)
    }
}
