//! Five elements (五行) and per-chart element counts.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The five elements in generating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Kanji name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Occurrence count of each element over a set of stems and branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    /// Tally the given elements.
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut tally = Self::default();
        for e in elements {
            tally.add(e);
        }
        tally
    }

    pub fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// `(element, count)` pairs in generating order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.count(e)))
    }

    /// Element(s) with the highest count, in generating order.
    pub fn dominant(&self) -> Vec<Element> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        self.iter()
            .filter(|&(_, c)| c == max)
            .map(|(e, _)| e)
            .collect()
    }

    /// Elements absent from the chart.
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|&(_, c)| c == 0).map(|(e, _)| e).collect()
    }
}

/// Serialized as a kanji-keyed map: `{"木":n,"火":n,"土":n,"金":n,"水":n}`.
impl Serialize for ElementTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_ELEMENTS.len()))?;
        for (e, c) in self.iter() {
            map.serialize_entry(e.name(), &c)?;
        }
        map.end()
    }
}
