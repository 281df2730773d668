//! Ordinal color scales for categorical chart series.

use super::style::ChartColor;

/// The ten-color categorical palette ("category10").
pub const CATEGORY10: [ChartColor; 10] = [
    ChartColor::from_u32(0x1f77b4),
    ChartColor::from_u32(0xff7f0e),
    ChartColor::from_u32(0x2ca02c),
    ChartColor::from_u32(0xd62728),
    ChartColor::from_u32(0x9467bd),
    ChartColor::from_u32(0x8c564b),
    ChartColor::from_u32(0xe377c2),
    ChartColor::from_u32(0x7f7f7f),
    ChartColor::from_u32(0xbcbd22),
    ChartColor::from_u32(0x17becf),
];

/// Maps a discrete index onto a fixed palette, wrapping around when the
/// index runs past the end.
#[derive(Debug, Clone, Copy)]
pub struct OrdinalScale {
    palette: &'static [ChartColor],
}

impl Default for OrdinalScale {
    fn default() -> Self {
        Self::category10()
    }
}

impl OrdinalScale {
    #[must_use]
    pub const fn category10() -> Self {
        Self {
            palette: &CATEGORY10,
        }
    }

    /// Build a scale over a custom palette. An empty palette falls back to
    /// category10.
    #[must_use]
    pub const fn with_palette(palette: &'static [ChartColor]) -> Self {
        if palette.is_empty() {
            Self::category10()
        } else {
            Self { palette }
        }
    }

    #[must_use]
    pub const fn color(&self, index: usize) -> ChartColor {
        self.palette[index % self.palette.len()]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.palette.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
