//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod diversity;
mod length;
mod variety;

pub use diversity::diversity_section;
pub use length::length_section;
pub use variety::character_variety_section;

/// Outcome of a single scoring section.
///
/// `points` is what the section awarded; `suggestions` holds one entry per
/// criterion within the section that awarded nothing, in criterion order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SectionScore {
    pub points: u8,
    pub suggestions: Vec<String>,
}

impl SectionScore {
    pub(crate) fn awarded(points: u8) -> Self {
        SectionScore {
            points,
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn missed(suggestion: &str) -> Self {
        SectionScore {
            points: 0,
            suggestions: vec![suggestion.to_string()],
        }
    }
}
