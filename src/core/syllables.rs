use crate::domain::model::SyllableComparison;

/// Syllable-count check for one record. A requested count of 0 disables the
/// check, and records without syllable data always pass.
pub fn passes(item_syllables: Option<u32>, requested: u32, comparison: SyllableComparison) -> bool {
    if requested == 0 {
        return true;
    }
    let Some(count) = item_syllables else {
        return true;
    };

    match comparison {
        SyllableComparison::Exact => count == requested,
        SyllableComparison::LessThan => count < requested,
    }
}

pub fn syllable_label(count: u32) -> &'static str {
    if count == 1 {
        "syllable"
    } else {
        "syllables"
    }
}
