use crate::GeneralCategory;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CodepointRecord {
    pub codepoint: u32,
    pub category: GeneralCategory,
}

impl CodepointRecord {
    pub fn new(codepoint: u32, category: GeneralCategory) -> Self {
        Self {
            codepoint,
            category,
        }
    }
}
