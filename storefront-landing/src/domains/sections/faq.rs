use log::warn;
use storefront_model::{FaqConfig, FaqEntry, Section, SectionId};

/// Accordion with at most one open answer.
#[derive(Debug, Clone)]
pub struct FaqSection {
    pub id: SectionId,
    pub title: Option<String>,
    items: Vec<FaqEntry>,
    open: Option<usize>,
}

impl FaqSection {
    pub fn mount(section: &Section) -> Self {
        let config: FaqConfig = section.config_as().unwrap_or_else(|err| {
            warn!("[LandingPage] Section {}: {}", section.id, err);
            FaqConfig::default()
        });
        Self::new(section.id.clone(), section.title.clone(), config.items)
    }

    pub fn new(
        id: SectionId,
        title: Option<String>,
        items: Vec<FaqEntry>,
    ) -> Self {
        Self {
            id,
            title,
            items,
            open: None,
        }
    }

    pub fn items(&self) -> &[FaqEntry] {
        &self.items
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index` (closing any other), or close it if it is already open.
    /// Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(n: usize) -> FaqSection {
        let items = (0..n)
            .map(|i| FaqEntry {
                question: format!("Q{i}"),
                answer: format!("A{i}"),
            })
            .collect();
        FaqSection::new(SectionId::from("faq"), None, items)
    }

    #[test]
    fn only_one_answer_is_open() {
        let mut f = faq(3);
        f.toggle(0);
        f.toggle(2);
        assert!(!f.is_open(0));
        assert!(f.is_open(2));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let mut f = faq(2);
        f.toggle(1);
        f.toggle(1);
        assert_eq!(f.open_index(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut f = faq(2);
        f.toggle(0);
        f.toggle(7);
        assert_eq!(f.open_index(), Some(0));
    }
}
