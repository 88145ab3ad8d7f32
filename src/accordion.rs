/// Single-open accordion used by the FAQ list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn first_open() -> Self {
        Self { open: Some(0) }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn toggled(mut self, index: usize) -> Self {
        self.toggle(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_starts_expanded() {
        let accordion = Accordion::first_open();

        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn opening_another_item_collapses_the_previous_one() {
        let accordion = Accordion::first_open().toggled(3);

        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn toggling_the_open_item_collapses_everything() {
        let mut accordion = Accordion::first_open();
        accordion.toggle(0);

        assert_eq!(accordion, Accordion::default());
        assert!((0..6).all(|index| !accordion.is_open(index)));
    }
}
