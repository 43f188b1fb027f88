// Manually advanced carousel state
//
// the slide count is fixed when the deck is built; stepping wraps around at
// both ends, and goto trusts the caller since indicator indices are valid
// by construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slideshow {
    current: usize,
    count: usize,
}

impl Slideshow {
    pub fn new(count: usize) -> Slideshow {
        Slideshow { current: 0, count }
    }

    pub fn current(self) -> usize {
        self.current
    }

    pub fn count(self) -> usize {
        self.count
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.count;
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.count - 1) % self.count;
    }

    pub fn goto(&mut self, index: usize) {
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_forward_wraps() {
        let mut deck = Slideshow::new(3);
        for expected in [1, 2, 0, 1] {
            deck.next();
            assert_eq!(deck.current(), expected);
        }
    }

    #[test]
    fn stepping_backward_wraps() {
        let mut deck = Slideshow::new(3);
        deck.prev();
        assert_eq!(deck.current(), 2);
        deck.prev();
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn mixed_steps_land_on_the_net_offset() {
        // any interleaving of f forward and b backward steps ends on
        // (f - b) mod count
        let sequences = ["ffffb", "bbf", "fbfbfbf", "bbbbbbbb"];
        for sequence in sequences {
            let mut deck = Slideshow::new(5);
            let mut net: i64 = 0;
            for step in sequence.chars() {
                if step == 'f' {
                    deck.next();
                    net += 1;
                } else {
                    deck.prev();
                    net -= 1;
                }
            }
            assert_eq!(deck.current() as i64, net.rem_euclid(5), "{sequence}");
        }
    }

    #[test]
    fn goto_selects_directly() {
        let mut deck = Slideshow::new(4);
        deck.goto(2);
        assert_eq!(deck.current(), 2);
        deck.next();
        assert_eq!(deck.current(), 3);
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let mut deck = Slideshow::new(1);
        deck.next();
        assert_eq!(deck.current(), 0);
        deck.prev();
        assert_eq!(deck.current(), 0);
    }
}
