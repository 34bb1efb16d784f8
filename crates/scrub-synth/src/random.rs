/// Source of uniform random integers.
pub trait RandomSource {
    /// Uniform integer in `0..bound`; `bound` is at least 1.
    fn below(&mut self, bound: usize) -> usize;

    fn digit(&mut self) -> char {
        char::from(b'0' + self.below(10) as u8)
    }

    fn nonzero_digit(&mut self) -> char {
        char::from(b'1' + self.below(9) as u8)
    }

    fn uppercase(&mut self) -> char {
        char::from(b'A' + self.below(26) as u8)
    }

    fn choose<'a>(&mut self, items: &[&'a str]) -> &'a str {
        if items.is_empty() {
            return "";
        }
        items[self.below(items.len())]
    }
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: usize) -> usize {
        self.usize(..bound.max(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Replays a fixed sequence of values, reduced modulo the requested bound.
///
/// Lets callers pin down synthetic output exactly.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always yields `value`.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn below(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound.max(1)
    }
}
