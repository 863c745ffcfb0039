// ABOUTME: Sequential id generation
// ABOUTME: Prefixed monotonic counters backing issue ("I<n>") and agent ("A<n>") ids

/// Monotonic id generator. Each store owns one; ids start at 1 and are
/// never reused for the lifetime of the store.
#[derive(Debug)]
pub struct IdSequence {
    prefix: &'static str,
    counter: u64,
}

impl IdSequence {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, counter: 0 }
    }

    /// Allocate the next id in the sequence.
    pub fn next(&mut self) -> String {
        self.counter += 1;
        format!("{}{}", self.prefix, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ids_start_at_one_and_increment() {
        let mut seq = IdSequence::new("I");
        assert_eq!(seq.next(), "I1");
        assert_eq!(seq.next(), "I2");
        assert_eq!(seq.next(), "I3");
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut issues = IdSequence::new("I");
        let mut agents = IdSequence::new("A");
        assert_eq!(issues.next(), "I1");
        assert_eq!(agents.next(), "A1");
        assert_eq!(issues.next(), "I2");
        assert_eq!(agents.next(), "A2");
    }
}
