/// Monotonic id source. Ids start at 1 and are never handed out twice.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<i64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdGenerator {
    /// Return the current id and advance the counter, or `None` once the id
    /// space is used up. After `i64::MAX` no further id is produced.
    pub fn next_id(&mut self) -> Option<i64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// The id the next call to `next_id` will return.
    pub fn peek(&self) -> Option<i64> {
        self.next
    }

    #[cfg(test)]
    fn starting_at(next: i64) -> Self {
        Self { next: Some(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_and_increments() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.peek(), Some(1));
        assert_eq!(ids.next_id(), Some(1));
        assert_eq!(ids.next_id(), Some(2));
        assert_eq!(ids.peek(), Some(3));
    }

    #[test]
    fn last_id_is_not_repeated() {
        let mut ids = IdGenerator::starting_at(i64::MAX - 1);
        assert_eq!(ids.next_id(), Some(i64::MAX - 1));
        assert_eq!(ids.next_id(), Some(i64::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.peek(), None);
    }
}
