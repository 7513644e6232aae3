/// Cap on the number of elements a merge or union emits.
///
/// Note the sharp edge carried over from the storage engine's callers:
/// `Limit::from(0)` is `Max(0)`, which emits nothing at all. It does NOT
/// mean "no limit". Use [`Limit::Unbounded`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    /// No cap.
    #[default]
    Unbounded,
    /// Emit at most this many elements. `Max(0)` behaves like an empty stream.
    Max(usize),
}

impl Limit {
    /// True once no further element may be emitted.
    pub fn is_reached(&self) -> bool {
        matches!(self, Limit::Max(0))
    }

    /// Account for one emitted element.
    pub fn consume(&mut self) {
        if let Limit::Max(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::Max(n)
    }
}

impl From<Option<usize>> for Limit {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Limit::Unbounded, Limit::Max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_reached_immediately() {
        assert!(Limit::from(0).is_reached());
        assert!(!Limit::Unbounded.is_reached());
    }

    #[test]
    fn consume_counts_down_and_saturates() {
        let mut limit = Limit::Max(2);
        limit.consume();
        assert_eq!(limit, Limit::Max(1));
        limit.consume();
        assert!(limit.is_reached());
        limit.consume();
        assert_eq!(limit, Limit::Max(0));

        let mut unbounded = Limit::default();
        unbounded.consume();
        assert_eq!(unbounded, Limit::Unbounded);
    }

    #[test]
    fn option_maps_none_to_unbounded() {
        assert_eq!(Limit::from(None), Limit::Unbounded);
        assert_eq!(Limit::from(Some(3)), Limit::Max(3));
    }
}
