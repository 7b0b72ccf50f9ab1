//! Direction of travel through the grid.

/// The orientation of a word: along a row or down a column.
///
/// The axis decides both where focus moves after input and which neighbors are
/// highlighted as part of the current word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Axis {
    /// Left-to-right words.
    #[default]
    Row,
    /// Top-to-bottom words.
    Column,
}

impl Axis {
    /// Returns the other axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use ristikko_core::Axis;
    ///
    /// assert_eq!(Axis::Row.toggled(), Axis::Column);
    /// assert_eq!(Axis::Column.toggled(), Axis::Row);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }

    /// Flips the axis in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

/// A single step along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Step {
    /// Towards higher ids (right or down).
    Forward,
    /// Towards lower ids (left or up).
    Backward,
}

impl Step {
    /// Returns the signed unit of this step (`+1` or `-1`).
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Returns the opposite step.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut axis = Axis::default();
        assert_eq!(axis, Axis::Row);
        axis.toggle();
        assert!(axis.is_column());
        axis.toggle();
        assert!(axis.is_row());
    }

    #[test]
    fn test_step_delta() {
        assert_eq!(Step::Forward.delta(), 1);
        assert_eq!(Step::Backward.delta(), -1);
        assert_eq!(Step::Forward.reversed(), Step::Backward);
        assert_eq!(Step::Backward.reversed(), Step::Forward);
    }
}
