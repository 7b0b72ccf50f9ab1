/// Grid magnification driven by two-finger pinch gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Zoom {
    factor: f32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { factor: Self::MIN }
    }
}

impl Zoom {
    pub(crate) const MIN: f32 = 1.0;
    pub(crate) const MAX: f32 = 4.0;

    #[must_use]
    pub(crate) fn factor(self) -> f32 {
        self.factor
    }

    #[must_use]
    pub(crate) fn is_zoomed(self) -> bool {
        self.factor > Self::MIN
    }

    /// Multiplies the factor by a pinch `scale`, keeping it within `MIN..=MAX`.
    ///
    /// Non-finite or non-positive scales are ignored.
    pub(crate) fn pinch(&mut self, scale: f32) {
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        self.factor = (self.factor * scale).clamp(Self::MIN, Self::MAX);
    }

    pub(crate) fn reset(&mut self) {
        self.factor = Self::MIN;
    }
}
