use eframe::egui::Vec2;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) spacing: Vec2,
}

impl LayoutScale {
    pub(crate) const SPACING_FACTOR: Vec2 = Vec2::new(0.10, 0.15);
    pub(crate) const MIN_CELL_SIZE: f32 = 12.0;

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        let cell_size = cell_size.max(Self::MIN_CELL_SIZE);
        let spacing = Vec2::splat(cell_size) * Self::SPACING_FACTOR;
        Self { cell_size, spacing }
    }

    /// The largest scale at which `units` fit in `available`.
    #[must_use]
    pub(crate) fn fit(available: Vec2, units: ComponentUnits) -> Self {
        let by_width = available.x / units.width;
        let by_height = available.y / units.height;
        Self::new(by_width.min(by_height))
    }

    #[must_use]
    pub(crate) fn zoomed(self, factor: f32) -> Self {
        Self::new(self.cell_size * factor)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Stacks `other` below `self` with `gap` units between them.
    #[must_use]
    pub(crate) fn stacked(self, other: Self, gap: f32) -> Self {
        Self::new(self.width.max(other.width), self.height + gap + other.height)
    }
}
