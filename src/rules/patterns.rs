use super::Pattern;

impl Pattern {
    /// Live cells as `(dx, dy)` offsets from the anchor.
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        match self {
            Pattern::Blinker => vec![
                (0, -1), (0, 0), (0, 1)
            ],
            Pattern::Toad => vec![
                (-1, 0), (0, 0), (1, 0),
                (-2, 1), (-1, 1), (0, 1)
            ],
            Pattern::Block => vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1)
            ],
            Pattern::Glider => vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2)
            ],
            Pattern::LightweightSpaceship => vec![
                (0, 1), (0, 3),
                (1, 0),
                (2, 0),
                (3, 0), (3, 3),
                (4, 0), (4, 1), (4, 2)
            ],
            Pattern::GosperGliderGun => vec![
                // Left block
                (1, 5), (1, 6),
                (2, 5), (2, 6),

                // Left ship
                (11, 5), (11, 6), (11, 7),
                (12, 4), (12, 8),
                (13, 3), (13, 9),
                (14, 3), (14, 9),
                (15, 6),
                (16, 4), (16, 8),
                (17, 5), (17, 6), (17, 7),
                (18, 6),

                // Right ship
                (21, 3), (21, 4), (21, 5),
                (22, 3), (22, 4), (22, 5),
                (23, 2), (23, 6),
                (25, 1), (25, 2), (25, 6), (25, 7),

                // Right block
                (35, 3), (35, 4),
                (36, 3), (36, 4)
            ],
        }
    }

    /// Bounding box `(width, height)` of the pattern's offsets.
    pub fn extent(&self) -> (u32, u32) {
        let offsets = self.offsets();
        (
            span(offsets.iter().map(|&(dx, _)| dx)),
            span(offsets.iter().map(|&(_, dy)| dy)),
        )
    }
}

fn span(values: impl Iterator<Item = i32>) -> u32 {
    let (lo, hi) = values.fold((i32::MAX, i32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    (hi - lo + 1) as u32
}
