use super::GameRules;

impl GameRules {
    /// Conway's classic Game of Life (survive 2-3, birth 3)
    pub fn conway() -> Self {
        Self::new(2, 3, 3, 3)
    }

    /// The cube demos' default, 4526 in Carter Bays' notation.
    /// Keeps growing and never stabilizes.
    pub fn unbounded() -> Self {
        Self::new(4, 5, 2, 6)
    }

    /// 5766: sustains structures but tends to die out quickly.
    pub fn sustained() -> Self {
        Self::new(5, 7, 6, 6)
    }

    /// 4555
    pub fn bays_4555() -> Self {
        Self::new(4, 5, 5, 5)
    }

    /// 6855
    pub fn bays_6855() -> Self {
        Self::new(6, 8, 5, 5)
    }
}

/// Named rule sets an input source can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Conway,
    Unbounded,
    Sustained,
    Bays4555,
    Bays6855,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Conway,
        Preset::Unbounded,
        Preset::Sustained,
        Preset::Bays4555,
        Preset::Bays6855,
    ];

    pub fn rules(self) -> GameRules {
        match self {
            Preset::Conway => GameRules::conway(),
            Preset::Unbounded => GameRules::unbounded(),
            Preset::Sustained => GameRules::sustained(),
            Preset::Bays4555 => GameRules::bays_4555(),
            Preset::Bays6855 => GameRules::bays_6855(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Conway => "conway",
            Preset::Unbounded => "unbounded",
            Preset::Sustained => "sustained",
            Preset::Bays4555 => "4555",
            Preset::Bays6855 => "6855",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::ALL {
            assert!(preset.rules().validate().is_ok(), "{}", preset.name());
        }
    }

    #[test]
    fn test_preset_thresholds() {
        assert_eq!(Preset::Sustained.rules(), GameRules::new(5, 7, 6, 6));
        assert_eq!(Preset::Unbounded.rules(), GameRules::new(4, 5, 2, 6));
        assert_eq!(GameRules::default(), Preset::Conway.rules());
    }
}
