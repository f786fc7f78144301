// ---------------------------------------------------------------------------
// Preset – a typical fish used to seed the form
// ---------------------------------------------------------------------------

/// A named example measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub length_cm: f64,
    pub weight_g: f64,
}

/// The static preset table, in selector order.
pub const PRESETS: [Preset; 7] = [
    Preset {
        name: "Common Carp",
        length_cm: 45.0,
        weight_g: 1250.0,
    },
    Preset {
        name: "Pike",
        length_cm: 50.0,
        weight_g: 900.0,
    },
    Preset {
        name: "Roach",
        length_cm: 25.0,
        weight_g: 200.0,
    },
    Preset {
        name: "Perch",
        length_cm: 30.0,
        weight_g: 350.0,
    },
    Preset {
        name: "Trout",
        length_cm: 32.0,
        weight_g: 400.0,
    },
    Preset {
        name: "Salmon",
        length_cm: 60.0,
        weight_g: 2000.0,
    },
    Preset {
        name: "Bream",
        length_cm: 28.0,
        weight_g: 500.0,
    },
];

/// Look up a preset by its display name.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

impl Preset {
    /// Short description shown under the selector.
    pub fn summary(&self) -> String {
        format!("{}: {:.1}cm, {:.1}g", self.name, self.length_cm, self.weight_g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_unique_presets() {
        let mut names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_find_preset() {
        let salmon = find_preset("Salmon").unwrap();
        assert_eq!(salmon.length_cm, 60.0);
        assert_eq!(salmon.weight_g, 2000.0);
        assert!(find_preset("Shark").is_none());
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(PRESETS[0].summary(), "Common Carp: 45.0cm, 1250.0g");
    }
}
