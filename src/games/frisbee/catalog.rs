//! Frisbee Clicker generator catalog.
//!
//! The catalog is static: every generator's name, base cost, rate and
//! description is fixed at compile time. Mutable per-generator data
//! (`owned`, `cost`) lives in [`super::state::GeneratorState`].

use serde::Serialize;

/// Price multiplier applied per owned unit.
pub const COST_GROWTH: f64 = 1.15;

/// Kinds of passive generators, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GeneratorKind {
    PieTinConverter,
    ArtisanFrisbeeStore,
    UltimateFrisbeeTeam,
    DiscGolfFactory,
    UltimateTournament,
}

impl GeneratorKind {
    /// All generator kinds in display order.
    pub fn all() -> &'static [GeneratorKind] {
        &[
            GeneratorKind::PieTinConverter,
            GeneratorKind::ArtisanFrisbeeStore,
            GeneratorKind::UltimateFrisbeeTeam,
            GeneratorKind::DiscGolfFactory,
            GeneratorKind::UltimateTournament,
        ]
    }

    /// Position in [`GeneratorKind::all`] and in the state table.
    pub fn index(&self) -> usize {
        match self {
            GeneratorKind::PieTinConverter => 0,
            GeneratorKind::ArtisanFrisbeeStore => 1,
            GeneratorKind::UltimateFrisbeeTeam => 2,
            GeneratorKind::DiscGolfFactory => 3,
            GeneratorKind::UltimateTournament => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<GeneratorKind> {
        Self::all().get(index).copied()
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::PieTinConverter => "Pie Tin Converter",
            GeneratorKind::ArtisanFrisbeeStore => "Artisan Frisbee Store",
            GeneratorKind::UltimateFrisbeeTeam => "Ultimate Frisbee Team",
            GeneratorKind::DiscGolfFactory => "Disc Golf Factory",
            GeneratorKind::UltimateTournament => "Ultimate Tournament",
        }
    }

    /// Price of the first unit.
    pub fn base_cost(&self) -> u64 {
        match self {
            GeneratorKind::PieTinConverter => 50,
            GeneratorKind::ArtisanFrisbeeStore => 150,
            GeneratorKind::UltimateFrisbeeTeam => 300,
            GeneratorKind::DiscGolfFactory => 1_000,
            GeneratorKind::UltimateTournament => 5_000,
        }
    }

    /// Frisbees produced per owned unit per production tick.
    pub fn rate(&self) -> u64 {
        match self {
            GeneratorKind::PieTinConverter => 1,
            GeneratorKind::ArtisanFrisbeeStore => 3,
            GeneratorKind::UltimateFrisbeeTeam => 5,
            GeneratorKind::DiscGolfFactory => 10,
            GeneratorKind::UltimateTournament => 50,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GeneratorKind::PieTinConverter => {
                "Make frisbees the old fashioned way. Pie tin and some elbow grease."
            }
            GeneratorKind::ArtisanFrisbeeStore => {
                "A small boutique store selling hand-crafted frisbees."
            }
            GeneratorKind::UltimateFrisbeeTeam => {
                "A local ultimate frisbee team that donates a portion of their earnings to frisbee production."
            }
            GeneratorKind::DiscGolfFactory => "A factory supplying the booming disc golf industry.",
            GeneratorKind::UltimateTournament => {
                "Host an epic Ultimate Frisbee Tournament for all of your teams."
            }
        }
    }

    /// Key to buy (1-5 mapped to generator index).
    pub fn key(&self) -> char {
        match self {
            GeneratorKind::PieTinConverter => '1',
            GeneratorKind::ArtisanFrisbeeStore => '2',
            GeneratorKind::UltimateFrisbeeTeam => '3',
            GeneratorKind::DiscGolfFactory => '4',
            GeneratorKind::UltimateTournament => '5',
        }
    }

    pub fn from_key(key: char) -> Option<GeneratorKind> {
        Self::all().iter().copied().find(|k| k.key() == key)
    }

    /// Price of the next unit when `owned` units are already held:
    /// `floor(base_cost * 1.15^owned)`.
    pub fn cost_at(&self, owned: u32) -> u64 {
        (self.base_cost() as f64 * COST_GROWTH.powf(owned as f64)).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_generators_in_order() {
        let all = GeneratorKind::all();
        assert_eq!(all.len(), 5);
        for (i, kind) in all.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(GeneratorKind::from_index(i), Some(*kind));
        }
        assert_eq!(GeneratorKind::from_index(5), None);
    }

    #[test]
    fn names_are_unique() {
        let all = GeneratorKind::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn keys_round_trip() {
        for kind in GeneratorKind::all() {
            assert_eq!(GeneratorKind::from_key(kind.key()), Some(*kind));
        }
        assert_eq!(GeneratorKind::from_key('6'), None);
        assert_eq!(GeneratorKind::from_key('c'), None);
    }

    #[test]
    fn cost_at_zero_is_base_cost() {
        for kind in GeneratorKind::all() {
            assert_eq!(kind.cost_at(0), kind.base_cost());
        }
    }

    #[test]
    fn cost_at_one_is_floored() {
        // Half-unit prices round down
        assert_eq!(GeneratorKind::PieTinConverter.cost_at(1), 57);
        assert_eq!(GeneratorKind::ArtisanFrisbeeStore.cost_at(1), 172);
        assert_eq!(GeneratorKind::DiscGolfFactory.cost_at(1), 1_150);
    }

    #[test]
    fn cost_at_ten_matches_formula() {
        let expected = (1000.0 * 1.15_f64.powf(10.0)).floor() as u64;
        assert_eq!(GeneratorKind::DiscGolfFactory.cost_at(10), expected);
        assert_eq!(expected, 4_045);
    }

    #[test]
    fn cost_at_large_owned_uses_direct_exponent() {
        // Repeated multiplication drifts one unit low here
        assert_eq!(GeneratorKind::UltimateTournament.cost_at(146), 3_637_932_996_533);
    }

    #[test]
    fn cost_at_matches_formula_for_long_runs() {
        for kind in GeneratorKind::all() {
            for owned in 0..300u32 {
                let expected = (kind.base_cost() as f64 * 1.15_f64.powf(owned as f64)).floor() as u64;
                assert_eq!(kind.cost_at(owned), expected, "{:?} owned={}", kind, owned);
            }
        }
    }
}
