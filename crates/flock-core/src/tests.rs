//! Unit tests for flock-core primitives.

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    const EPS: f32 = 1e-4;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn length_and_distance() {
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < EPS);
        assert!((Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)) - 5.0).abs() < EPS);
        assert_eq!(Vec2::ZERO.length(), 0.0);
    }

    #[test]
    fn normalize_to_hits_target_length() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-0.01, 0.02),
            Vec2::new(1000.0, -2000.0),
        ] {
            for target in [1.0, 5.0, 0.5] {
                let n = v.normalize_to(target);
                assert!(
                    (n.length() - target).abs() < EPS,
                    "normalize_to({target}) of {v} gave length {}",
                    n.length()
                );
            }
        }
    }

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(Vec2::ZERO.normalize_to(5.0), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn divide_by_zero_is_zero() {
        assert_eq!(Vec2::new(1.0, 2.0) / 0.0, Vec2::ZERO);
    }
}

#[cfg(test)]
mod ids {
    use crate::{PredatorId, PreyId};

    #[test]
    fn index_roundtrip() {
        let id = PreyId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PreyId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PreyId::INVALID.0, u32::MAX);
        assert_eq!(PredatorId::INVALID.0, u32::MAX);
        assert_eq!(PreyId::default(), PreyId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PreyId(7).to_string(), "PreyId(7)");
        assert_eq!(PredatorId(0).to_string(), "PredatorId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod config {
    use crate::{EdgePolicy, PreyRules, SimConfig, SpeciesConfig, WorldConfig};

    #[test]
    fn default_config_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_populations_are_valid() {
        let cfg = SimConfig {
            prey_count: 0,
            predator_count: 0,
            ..SimConfig::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_non_positive_world() {
        for world in [
            WorldConfig { width: 0.0, ..WorldConfig::default() },
            WorldConfig { height: -5.0, ..WorldConfig::default() },
            WorldConfig { cell_size: 0.0, ..WorldConfig::default() },
            WorldConfig { width: f32::NAN, ..WorldConfig::default() },
        ] {
            let cfg = SimConfig { world, ..SimConfig::default() };
            assert!(cfg.validate().is_err(), "accepted {world:?}");
        }
    }

    #[test]
    fn rejects_degenerate_species() {
        let bad = SpeciesConfig { mass: 0.0, ..SpeciesConfig::prey() };
        let cfg = SimConfig { prey: bad, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_rules_and_edge() {
        let cfg = SimConfig {
            rules: PreyRules { flee_radius: -1.0, ..PreyRules::default() },
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = SimConfig {
            edge: EdgePolicy::Repel { margin: 0.0, magnitude: 1.0 },
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn stock_predator_outpaces_prey() {
        let prey = SpeciesConfig::prey();
        let predator = SpeciesConfig::predator();
        assert!(predator.max_speed > prey.max_speed);
        assert!(predator.radius > prey.radius);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(7);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b);
    }
}
