//! Unit tests for tn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, RoomId, TileId};

    #[test]
    fn index_roundtrip() {
        let id = TileId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TileId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(TileId::INVALID.0, u32::MAX);
        assert_eq!(RoomId::INVALID.0, u16::MAX);
        assert!(!TileId::default().is_valid());
        assert!(TileId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "agent#7");
        assert_eq!(RoomId(3).to_string(), "room#3");
        assert_eq!(TileId::INVALID.to_string(), "tile#invalid");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn distance_pythagorean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn step_toward_partial() {
        let p = Point::new(0.0, 0.0).step_toward(Point::new(10.0, 0.0), 2.5);
        assert!((p.x - 2.5).abs() < 1e-6);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn step_toward_never_overshoots() {
        let target = Point::new(1.0, 1.0);
        let p = Point::new(0.9, 1.0).step_toward(target, 5.0);
        assert_eq!(p, target);
    }

    #[test]
    fn step_toward_zero_step_stays() {
        let start = Point::new(2.0, 2.0);
        assert_eq!(start.step_toward(Point::new(5.0, 5.0), 0.0), start);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick::ZERO.to_string(), "T0");
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.25);
        assert_eq!(clock.ticks_for_secs(1.0), 4);
        assert_eq!(clock.ticks_for_secs(1.1), 5);
    }
}

#[cfg(test)]
mod config {
    use crate::{NavConfig, SimConfig, Tick};

    #[test]
    fn defaults_are_valid() {
        assert!(NavConfig::default().validate().is_ok());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn default_radii() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.close_radius, 0.3);
        assert_eq!(cfg.tight_radius, 0.1);
        assert_eq!(cfg.max_search_iterations, 25_000);
    }

    #[test]
    fn speed_out_of_range_rejected() {
        let cfg = NavConfig { speed: 25.0, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = NavConfig { speed: 0.0, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_radii_rejected() {
        let cfg = NavConfig { close_radius: 0.05, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_budget_rejected() {
        let cfg = NavConfig { max_search_iterations: 0, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_tick_rejected() {
        let cfg = SimConfig { tick_duration_secs: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn end_tick() {
        let cfg = SimConfig { total_ticks: 120, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(120));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng, TileId};

    #[test]
    fn same_seed_same_stream() {
        let mut r1 = AgentRng::new(12345, AgentId(3));
        let mut r2 = AgentRng::new(12345, AgentId(3));
        for _ in 0..100 {
            assert_eq!(r1.tile(1_000), r2.tile(1_000));
        }
    }

    #[test]
    fn neighbouring_agents_diverge() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<_> = (0..8).map(|_| r0.tile(1 << 20)).collect();
        let b: Vec<_> = (0..8).map(|_| r1.tile(1 << 20)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn chance_extremes() {
        let mut rng = AgentRng::new(9, AgentId(0));
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(!rng.chance(f64::NAN));
            assert!(rng.chance(1.0));
            assert!(rng.chance(3.0));
        }
    }

    #[test]
    fn tile_in_range_and_none_when_empty() {
        let mut rng = SimRng::new(7);
        assert_eq!(rng.tile(0), None);
        for _ in 0..1000 {
            let t = rng.tile(10).unwrap();
            assert!(t < TileId(10));
        }
        assert_eq!(rng.tile(1), Some(TileId(0)));
    }

    #[test]
    fn pick_from_slice() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u32; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng.pick(&[9]), Some(&9));
    }
}
