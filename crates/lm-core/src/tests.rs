//! Unit tests for lm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BuildingId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(BuildingId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::{Direction, GridPos};

    #[test]
    fn manhattan_is_symmetric() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 5);
        assert_eq!(a.manhattan(b), 8);
        assert_eq!(b.manhattan(a), 8);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn step_below_zero_is_none() {
        let origin = GridPos::new(0, 0);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Right), Some(GridPos::new(1, 0)));
        assert_eq!(origin.step(Direction::Down), Some(GridPos::new(0, 1)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![GridPos::new(2, 0), GridPos::new(0, 1), GridPos::new(1, 0)];
        v.sort();
        assert_eq!(v, vec![GridPos::new(1, 0), GridPos::new(2, 0), GridPos::new(0, 1)]);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, GridPos, LmError};

    #[test]
    fn between_each_axis() {
        let c = GridPos::new(5, 5);
        assert_eq!(Direction::between(c, GridPos::new(6, 5)).unwrap(), Direction::Right);
        assert_eq!(Direction::between(c, GridPos::new(4, 5)).unwrap(), Direction::Left);
        assert_eq!(Direction::between(c, GridPos::new(5, 6)).unwrap(), Direction::Down);
        assert_eq!(Direction::between(c, GridPos::new(5, 4)).unwrap(), Direction::Up);
    }

    #[test]
    fn zero_length_move_fails() {
        let c = GridPos::new(1, 1);
        assert_eq!(
            Direction::between(c, c),
            Err(LmError::InvalidMove { from: c, to: c })
        );
    }

    #[test]
    fn diagonal_move_fails() {
        let err = Direction::between(GridPos::new(1, 1), GridPos::new(2, 2)).unwrap_err();
        assert!(matches!(err, LmError::InvalidMove { .. }));
    }

    #[test]
    fn step_then_between_agree() {
        let c = GridPos::new(3, 3);
        for d in Direction::ALL {
            let n = c.step(d).unwrap();
            assert_eq!(Direction::between(c, n).unwrap(), d);
            assert_eq!(Direction::between(n, c).unwrap(), d.opposite());
        }
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<u64> = (0..8).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}

#[cfg(test)]
mod config {
    use crate::{SimConfig, Tick};

    #[test]
    fn defaults() {
        let cfg = SimConfig::new(7, 500);
        assert_eq!(cfg.trapped_move_limit, 20);
        assert_eq!(cfg.end_tick(), Tick(500));
        assert_eq!(Tick(4).next(), Tick(5));
    }
}
