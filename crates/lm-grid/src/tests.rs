//! Unit tests for lm-grid.
//!
//! All tests use hand-built grids; nothing is parsed from text.

#[cfg(test)]
mod helpers {
    use std::collections::{BTreeSet, VecDeque};

    use lm_core::GridPos;

    use crate::{Building, Grid, GridBuilder};

    /// Build a grid from ASCII rows: `#` obstacle, `.` empty.
    pub fn ascii_grid(rows: &[&str]) -> Grid {
        let mut b = GridBuilder::new(rows[0].len() as u32, rows.len() as u32).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    b.add_building(Building::obstacle(GridPos::new(x as u32, y as u32)))
                        .unwrap();
                }
            }
        }
        b.build()
    }

    /// Plain BFS over empty cells; the reference for shortest distances.
    pub fn bfs_distance(grid: &Grid, start: GridPos, goals: &BTreeSet<GridPos>) -> Option<u32> {
        if goals.contains(&start) {
            return Some(0);
        }
        let mut dist = vec![u32::MAX; grid.len()];
        let mut queue = VecDeque::new();
        dist[grid.index_of(start)?] = 0;
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            let d = dist[grid.index_of(p)?];
            for n in grid.neighbors_empty(p) {
                let i = grid.index_of(n)?;
                if dist[i] == u32::MAX {
                    dist[i] = d + 1;
                    if goals.contains(&n) {
                        return Some(d + 1);
                    }
                    queue.push_back(n);
                }
            }
        }
        None
    }
}

// ── Grid structure & occupancy ─────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use lm_core::{AgentId, Direction, GridPos, LmError};

    use super::helpers::ascii_grid;
    use crate::{Building, GridBuilder, GridError, Occupant};

    #[test]
    fn empty_dimensions_rejected() {
        assert_eq!(GridBuilder::new(0, 4).err(), Some(GridError::Empty));
    }

    #[test]
    fn buildings_block_cells() {
        let grid = ascii_grid(&["..#", "...", "#.."]);
        assert!(grid.is_occupied(GridPos::new(2, 0)));
        assert!(grid.is_occupied(GridPos::new(0, 2)));
        assert!(!grid.is_occupied(GridPos::new(1, 1)));
        let cell = grid.cell(GridPos::new(2, 0)).unwrap();
        assert!(cell.unreachable);
        assert!(matches!(cell.occupant, Occupant::Building(_)));
    }

    #[test]
    fn outside_is_occupied() {
        let grid = ascii_grid(&["..", ".."]);
        assert!(grid.is_occupied(GridPos::new(2, 0)));
        assert!(grid.cell(GridPos::new(0, 2)).is_none());
    }

    #[test]
    fn neighbor_order_is_left_right_up_down() {
        let grid = ascii_grid(&["...", "...", "..."]);
        let n: Vec<_> = grid.neighbors_all(GridPos::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![GridPos::new(0, 1), GridPos::new(2, 1), GridPos::new(1, 0), GridPos::new(1, 2)]
        );
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = ascii_grid(&["...", "...", "..."]);
        assert_eq!(grid.neighbors_all(GridPos::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbors_all(GridPos::new(2, 2)).count(), 2);
    }

    #[test]
    fn empty_neighbors_skip_buildings_and_agents() {
        let mut grid = ascii_grid(&[".#.", "...", "..."]);
        grid.set_occupant(GridPos::new(0, 1), Occupant::Agent(AgentId(3))).unwrap();
        let n: Vec<_> = grid.neighbors_empty(GridPos::new(1, 1)).collect();
        assert_eq!(n, vec![GridPos::new(2, 1), GridPos::new(1, 2)]);
        assert_eq!(grid.neighbors_all(GridPos::new(1, 1)).count(), 4);
    }

    #[test]
    fn clear_keeps_unreachable_flag() {
        let mut grid = ascii_grid(&["#."]);
        grid.clear(GridPos::new(0, 0)).unwrap();
        assert!(grid.occupant(GridPos::new(0, 0)).is_empty());
        assert!(grid.is_occupied(GridPos::new(0, 0)));
    }

    #[test]
    fn set_occupant_outside_fails() {
        let mut grid = ascii_grid(&[".."]);
        assert_eq!(
            grid.set_occupant(GridPos::new(5, 5), Occupant::Empty),
            Err(GridError::OutsideGrid(GridPos::new(5, 5)))
        );
    }

    #[test]
    fn move_direction_for_adjacent_only() {
        let grid = ascii_grid(&["...", "...", "..."]);
        let c = GridPos::new(1, 1);
        assert_eq!(grid.move_direction_for(c, GridPos::new(1, 0)), Ok(Direction::Up));
        assert!(matches!(
            grid.move_direction_for(c, c),
            Err(LmError::InvalidMove { .. })
        ));
        assert!(matches!(
            grid.move_direction_for(c, GridPos::new(2, 2)),
            Err(LmError::InvalidMove { .. })
        ));
        assert!(matches!(
            grid.move_direction_for(GridPos::new(0, 0), GridPos::new(2, 0)),
            Err(LmError::InvalidMove { .. })
        ));
    }

    #[test]
    fn cell_in_direction_bounds() {
        let grid = ascii_grid(&["..", ".."]);
        assert_eq!(
            grid.cell_in_direction(GridPos::new(0, 0), Direction::Right),
            Ok(GridPos::new(1, 0))
        );
        assert!(matches!(
            grid.cell_in_direction(GridPos::new(1, 0), Direction::Right),
            Err(LmError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.cell_in_direction(GridPos::new(0, 0), Direction::Up),
            Err(LmError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn homes_and_landmarks_registered() {
        let mut b = GridBuilder::new(4, 1).unwrap();
        b.add_building(Building::home('3', GridPos::new(0, 0))).unwrap();
        b.add_building(Building::landmark("Bank", 'B', 2, GridPos::new(3, 0))).unwrap();
        b.add_building(Building::obstacle(GridPos::new(2, 0))).unwrap();
        let grid = b.build();
        assert_eq!(grid.home('3'), Some(GridPos::new(0, 0)));
        assert_eq!(grid.home('4'), None);
        assert!(grid.has_landmark('B'));
        assert!(grid.has_landmark('3'));
        assert!(!grid.has_landmark('*'));
        assert_eq!(grid.building_at(GridPos::new(3, 0)).unwrap().name, "Bank");
    }

    #[test]
    fn duplicate_home_rejected() {
        let mut b = GridBuilder::new(3, 1).unwrap();
        b.add_building(Building::home('1', GridPos::new(0, 0))).unwrap();
        assert_eq!(
            b.add_building(Building::home('1', GridPos::new(2, 0))),
            Err(GridError::DuplicateHome('1'))
        );
    }

    #[test]
    fn double_build_in_same_cell_rejected() {
        let mut b = GridBuilder::new(2, 1).unwrap();
        b.add_building(Building::obstacle(GridPos::new(0, 0))).unwrap();
        assert!(matches!(
            b.add_building(Building::obstacle(GridPos::new(0, 0))),
            Err(GridError::AlreadyBuilt { .. })
        ));
    }

    #[test]
    fn blocked_cell_without_building() {
        let mut b = GridBuilder::new(2, 1).unwrap();
        b.block(GridPos::new(1, 0)).unwrap();
        let grid = b.build();
        assert!(grid.is_occupied(GridPos::new(1, 0)));
        assert!(grid.occupant(GridPos::new(1, 0)).is_empty());
    }
}

// ── A* navigation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use std::collections::BTreeSet;

    use lm_core::{AgentId, Direction, GridPos};

    use super::helpers::{ascii_grid, bfs_distance};
    use crate::{AstarNavigator, Navigator, Occupant, SearchOutcome};

    fn goals(cells: &[(u32, u32)]) -> BTreeSet<GridPos> {
        cells.iter().map(|&(x, y)| GridPos::new(x, y)).collect()
    }

    #[test]
    fn arrived_when_start_is_goal() {
        let grid = ascii_grid(&["...", "..."]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(1, 1), &goals(&[(0, 0), (1, 1)])).unwrap();
        assert_eq!(out, SearchOutcome::Arrived);
    }

    #[test]
    fn straight_line() {
        let grid = ascii_grid(&["....."]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(0, 0), &goals(&[(4, 0)])).unwrap();
        assert_eq!(
            out,
            SearchOutcome::Step { direction: Direction::Right, distance: 4, goal: GridPos::new(4, 0) }
        );
    }

    #[test]
    fn routes_around_wall() {
        // Direct path right is walled off; must go down and around.
        let grid = ascii_grid(&[
            ".#.",
            ".#.",
            "...",
        ]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(0, 0), &goals(&[(2, 0)])).unwrap();
        match out {
            SearchOutcome::Step { direction, distance, .. } => {
                assert_eq!(direction, Direction::Down);
                assert_eq!(distance, 6);
            }
            other => panic!("expected a step, got {other:?}"),
        }
    }

    #[test]
    fn nearest_goal_wins() {
        let grid = ascii_grid(&["......."]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(2, 0), &goals(&[(0, 0), (6, 0)])).unwrap();
        assert_eq!(
            out,
            SearchOutcome::Step { direction: Direction::Left, distance: 2, goal: GridPos::new(0, 0) }
        );
    }

    #[test]
    fn tie_goes_to_first_goal_in_set_order() {
        let grid = ascii_grid(&["....."]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(2, 0), &goals(&[(0, 0), (4, 0)])).unwrap();
        assert!(matches!(out, SearchOutcome::Step { goal, .. } if goal == GridPos::new(0, 0)));
    }

    #[test]
    fn unreachable_goal_skipped() {
        // (4,0) is sealed off; (0,2) is reachable but farther.
        let grid = ascii_grid(&[
            "...#.",
            "...#.",
            "...##",
        ]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(2, 0), &goals(&[(4, 0), (0, 2)])).unwrap();
        assert!(matches!(out, SearchOutcome::Step { goal, distance: 4, .. } if goal == GridPos::new(0, 2)));
    }

    #[test]
    fn no_path_when_goal_sealed() {
        let grid = ascii_grid(&[
            "..#.",
            "..#.",
            "..#.",
        ]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(0, 0), &goals(&[(3, 1)])).unwrap();
        assert_eq!(out, SearchOutcome::NoPath);
    }

    #[test]
    fn occupied_goal_is_unreachable() {
        let mut grid = ascii_grid(&["...."]);
        grid.set_occupant(GridPos::new(3, 0), Occupant::Agent(AgentId(1))).unwrap();
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(0, 0), &goals(&[(3, 0)])).unwrap();
        assert_eq!(out, SearchOutcome::NoPath);
    }

    #[test]
    fn empty_goal_set_is_no_path() {
        let grid = ascii_grid(&[".."]);
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(0, 0), &BTreeSet::new()).unwrap();
        assert_eq!(out, SearchOutcome::NoPath);
    }

    #[test]
    fn start_may_be_occupied() {
        let mut grid = ascii_grid(&["..."]);
        grid.set_occupant(GridPos::new(0, 0), Occupant::Agent(AgentId(0))).unwrap();
        let mut nav = AstarNavigator::new();
        let out = nav.next_move(&grid, GridPos::new(0, 0), &goals(&[(2, 0)])).unwrap();
        assert!(matches!(out, SearchOutcome::Step { direction: Direction::Right, distance: 2, .. }));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let grid = ascii_grid(&[
            "......",
            ".##.#.",
            "......",
            ".#.##.",
        ]);
        let g = goals(&[(5, 3), (2, 3)]);
        let mut nav = AstarNavigator::new();
        let first = nav.next_move(&grid, GridPos::new(0, 0), &g).unwrap();
        let second = nav.next_move(&grid, GridPos::new(0, 0), &g).unwrap();
        assert_eq!(first, second);

        // A fresh navigator agrees with the pooled one.
        let third = AstarNavigator::new().next_move(&grid, GridPos::new(0, 0), &g).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn matches_bfs_on_maze() {
        let grid = ascii_grid(&[
            "..........",
            ".########.",
            ".#......#.",
            ".#.####.#.",
            ".#.#..#.#.",
            ".#.#.##.#.",
            ".#.#....#.",
            ".#.######.",
            ".#........",
            ".#########",
        ]);
        let g = goals(&[(4, 4)]);
        let start = GridPos::new(0, 9);
        let expected = bfs_distance(&grid, start, &g).unwrap();
        let mut nav = AstarNavigator::new();
        match nav.next_move(&grid, start, &g).unwrap() {
            SearchOutcome::Step { direction, distance, .. } => {
                assert_eq!(distance, expected);
                assert_eq!(direction, Direction::Up);
            }
            other => panic!("expected a step, got {other:?}"),
        }
    }
}

// ── Property tests: A* vs BFS ──────────────────────────────────────────────────

#[cfg(test)]
mod search_props {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use lm_core::GridPos;

    use super::helpers::bfs_distance;
    use crate::{AstarNavigator, Building, Grid, GridBuilder, Navigator, SearchOutcome};

    const W: u32 = 8;
    const H: u32 = 7;

    fn build(blocked: &[bool], keep_free: &[GridPos]) -> Grid {
        let mut b = GridBuilder::new(W, H).unwrap();
        for (i, &wall) in blocked.iter().enumerate() {
            let pos = GridPos::new(i as u32 % W, i as u32 / W);
            if wall && !keep_free.contains(&pos) {
                b.add_building(Building::obstacle(pos)).unwrap();
            }
        }
        b.build()
    }

    fn pos() -> impl Strategy<Value = GridPos> {
        (0..W, 0..H).prop_map(|(x, y)| GridPos::new(x, y))
    }

    proptest! {
        #[test]
        fn first_step_lies_on_a_shortest_path(
            blocked in proptest::collection::vec(proptest::bool::weighted(0.3), (W * H) as usize),
            start in pos(),
            goal_list in proptest::collection::vec(pos(), 1..4),
        ) {
            let mut keep = goal_list.clone();
            keep.push(start);
            let grid = build(&blocked, &keep);
            let goals: BTreeSet<GridPos> = goal_list.into_iter().collect();

            let mut nav = AstarNavigator::new();
            let outcome = nav.next_move(&grid, start, &goals).unwrap();
            let expected = bfs_distance(&grid, start, &goals);

            match outcome {
                SearchOutcome::Arrived => prop_assert!(goals.contains(&start)),
                SearchOutcome::NoPath => prop_assert_eq!(expected, None),
                SearchOutcome::Step { direction, distance, goal } => {
                    prop_assert_eq!(Some(distance), expected);
                    prop_assert!(goals.contains(&goal));
                    // The step leads to an empty cell exactly one closer.
                    let next = grid.cell_in_direction(start, direction).unwrap();
                    prop_assert!(!grid.is_occupied(next));
                    prop_assert_eq!(bfs_distance(&grid, next, &goals), Some(distance - 1));
                }
            }
        }
    }
}
