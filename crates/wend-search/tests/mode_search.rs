//! Minimum-cost search over a mode-augmented state space.
//!
//! The classic shape: a traveller crosses terrain where each cell
//! admits only certain equipment, moving costs 1 and re-equipping
//! costs 7. The search state is (position, equipment), exercising the
//! priority search with a non-trivial auxiliary mode.

use smallvec::SmallVec;
use wend_core::{Bounds, Point};
use wend_grid::DenseGrid;
use wend_search::{min_cost, SearchLimits};

const MOVE_COST: u64 = 1;
const SWITCH_COST: u64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Terrain {
    Rocky,
    Wet,
    Narrow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Gear {
    Torch,
    Rope,
    Nothing,
}

fn allowed(terrain: Terrain, gear: Gear) -> bool {
    match terrain {
        Terrain::Rocky => gear != Gear::Nothing,
        Terrain::Wet => gear != Gear::Torch,
        Terrain::Narrow => gear != Gear::Rope,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Traveller {
    position: Point,
    gear: Gear,
}

fn expand(cave: &DenseGrid<Terrain>) -> impl Fn(&Traveller) -> SmallVec<[(Traveller, u64); 8]> + '_ {
    |t| {
        let mut out: SmallVec<[(Traveller, u64); 8]> = SmallVec::new();
        // Re-equip in place to anything the current cell admits.
        if let Ok(&here) = cave.get(t.position) {
            for gear in [Gear::Torch, Gear::Rope, Gear::Nothing] {
                if gear != t.gear && allowed(here, gear) {
                    out.push((
                        Traveller {
                            position: t.position,
                            gear,
                        },
                        SWITCH_COST,
                    ));
                }
            }
        }
        // Step to any adjacent cell the current gear admits.
        for n in t.position.orthogonal() {
            if let Ok(&there) = cave.get(n) {
                if allowed(there, t.gear) {
                    out.push((
                        Traveller {
                            position: n,
                            gear: t.gear,
                        },
                        MOVE_COST,
                    ));
                }
            }
        }
        out
    }
}

/// Admissible: Manhattan travel plus one re-equip if the goal demands
/// the torch and we are not carrying it.
fn heuristic(goal: Point) -> impl Fn(&Traveller) -> u64 {
    move |t| {
        let travel = t.position.manhattan(goal);
        let switch = if t.gear == Gear::Torch { 0 } else { SWITCH_COST };
        travel + switch
    }
}

fn cave_from_rows(rows: &[&str]) -> DenseGrid<Terrain> {
    let bounds = Bounds::sized(rows[0].len() as u32, rows.len() as u32);
    let mut cave = DenseGrid::new(bounds, Terrain::Rocky).unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.bytes().enumerate() {
            let terrain = match c {
                b'r' => Terrain::Rocky,
                b'w' => Terrain::Wet,
                b'n' => Terrain::Narrow,
                _ => unreachable!("bad terrain char"),
            };
            cave.set(Point::new(x as i64, y as i64), terrain).unwrap();
        }
    }
    cave
}

fn solve(cave: &DenseGrid<Terrain>, goal: Point, guided: bool) -> u64 {
    let start = Traveller {
        position: Point::ORIGIN,
        gear: Gear::Torch,
    };
    let is_goal = |t: &Traveller| t.position == goal && t.gear == Gear::Torch;
    let h = heuristic(goal);
    min_cost(
        start,
        is_goal,
        expand(cave),
        move |t| if guided { h(t) } else { 0 },
        SearchLimits::UNBOUNDED,
    )
    .unwrap()
}

#[test]
fn corridor_with_forced_reequip() {
    // rocky, wet, rocky in a single row. Crossing the wet cell needs
    // the rope (7), and the goal demands the torch back (7):
    // 7 + 1 + 1 + 7 = 16.
    let cave = cave_from_rows(&["rwr"]);
    assert_eq!(solve(&cave, Point::new(2, 0), false), 16);
}

#[test]
fn detour_beats_reequipping() {
    // The direct row crosses wet ground (7 to re-equip, 7 to switch
    // back, plus 2 moves = 16); the rocky detour through the second
    // row costs 4 moves. The search must take the detour.
    let cave = cave_from_rows(&[
        "rwr", //
        "rrr",
    ]);
    assert_eq!(solve(&cave, Point::new(2, 0), false), 4);
}

#[test]
fn narrow_ground_allows_torch_through() {
    // Narrow ground admits the torch, so no re-equip is ever needed.
    let cave = cave_from_rows(&["rnnnr"]);
    assert_eq!(solve(&cave, Point::new(4, 0), false), 4);
}

#[test]
fn guided_and_unguided_agree() {
    let cave = cave_from_rows(&[
        "rwrnr", //
        "rnwwr", //
        "rrrwr", //
        "nnrwr", //
        "rwrrr",
    ]);
    for goal in [Point::new(4, 4), Point::new(0, 4), Point::new(4, 0)] {
        assert_eq!(
            solve(&cave, goal, true),
            solve(&cave, goal, false),
            "heuristic changed the answer for goal {goal}"
        );
    }
}
