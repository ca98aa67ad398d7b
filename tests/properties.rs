use std::collections::HashSet;

use burrow::{
    generate, shortest_path, Coord2, CountRange, Dungeon, DungeonError, GenerationConfig, Room,
    Side, Transform,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn check_dungeon(dungeon: &Dungeon) {
    let rooms = dungeon.rooms();
    for room in rooms {
        assert!(!room.has_holes());
        for block in room.blocks() {
            for side in Side::ALL {
                let neighbour = block.position() + side.offset();
                assert_eq!(block.border(side).internal, room.contains(neighbour));
            }
        }
        assert!(room.doors().all(|(_, b)| b.is_external()));
    }

    for (i, a) in rooms.iter().enumerate() {
        let padding = a.padding();
        for b in &rooms[i + 1..] {
            assert!(b.cells().all(|c| !padding.contains(&c)));
        }
    }

    let mut endpoints = HashSet::new();
    for corridor in dungeon.corridors() {
        let start = dungeon.door(corridor.start).unwrap();
        let stop = dungeon.door(corridor.stop).unwrap();
        assert!(start.is_door && start.used);
        assert!(stop.is_door && stop.used);
        assert!(corridor.start.room < corridor.stop.room);
        assert!(endpoints.insert(corridor.start));
        assert!(endpoints.insert(corridor.stop));

        assert_eq!(corridor.path.first().copied(), Some(start.outside()));
        assert_eq!(corridor.path.last().copied(), Some(stop.outside()));
        assert_eq!(corridor.cost as usize, corridor.path.len() - 1);
        for pair in corridor.path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
        // Cells were free when carved and no later room covers them.
        assert!(corridor.path.iter().all(|&c| !dungeon.is_occupied(c)));
    }
    assert_eq!(dungeon.corridors().len(), rooms.len().saturating_sub(1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_dungeons_hold_invariants(
        seed in any::<u64>(),
        min_blocks in 1u32..7,
        extra_blocks in 0u32..4,
        doors in 1u32..5,
        rooms in 1u32..7,
    ) {
        let config = GenerationConfig {
            room_count: rooms,
            blocks: CountRange::new(min_blocks, min_blocks + extra_blocks),
            doors: CountRange::new(doors, doors + 1),
            max_intersection_radius: 10,
            max_hole_retries: 1000,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match generate(&config, &mut rng) {
            Ok(dungeon) => {
                prop_assert_eq!(dungeon.rooms().len(), rooms as usize);
                check_dungeon(&dungeon);
            }
            Err(failure) => {
                prop_assert!(
                    matches!(failure.error, DungeonError::CannotPlace { .. }),
                    "unexpected error: {}",
                    failure.error
                );
                check_dungeon(&failure.partial);
            }
        }
    }

    #[test]
    fn door_count_is_clamped(seed in any::<u64>(), blocks in 1u32..10, requested in 0u32..30) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut room = Room::grow(blocks, &mut rng).unwrap();
        let external = room.external_borders().count() as u32;
        let placed = room.place_doors(requested, &mut rng);
        prop_assert_eq!(placed, requested.min(external));
        prop_assert_eq!(room.doors().count() as u32, placed);
    }

    #[test]
    fn four_quarter_turns_are_identity(seed in any::<u64>(), blocks in 1u32..12, dx in -20i32..20, dy in -20i32..20) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut room = Room::grow(blocks, &mut rng).unwrap();
        room.place_doors(3, &mut rng);
        let moved = room.transformed(&Transform::new(0, Coord2::new(dx, dy)));
        let mut turned = moved.clone();
        for _ in 0..4 {
            turned = turned.transformed(&Transform::rotation(1));
        }
        prop_assert_eq!(turned.blocks(), moved.blocks());
    }

    #[test]
    fn path_cost_respects_cap(
        walls in proptest::collection::hash_set((-4i32..5, -4i32..5), 0..30),
        gx in -4i32..5,
        gy in -4i32..5,
        cap in 0u32..14,
    ) {
        let start = Coord2::new(0, 0);
        let goal = Coord2::new(gx, gy);
        let blocked = |c: Coord2| {
            c != start && c != goal && walls.contains(&(c.x, c.y))
        };
        let unbounded = shortest_path(start, goal, 200, blocked);
        match shortest_path(start, goal, cap, blocked) {
            Some(found) => {
                prop_assert!(found.cost < cap);
                prop_assert_eq!(Some(found.cost), unbounded.map(|r| r.cost));
            }
            None => {
                prop_assert!(unbounded.map_or(true, |r| r.cost >= cap));
            }
        }
    }
}
