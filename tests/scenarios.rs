use burrow::{
    dungeon_geometry, BorderId, Coord2, CountRange, Dungeon, DungeonError, GenerationConfig, Room,
    Side,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn three_block_config(radius: u32) -> GenerationConfig {
    GenerationConfig {
        room_count: 2,
        blocks: CountRange::exactly(3),
        doors: CountRange::exactly(4),
        max_intersection_radius: radius,
        max_hole_retries: 100,
    }
}

#[test]
fn first_expand_on_empty_dungeon() {
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    let mut dungeon = Dungeon::new();
    dungeon.expand(&three_block_config(4), &mut rng).unwrap();

    assert_eq!(dungeon.rooms().len(), 1);
    assert!(dungeon.corridors().is_empty());
    let room = &dungeon.rooms()[0];
    assert_eq!(room.len(), 3);
    let external = room.external_borders().count();
    assert_eq!(room.doors().count(), external.min(4));
}

#[test]
fn second_expand_adds_one_short_corridor() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut dungeon = Dungeon::new();
        let config = three_block_config(10);
        dungeon.expand(&config, &mut rng).unwrap();
        let doors_before = dungeon.unused_doors().count();
        dungeon.expand(&config, &mut rng).unwrap();

        assert_eq!(dungeon.corridors().len(), 1);
        let corridor = &dungeon.corridors()[0];
        assert!(corridor.cost <= config.max_intersection_radius);
        let start = dungeon.door(corridor.start).unwrap();
        let stop = dungeon.door(corridor.stop).unwrap();
        assert!(start.used && stop.used);
        // Manhattan distance between the door exteriors is the ring
        // distance, and the corridor never detours past it.
        assert_eq!(corridor.cost, start.outside().manhattan_distance(stop.outside()));
        assert_eq!(dungeon.unused_doors().count(), doors_before + 4 - 2);
        assert!(dungeon
            .unused_doors()
            .all(|(door, _)| door != corridor.start && door != corridor.stop));
    }
}

#[test]
fn boxed_in_door_is_fatal_and_keeps_partial_dungeon() {
    let mut cup = Room::from_cells(&[
        Coord2::new(0, 0),
        Coord2::new(1, 0),
        Coord2::new(2, 0),
        Coord2::new(0, 1),
        Coord2::new(2, 1),
        Coord2::new(0, 2),
        Coord2::new(2, 2),
    ])
    .unwrap();
    cup.set_door(BorderId::new(1, Side::Up)).unwrap();

    let mut dungeon = Dungeon::new();
    dungeon.place(cup, 1).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let config = GenerationConfig {
        room_count: 2,
        blocks: CountRange::new(1, 4),
        doors: CountRange::new(1, 4),
        max_intersection_radius: 1,
        max_hole_retries: 100,
    };
    assert_eq!(
        dungeon.expand(&config, &mut rng),
        Err(DungeonError::CannotPlace { room: 1, radius: 1 })
    );
    assert_eq!(dungeon.rooms().len(), 1);
    assert!(dungeon.corridors().is_empty());
    assert!(!dungeon.rooms()[0].doors().any(|(_, b)| b.used));
}

#[test]
fn geometry_outlines_close() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let dungeon = burrow::generate(&GenerationConfig::default(), &mut rng).unwrap();
    let geometry = dungeon_geometry(&dungeon);
    assert_eq!(geometry.rooms.len(), dungeon.rooms().len());
    for room in &geometry.rooms {
        let starts: std::collections::HashSet<_> = room.outline.iter().map(|s| s.start).collect();
        assert_eq!(starts.len(), room.outline.len());
        assert!(room.outline.iter().all(|s| starts.contains(&s.end)));
        assert!(room.doors.iter().all(|d| room.outline.contains(d)));
    }
    for (corridor, polyline) in dungeon.corridors().iter().zip(&geometry.corridors) {
        assert_eq!(polyline.points.len(), corridor.path.len() + 2);
    }
}
