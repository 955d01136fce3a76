use dungeon_core::{
    Direction, FillCheck, GenerationParameters, GridConfig, GridError, audit, generate_grid,
};

fn default_grid(seed: u64) -> dungeon_core::Grid {
    generate_grid(GridConfig::default(), seed).expect("default parameters converge")
}

#[test]
fn test_smoke_default_grid_meets_fill_threshold() {
    for seed in 0..200 {
        let grid = default_grid(seed);
        assert_eq!((grid.width(), grid.height()), (6, 7));
        assert!(grid.filled_fraction() >= 0.3, "seed {seed} filled {}", grid.filled_fraction());
        assert!(audit(&grid, 3).is_empty(), "seed {seed}: {:?}", audit(&grid, 3));
    }
}

#[test]
fn test_smoke_default_grid_has_three_distinct_bosses() {
    let grid = default_grid(42);
    let bosses = grid.boss_cells();
    let ids: Vec<u32> = bosses.iter().map(|(id, _)| id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_ne!(bosses[0].1, bosses[1].1);
    assert_ne!(bosses[1].1, bosses[2].1);
    assert_ne!(bosses[0].1, bosses[2].1);
}

#[test]
fn test_smoke_lookup_outside_grid_is_out_of_bounds() {
    let grid = default_grid(7);
    let (width, height) = (grid.width() as i32, grid.height() as i32);
    for (x, y) in [(-1, 0), (width, 0), (0, -1), (0, height)] {
        assert!(
            matches!(grid.cell(x, y), Err(GridError::OutOfBounds { .. })),
            "({x}, {y}) should be out of bounds"
        );
    }
}

#[test]
fn test_smoke_single_cell_without_bosses_is_fully_walled() {
    let params = GenerationParameters { boss_count: 0, ..GenerationParameters::default() };
    let grid = generate_grid(GridConfig::new(1, 1, params), 3).expect("1x1 grid terminates");
    let walls = grid.cell(0, 0).expect("single cell").walls();
    for dir in Direction::ALL {
        assert!(walls.get(dir), "{dir:?} wall missing");
    }
}

#[test]
fn test_smoke_boss_count_equal_to_cell_count_fills_every_cell() {
    let params = GenerationParameters { boss_count: 12, ..GenerationParameters::default() };
    let grid = generate_grid(GridConfig::new(4, 3, params), 11).expect("all-boss grid");
    assert_eq!(grid.attempts(), 1);
    assert_eq!(grid.filled_fraction(), 1.0);
    for (_, cell) in grid.iter() {
        assert!(cell.boss().is_some());
        assert!(!cell.is_empty());
    }
    assert!(audit(&grid, 12).is_empty());
}

#[test]
fn test_smoke_zero_threshold_accepts_first_attempt() {
    let params = GenerationParameters {
        minimum_fill_fraction: 0.0,
        trap_chance: 0,
        gem_chance: 0,
        treasure_chance: 0,
        monster_chance: 0,
        boss_count: 0,
        ..GenerationParameters::default()
    };
    let grid = generate_grid(GridConfig::new(6, 7, params).with_max_attempts(1), 8)
        .expect("zero threshold always passes");
    assert_eq!(grid.attempts(), 1);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_smoke_unreachable_threshold_surfaces_exhaustion() {
    let params = GenerationParameters {
        minimum_fill_fraction: 1.0,
        trap_chance: 0,
        gem_chance: 0,
        treasure_chance: 0,
        monster_chance: 0,
        boss_count: 1,
        ..GenerationParameters::default()
    };
    let config = GridConfig::new(6, 7, params).with_max_attempts(10);
    match generate_grid(config.clone(), 1) {
        Err(GridError::GenerationExhausted { attempts, best_fill_fraction }) => {
            assert_eq!(attempts, 10);
            assert!((best_fill_fraction - 1.0 / 42.0).abs() < 1e-9);
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }

    let unchecked = config.with_fill_check(FillCheck::Disabled);
    assert!(generate_grid(unchecked, 1).is_ok(), "opting out of the check accepts anything");
}

#[test]
fn test_smoke_invalid_configurations_fail_fast() {
    let too_many = GenerationParameters { boss_count: 43, ..GenerationParameters::default() };
    let bad_percent = GenerationParameters { gem_chance: 150, ..GenerationParameters::default() };
    let bad_fill = GenerationParameters { minimum_fill_fraction: 2.0, ..GenerationParameters::default() };

    for config in [
        GridConfig::new(6, 7, too_many),
        GridConfig::new(6, 7, bad_percent),
        GridConfig::new(6, 7, bad_fill),
        GridConfig::new(0, 7, GenerationParameters::default()),
        GridConfig::default().with_max_attempts(0),
    ] {
        assert!(
            matches!(generate_grid(config.clone(), 0), Err(GridError::InvalidConfiguration(_))),
            "{config:?} should be rejected"
        );
    }
}

#[test]
fn test_smoke_debug_dump_has_one_line_per_row() {
    let grid = default_grid(21);
    let dump = grid.to_string();
    assert_eq!(dump.lines().count(), grid.height());
    assert!(dump.contains("B1") && dump.contains("B2") && dump.contains("B3"), "{dump}");
}

#[test]
fn test_smoke_grid_serializes_to_json() {
    let grid = default_grid(64);
    let json = serde_json::to_value(&grid).expect("grid serializes");
    assert_eq!(json["width"], 6);
    assert_eq!(json["height"], 7);
    assert_eq!(json["cells"].as_array().map(Vec::len), Some(42));
}

#[test]
fn test_smoke_partial_toml_overrides_only_named_fields() {
    let config: GridConfig = toml::from_str(
        r#"
        width = 10
        fill_check = "disabled"

        [params]
        gem_chance = 15
        boss_count = 5
        "#,
    )
    .expect("config parses");

    assert_eq!(config.width, 10);
    assert_eq!(config.height, 7);
    assert_eq!(config.fill_check, FillCheck::Disabled);
    assert_eq!(config.params.gem_chance, 15);
    assert_eq!(config.params.boss_count, 5);
    assert_eq!(config.params.wall_chance, 25);
    assert!(config.validate().is_ok());
}
