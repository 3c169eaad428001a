use gridlife::diagnostics::analyze_population;
use gridlife::{ItemKind, Phase, SimConfig, World};

fn classic(seed: u64) -> SimConfig {
    SimConfig {
        seed: Some(seed),
        ..SimConfig::default()
    }
}

#[test]
fn test_fifty_generations_of_one_hundred() {
    let mut world = World::new(classic(2024)).unwrap();
    let run = world.run().unwrap();

    assert_eq!(run.generations.len(), 50);
    assert!(world.is_finished());
    for (i, summary) in run.generations.iter().enumerate() {
        assert_eq!(summary.generation, i as u32);
        assert!(summary.survivors <= 100);
        assert!(summary.total_life_force >= 0);
        assert_eq!(
            summary.survivors + summary.starved + summary.poisoned + summary.eaten,
            100
        );
    }
    assert!(!run.generations[0].bred);
}

#[test]
fn test_lifecycle_by_hand() {
    let config = SimConfig {
        generations: 3,
        steps_per_generation: 10,
        seed: Some(5),
        ..SimConfig::default()
    };
    let mut world = World::new(config).unwrap();
    assert_eq!(world.phase(), Phase::Uninitialized);

    world.initialize_first_generation().unwrap();
    for generation in 0..3 {
        assert_eq!(world.generation(), generation);
        for step in 0..10 {
            assert_eq!(world.phase(), Phase::Stepping);
            assert_eq!(world.step(), step);
            world.step_once().unwrap();
            assert_eq!(
                world.grid().total(ItemKind::Creature),
                world.creatures().len() as u64
            );
            assert_eq!(world.grid().total(ItemKind::Monster), 10);
        }
        assert_eq!(world.phase(), Phase::Evaluating);
        world.advance_generation().unwrap();
    }
    assert_eq!(world.phase(), Phase::Finished);
    assert_eq!(world.history().len(), 3);
}

#[test]
fn test_forced_extinction_never_crashes() {
    // Every creature must move on the first step, and one move empties it
    let config = SimConfig {
        life_force: 1,
        strawberry_population: 0,
        mushroom_population: 0,
        seed: Some(99),
        ..SimConfig::default()
    };
    let mut world = World::new(config).unwrap();
    let run = world.run().unwrap();

    assert_eq!(run.generations.len(), 50);
    for summary in &run.generations {
        assert_eq!(summary.survivors, 0);
        assert!(!summary.bred);
        assert_eq!(summary.average_life_force, 0.0);
    }
}

#[test]
fn test_mushroom_heavy_board() {
    let config = SimConfig {
        strawberry_population: 50,
        mushroom_population: 1000,
        generations: 50,
        seed: Some(3),
        ..SimConfig::default()
    };
    let mut world = World::new(config).unwrap();
    let run = world.run().unwrap();
    assert_eq!(run.generations.len(), 50);
    assert!(run.generations.iter().any(|g| g.poisoned > 0));
}

#[test]
fn test_sight_spanning_whole_board() {
    let config = SimConfig {
        rows: 12,
        cols: 8,
        creature_population: 20,
        monster_population: 3,
        strawberry_population: 30,
        mushroom_population: 10,
        creature_sight: 12,
        monster_sight: 12,
        generations: 3,
        seed: Some(41),
        ..SimConfig::default()
    };
    let mut world = World::new(config).unwrap();
    let run = world.run().unwrap();
    assert_eq!(run.generations.len(), 3);
}

#[test]
fn test_seeded_runs_repeat() {
    let config = SimConfig {
        generations: 10,
        ..classic(77)
    };
    let mut first = World::new(config.clone()).unwrap();
    let mut second = World::new(config).unwrap();
    assert_eq!(first.run().unwrap(), second.run().unwrap());
    assert_eq!(first.creatures(), second.creatures());
}

#[test]
fn test_final_population_profile() {
    let config = SimConfig {
        generations: 5,
        ..classic(8)
    };
    let mut world = World::new(config).unwrap();
    let run = world.run().unwrap();

    let profile = analyze_population(world.creatures());
    assert_eq!(profile.population, run.generations[4].survivors);
    for histogram in &profile.histograms {
        assert_eq!(histogram.iter().sum::<usize>(), profile.population);
    }
}
