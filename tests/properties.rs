//! Property-based tests for the tour solvers.
//!
//! # Invariants tested
//!
//! - **Permutation:** Every solver returns the input multiset plus one
//!   closing duplicate of the first location.
//! - **Length symmetry:** Closed-tour length is unchanged by reversal and by
//!   rotating the start.
//! - **Nearest step:** Each nearest-neighbour move goes to a closest
//!   unvisited location.
//! - **2-opt descent:** 2-opt never lengthens the open route, and recorded
//!   distances never increase.
//! - **Best-so-far:** Genetic and ant colony histories never increase.

use geo_tour::aco::{AntColonyConfig, AntColonyRunner};
use geo_tour::constructive::nearest_neighbour;
use geo_tour::distance::{haversine, total_distance};
use geo_tour::ga::{GeneticConfig, GeneticRunner};
use geo_tour::local_search::{two_opt, TwoOptConfig};
use geo_tour::models::{Location, Route};
use geo_tour::solver::Strategy as Solver;
use proptest::prelude::*;

fn location_strategy() -> impl Strategy<Value = Location> {
    (-60.0..60.0_f64, -170.0..170.0_f64).prop_map(|(lat, lng)| Location::new(lat, lng))
}

fn locations_strategy(max: usize) -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec(location_strategy(), 0..=max)
}

fn ant_colony(seed: u64) -> AntColonyConfig {
    AntColonyConfig::new(4, 5)
        .with_alpha(1.0)
        .with_beta(2.0)
        .with_evaporation(0.5)
        .with_deposit(1.0)
        .with_initial_pheromone(1.0)
        .with_min_edge(1.0)
        .with_seed(seed)
}

fn strategies(seed: u64) -> Vec<Solver> {
    vec![
        Solver::NearestNeighbour,
        Solver::Greedy,
        Solver::TwoOpt(TwoOptConfig::default()),
        Solver::Genetic(
            GeneticConfig::default()
                .with_population_size(10)
                .with_generations(5)
                .with_seed(seed),
        ),
        Solver::AntColony(ant_colony(seed)),
    ]
}

fn sort_key(loc: &Location) -> (u64, u64) {
    (loc.lat().to_bits(), loc.lng().to_bits())
}

fn assert_closed_permutation(route: &Route, input: &[Location]) -> Result<(), TestCaseError> {
    let locs = route.as_slice();
    if input.is_empty() {
        prop_assert!(locs.is_empty());
        return Ok(());
    }
    prop_assert_eq!(locs.len(), input.len() + 1);
    prop_assert_eq!(locs.first(), locs.last());

    let mut expected = input.to_vec();
    let mut actual = locs[..input.len()].to_vec();
    expected.sort_by_key(sort_key);
    actual.sort_by_key(sort_key);
    prop_assert_eq!(expected, actual);
    Ok(())
}

fn close_enough(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: Every strategy returns a closed permutation of its input.
    #[test]
    fn every_strategy_returns_closed_permutation(
        locations in locations_strategy(9),
        seed in any::<u64>(),
    ) {
        for strategy in strategies(seed) {
            let outcome = strategy.solve(&locations).expect("valid input");
            assert_closed_permutation(&outcome.route, &locations)?;
            prop_assert!(outcome.distance >= 0.0);
        }
    }

    /// Property: Duplicate coordinates are visited as many times as given.
    #[test]
    fn duplicates_preserved(
        base in locations_strategy(4),
        seed in any::<u64>(),
    ) {
        let mut locations = base.clone();
        locations.extend(base);
        for strategy in strategies(seed) {
            let outcome = strategy.solve(&locations).expect("valid input");
            assert_closed_permutation(&outcome.route, &locations)?;
        }
    }

    /// Property: Closed-tour length is invariant under reversal and rotation.
    #[test]
    fn closed_length_symmetric(
        locations in prop::collection::vec(location_strategy(), 2..10),
        shift in 0_usize..10,
    ) {
        let mut closed = locations.clone();
        closed.push(locations[0]);
        let length = total_distance(&closed);

        let mut reversed = closed.clone();
        reversed.reverse();
        prop_assert!(close_enough(length, total_distance(&reversed)));

        let mut rotated = locations.clone();
        rotated.rotate_left(shift % locations.len());
        rotated.push(rotated[0]);
        prop_assert!(close_enough(length, total_distance(&rotated)));
    }

    /// Property: Haversine distance is symmetric and non-negative.
    #[test]
    fn haversine_symmetric(a in location_strategy(), b in location_strategy()) {
        let d = haversine(a, b);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d, haversine(b, a));
    }

    /// Property: Each nearest-neighbour step picks a closest unvisited location.
    #[test]
    fn nearest_neighbour_steps_are_nearest(locations in locations_strategy(10)) {
        let route = nearest_neighbour(&locations);
        let locs = route.as_slice();
        if locs.len() > 2 {
            let body = &locs[..locs.len() - 1];
            for i in 0..body.len() - 1 {
                let chosen = haversine(body[i], body[i + 1]);
                for &other in &body[i + 2..] {
                    prop_assert!(chosen <= haversine(body[i], other));
                }
            }
        }
    }

    /// Property: 2-opt never lengthens the open route and its recorded
    /// distances never increase.
    #[test]
    fn two_opt_descends(locations in locations_strategy(8)) {
        let config = TwoOptConfig::default().with_record_iterations(true);
        let result = two_opt(&locations, &config);
        assert_closed_permutation(&result.route, &locations)?;

        if locations.len() >= 2 {
            let locs = result.route.as_slice();
            let open = total_distance(&locs[..locs.len() - 1]);
            prop_assert!(open <= total_distance(&locations));
            prop_assert_eq!(locs[0], locations[0]);
        }
        for pair in result.iterations.windows(2) {
            prop_assert!(pair[1].distance <= pair[0].distance);
        }
    }

    /// Property: The genetic best-so-far distance never increases.
    #[test]
    fn genetic_history_non_increasing(
        locations in prop::collection::vec(location_strategy(), 2..9),
        seed in any::<u64>(),
    ) {
        let config = GeneticConfig::default()
            .with_population_size(12)
            .with_generations(10)
            .with_mutation_rate(0.1)
            .with_seed(seed);
        let result = GeneticRunner::run(&locations, &config).expect("valid config");
        prop_assert_eq!(result.history.len(), result.generations + 1);
        for pair in result.history.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    /// Property: The ant colony best-so-far distance never increases.
    #[test]
    fn ant_colony_history_non_increasing(
        locations in prop::collection::vec(location_strategy(), 2..9),
        seed in any::<u64>(),
    ) {
        let result = AntColonyRunner::run(&locations, &ant_colony(seed)).expect("valid config");
        for pair in result.history.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
        prop_assert_eq!(result.route.start(), Some(locations[0]));
    }
}
