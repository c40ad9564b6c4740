//! Unit tests for the dispatch policies.

use lift_core::{Direction, ElevatorId, Floor, SimConfig};

use crate::{Algorithm, Call, CarState, CostPolicy, CostWeights, DispatchPolicy, NearestPolicy};

fn car(id: u32, floor: i32, direction: Direction, load: u32) -> CarState {
    CarState {
        id: ElevatorId(id),
        floor: Floor(floor),
        direction,
        load,
    }
}

fn call(origin: i32, direction: Direction, group_size: u32) -> Call {
    Call {
        origin: Floor(origin),
        direction,
        group_size,
    }
}

// ── Algorithm A ───────────────────────────────────────────────────────────────

mod nearest {
    use super::*;

    #[test]
    fn idle_car_beats_car_that_already_passed_the_floor() {
        // Call at floor 2 going up.  The car at floor 8 is moving up but has
        // passed floor 2, so it cannot serve; the idle car must win even
        // though the direction filter alone would not pick it.
        let cars = [
            car(0, 0, Direction::Idle, 0),
            car(1, 8, Direction::Up, 0),
        ];
        let picked = NearestPolicy.select(&call(2, Direction::Up, 1), &cars);
        assert_eq!(picked, Some(ElevatorId(0)));
    }

    #[test]
    fn on_route_car_qualifies() {
        // Car 1 is below the call floor heading up: it will pass floor 5.
        let cars = [
            car(0, 9, Direction::Down, 0),
            car(1, 1, Direction::Up, 0),
        ];
        let picked = NearestPolicy.select(&call(5, Direction::Up, 1), &cars);
        assert_eq!(picked, Some(ElevatorId(1)));
    }

    #[test]
    fn falls_back_to_globally_nearest_when_none_can_serve() {
        // Both cars are committed the wrong way; nobody can serve, so the
        // nearest car overall is chosen.
        let cars = [
            car(0, 9, Direction::Down, 0),
            car(1, 4, Direction::Down, 0),
        ];
        let picked = NearestPolicy.select(&call(5, Direction::Up, 1), &cars);
        assert_eq!(picked, Some(ElevatorId(1)));
    }

    #[test]
    fn distance_tie_goes_to_lowest_id() {
        let cars = [
            car(0, 3, Direction::Idle, 0),
            car(1, 7, Direction::Idle, 0),
        ];
        // Floor 5 is equidistant from both.
        let picked = NearestPolicy.select(&call(5, Direction::Up, 1), &cars);
        assert_eq!(picked, Some(ElevatorId(0)));
    }

    #[test]
    fn empty_bank_yields_none() {
        assert_eq!(NearestPolicy.select(&call(5, Direction::Up, 1), &[]), None);
    }
}

// ── Algorithm B ───────────────────────────────────────────────────────────────

mod cost {
    use super::*;

    fn policy() -> CostPolicy {
        CostPolicy::new(&SimConfig::default())
    }

    #[test]
    fn on_route_car_beats_equidistant_idle_car() {
        // Both cars are 3 floors from the call; costs differ only by the
        // on-route bonus, which must tip the choice to the moving car.
        let on_route = car(0, 2, Direction::Up, 0);
        let idle = car(1, 8, Direction::Idle, 0);
        let c = call(5, Direction::Up, 1);

        let p = policy();
        assert!(p.cost(&on_route, &c) < p.cost(&idle, &c));
        assert_eq!(p.select(&c, &[idle, on_route]), Some(ElevatorId(0)));
    }

    #[test]
    fn wrong_way_car_pays_direction_penalty() {
        let p = policy();
        let wrong_way = car(0, 5, Direction::Down, 0);
        let idle = car(1, 5, Direction::Idle, 0);
        let c = call(5, Direction::Up, 1);
        assert_eq!(p.cost(&wrong_way, &c) - p.cost(&idle, &c), 100.0);
    }

    #[test]
    fn overflowing_car_is_priced_out_but_not_excluded() {
        let p = policy();
        let full = car(0, 5, Direction::Idle, 8); // remaining space 0
        let distant = car(1, 0, Direction::Idle, 0);
        let c = call(5, Direction::Up, 2);

        // The distant empty car wins over the adjacent full one.
        assert_eq!(p.select(&c, &[full, distant]), Some(ElevatorId(1)));

        // With only overflowing cars, the cheapest of them is still chosen.
        let also_full = car(1, 0, Direction::Idle, 8);
        assert_eq!(p.select(&c, &[full, also_full]), Some(ElevatorId(0)));
    }

    #[test]
    fn load_weight_prefers_emptier_car() {
        let p = policy();
        let loaded = car(0, 5, Direction::Idle, 6);
        let empty = car(1, 5, Direction::Idle, 0);
        assert_eq!(p.select(&call(5, Direction::Up, 1), &[loaded, empty]), Some(ElevatorId(1)));
    }

    #[test]
    fn cost_tie_goes_to_lowest_id() {
        let p = policy();
        let cars = [car(0, 3, Direction::Idle, 0), car(1, 7, Direction::Idle, 0)];
        assert_eq!(p.select(&call(5, Direction::Up, 1), &cars), Some(ElevatorId(0)));
    }

    #[test]
    fn custom_weights_apply() {
        let weights = CostWeights {
            direction_penalty: 0.0,
            ..CostWeights::default()
        };
        let p = CostPolicy::with_weights(&SimConfig::default(), weights);
        let wrong_way = car(0, 5, Direction::Down, 0);
        let idle = car(1, 5, Direction::Idle, 0);
        let c = call(5, Direction::Up, 1);
        assert_eq!(p.cost(&wrong_way, &c), p.cost(&idle, &c));
    }
}

// ── Algorithm selector ────────────────────────────────────────────────────────

mod algorithm {
    use super::*;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("A".parse::<Algorithm>().unwrap(), Algorithm::Nearest);
        assert_eq!("nearest".parse::<Algorithm>().unwrap(), Algorithm::Nearest);
        assert_eq!("b".parse::<Algorithm>().unwrap(), Algorithm::CostBased);
        assert_eq!("cost".parse::<Algorithm>().unwrap(), Algorithm::CostBased);
        assert!("c".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_matches_report_labels() {
        assert_eq!(Algorithm::Nearest.to_string(), "A");
        assert_eq!(Algorithm::CostBased.to_string(), "B");
    }

    #[test]
    fn build_yields_named_policies() {
        let cfg = SimConfig::default();
        assert_eq!(Algorithm::Nearest.build(&cfg).name(), "nearest");
        assert_eq!(Algorithm::CostBased.build(&cfg).name(), "cost-based");
    }
}
