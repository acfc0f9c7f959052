use super::*;
use crate::Score;
use crate::board::fixtures;
use crate::cards::Catalog;
use crate::cards::Packed;
use crate::climbing::Climber;
use petgraph::graph::NodeIndex;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;

fn solver(board: crate::board::Board, catalog: &str, config: Config) -> Arc<Solver> {
    let catalog = Catalog::try_from(catalog).unwrap();
    Arc::new(Solver::new(board, catalog, config).unwrap())
}

/// one day, both cards dealt, both played
fn single_turn() -> Config {
    Config {
        days: 1,
        hand: 2,
        play: 2,
        ..Config::default()
    }
}

/// a few days on the ridge with the standard deck
fn ridge(parallel: usize) -> Arc<Solver> {
    let config = Config {
        days: 2,
        samples: 2,
        parallel,
        ..Config::default()
    };
    solver(fixtures::ridge(), "M1*5 M2*3 M3*2 M13 M12 M23 A0 A1*2 A2 A3", config)
}

#[tokio::test(flavor = "multi_thread")]
async fn single_turn_reaches_best_affordable_vertex() {
    let solver = solver(fixtures::chain(), "M1 M2", single_turn());
    let start = solver.start(1).unwrap();
    let value = solver.solve(start).await.unwrap();
    // M1 + M2 ascend 3: mid costs 1, top 2 more
    assert_eq!(value, 20 * 100 + 1);
    let steps = solver.trace(start).await.unwrap();
    assert_eq!(steps.len(), 1);
    let climber = steps[0].state.party.climbers()[0];
    assert_eq!(climber.at, NodeIndex::new(2));
    assert_eq!(climber.reward, 20);
    assert_eq!(steps[0].played, vec![String::from("M1M2")]);
    assert_eq!(steps[0].vias, vec![vec![NodeIndex::new(0), NodeIndex::new(1)]]);
    assert!(steps[0].state.hand.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn chance_node_takes_worst_sampled_draw() {
    let config = Config {
        samples: 3,
        ..single_turn()
    };
    let solver = solver(fixtures::chain(), "M1*2 M2*2", config);
    let value = solver.solve(solver.start(1).unwrap()).await.unwrap();
    // ascend 3 or more tops out, otherwise camp at mid with a tent
    let best = |hand: Packed| -> Score {
        match hand.count(0) + 2 * hand.count(1) >= 3 {
            true => 20 * 100 + 1,
            false => 10 * 100 + 2,
        }
    };
    let ref mut rng = SmallRng::seed_from_u64(0);
    let full = solver.catalog().full();
    let worst = (0..3).map(|_| best(full.sample(2, rng))).min().unwrap();
    assert_eq!(value, worst);
}

#[tokio::test(flavor = "multi_thread")]
async fn pair_shares_played_cards() {
    let solver = solver(fixtures::chain(), "M1 M2", single_turn());
    let start = solver.start(2).unwrap();
    let value = solver.solve(start).await.unwrap();
    // one climber takes both cards to the top, the other waits at the start
    assert_eq!(value, (20 * 100 + 1) + (1 * 100 + 1));
    let steps = solver.trace(start).await.unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].cards.len(), 2);
    assert!(
        steps[0]
            .state
            .party
            .climbers()
            .iter()
            .any(|c| c.at == NodeIndex::new(2))
    );
}

/// chain board whose mid and top admit one climber at or above them
fn crowded() -> crate::board::Board {
    let mut layout = crate::board::Layout::from(&fixtures::chain());
    layout.vertices[1].limit = 1;
    layout.vertices[2].limit = 1;
    crate::board::Board::try_from(layout).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn crowding_limits_split_the_pair() {
    let config = Config {
        hand: 3,
        play: 3,
        ..single_turn()
    };
    let free = solver(crowded(), "M2*2 M3", config);
    let value = free.solve(free.start(2).unwrap()).await.unwrap();
    // M2 M2 and M3 each top out, no ascent left for a tent
    assert_eq!(value, 2 * (20 * 100 + 1));
    let limited = solver(crowded(), "M2*2 M3", Config {
        limits: true,
        ..config
    });
    let start = limited.start(2).unwrap();
    let value = limited.solve(start).await.unwrap();
    // M3 M2 tops out with a tent, M2 camps at the start
    assert_eq!(value, (20 * 100 + 2) + (1 * 100 + 2));
    let steps = limited.trace(start).await.unwrap();
    let mut spots = steps[0].state.party.spots();
    spots.sort();
    assert_eq!(spots, vec![NodeIndex::new(0), NodeIndex::new(2)]);
}

#[tokio::test(flavor = "multi_thread")]
async fn spent_deck_reshuffles_the_catalog() {
    let config = Config {
        days: 3,
        play: 1,
        ..single_turn()
    };
    let solver = solver(fixtures::chain(), "M1 M2", config);
    let steps = solver.trace(solver.start(1).unwrap()).await.unwrap();
    assert_eq!(steps.len(), 3);
    assert!(steps.iter().all(|s| s.state.deck.is_empty()));
    assert!(steps[1].state.hand.is_empty());
    // both cards come back on the third day
    assert_eq!(steps[2].state.hand.size(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn short_hand_plays_what_is_left() {
    let config = Config {
        days: 2,
        hand: 3,
        play: 2,
        ..Config::default()
    };
    let solver = solver(fixtures::chain(), "M1 M2 A1", config);
    let steps = solver.trace(solver.start(1).unwrap()).await.unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].state.hand.size(), 1);
    let played = steps[1].cards.iter().map(|c| c.size()).sum::<usize>();
    assert_eq!(played, 1);
    assert!(steps[1].state.hand.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn largest_seed_wraps_across_days() {
    let config = Config {
        seed: u64::MAX,
        days: 2,
        play: 1,
        samples: 3,
        ..single_turn()
    };
    let solver = solver(fixtures::chain(), "M1*2 M2*2", config);
    let start = solver.start(1).unwrap();
    let value = solver.solve(start).await.unwrap();
    let steps = solver.trace(start).await.unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps.last().unwrap().state.score(100), value);
}

#[tokio::test(flavor = "multi_thread")]
async fn solves_the_full_board() {
    let config = Config {
        days: 1,
        samples: 1,
        ..Config::default()
    };
    let solver = solver(fixtures::easy(), "M1*5 M2*3 M3*2 M13 M12 M23 A0 A1*2 A2 A3", config);
    let start = solver.start(1).unwrap();
    let value = solver.solve(start).await.unwrap();
    assert!(value >= start.score(100));
    let steps = solver.trace(start).await.unwrap();
    assert_eq!(steps.last().map(|s| s.state.score(100)).unwrap_or(start.score(100)), value);
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_days_scores_the_opening() {
    let config = Config {
        days: 0,
        ..single_turn()
    };
    let solver = solver(fixtures::chain(), "M1 M2", config);
    let start = solver.start(1).unwrap();
    assert_eq!(solver.solve(start).await.unwrap(), 1 * 100 + 1);
    assert!(solver.trace(start).await.unwrap().is_empty());
    assert_eq!(solver.evaluations(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn value_independent_of_parallel_depth() {
    let inline = ridge(0);
    let spawned = ridge(3);
    let a = inline.solve(inline.start(1).unwrap()).await.unwrap();
    let b = spawned.solve(spawned.start(1).unwrap()).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(inline.memoized(), spawned.memoized());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_solves_compute_once() {
    let reference = ridge(1);
    let expected = reference.solve(reference.start(1).unwrap()).await.unwrap();
    let shared = ridge(1);
    let start = shared.start(1).unwrap();
    let solves = (0..4)
        .map(|_| shared.clone())
        .map(|solver| tokio::spawn(async move { solver.solve(start).await.unwrap() }))
        .collect::<Vec<_>>();
    for value in futures::future::join_all(solves).await {
        assert_eq!(value.unwrap(), expected);
    }
    assert_eq!(shared.evaluations(), reference.evaluations());
}

#[tokio::test(flavor = "multi_thread")]
async fn trace_replays_solved_value() {
    let solver = ridge(2);
    let start = solver.start(1).unwrap();
    let value = solver.solve(start).await.unwrap();
    let evaluations = solver.evaluations();
    let steps = solver.trace(start).await.unwrap();
    // a stranded climber ends the replay early
    assert!((1..=2).contains(&steps.len()));
    assert!(steps.iter().enumerate().all(|(day, s)| s.day == day));
    let last = steps.last().unwrap().state;
    assert_eq!(last.score(100), value);
    assert_eq!(solver.evaluations(), evaluations);
}

#[tokio::test(flavor = "multi_thread")]
async fn mirrored_pairs_share_memo() {
    let solver = solver(fixtures::chain(), "M1*2 M2*2 A1", Config {
        days: 2,
        hand: 3,
        play: 2,
        ..Config::default()
    });
    let a = Climber::new(NodeIndex::new(0), 1, 1);
    let b = Climber::new(NodeIndex::new(1), 10, 2);
    let x = State::new(Party::Pair([a, b]));
    let y = State::new(Party::Pair([b, a]));
    let value = solver.solve(x).await.unwrap();
    let evaluations = solver.evaluations();
    assert_eq!(solver.solve(y).await.unwrap(), value);
    assert_eq!(solver.evaluations(), evaluations);
}

#[tokio::test(flavor = "multi_thread")]
async fn rejects_bad_states() {
    let solver = solver(fixtures::chain(), "M1 M2", single_turn());
    assert!(solver.start(0).is_err());
    assert!(solver.start(3).is_err());
    let start = solver.start(1).unwrap();
    let foreign = State {
        hand: Packed::unit(5),
        ..start
    };
    assert!(solver.solve(foreign).await.is_err());
    let doubled = State {
        hand: Packed::unit(0),
        deck: Packed::unit(0),
        ..start
    };
    assert!(solver.solve(doubled).await.is_err());
    let off = State::new(Party::Solo(Climber::new(NodeIndex::new(9), 1, 1)));
    assert!(solver.solve(off).await.is_err());
    let pitched = State::new(Party::Solo(Climber {
        tent: Some(NodeIndex::new(9)),
        ..Climber::new(NodeIndex::new(0), 1, 1)
    }));
    assert!(solver.solve(pitched).await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn trace_without_solve_fills_memo() {
    let traced = ridge(2);
    let start = traced.start(1).unwrap();
    let steps = traced.trace(start).await.unwrap();
    let evaluations = traced.evaluations();
    let value = traced.solve(start).await.unwrap();
    assert_eq!(steps.last().unwrap().state.score(100), value);
    assert_eq!(traced.evaluations(), evaluations);
    let solved = ridge(2);
    assert_eq!(solved.solve(solved.start(1).unwrap()).await.unwrap(), value);
}

#[test]
fn rejects_oversized_hand() {
    let catalog = Catalog::try_from("M1 M2").unwrap();
    let config = Config {
        hand: 3,
        play: 2,
        ..Config::default()
    };
    assert!(Solver::new(fixtures::chain(), catalog, config).is_err());
}
