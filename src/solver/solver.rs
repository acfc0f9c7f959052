use super::config::Config;
use super::memo::Claim;
use super::memo::Memo;
use super::state::Party;
use super::state::State;
use super::step::Branch;
use super::step::Step;
use crate::Day;
use crate::Score;
use crate::board::Board;
use crate::cards::Catalog;
use crate::cards::Frontier;
use crate::cards::Packed;
use crate::cards::Subsets;
use crate::climbing::Climber;
use crate::climbing::ClimberMove;
use crate::climbing::Mover;
use crate::paths::PathIndex;
use futures::FutureExt;
use futures::future::BoxFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Day-by-day game-tree search.
///
/// Each (day, state) is either a chance node, where the hand is refilled from
/// the deck and the value is the worst over a few sampled draws, or a decision
/// node, where the value is the best over every way to play cards and move.
/// The last day scores the party.
///
/// Values are memoized per day and shared between tasks. Children of nodes in
/// the first `parallel` levels run as separate tokio tasks; deeper levels run
/// inline in whichever task reached them.
#[derive(Debug)]
pub struct Solver {
    board: Board,
    paths: PathIndex,
    catalog: Catalog,
    config: Config,
    memo: Memo,
}

impl Solver {
    pub fn new(board: Board, catalog: Catalog, config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        anyhow::ensure!(
            config.hand <= catalog.size(),
            "hand size {} exceeds the {} card deck",
            config.hand,
            catalog.size()
        );
        log::info!("{:<32}{:<16}", "card kinds", catalog.kinds());
        log::info!("{:<32}{:<16}", "cards in deck", catalog.size());
        log::info!("{:<32}{:<16}", "board", board.to_string());
        let frontier = Frontier::new(&catalog, config.play);
        let paths = PathIndex::new(&board, &frontier);
        Ok(Self {
            memo: Memo::new(config.days),
            board,
            paths,
            catalog,
            config,
        })
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// opening state with every climber at the start vertex
    pub fn start(&self, climbers: usize) -> anyhow::Result<State> {
        anyhow::ensure!(
            matches!(climbers, 1 | 2),
            "games have one or two climbers, not {}",
            climbers
        );
        let at = self.board.start();
        let climber = Climber::new(at, self.board.vertex(at).reward, self.config.initial);
        Ok(State::new(Party::from(vec![climber; climbers])))
    }
    /// computations started, across every solve on this solver
    pub fn evaluations(&self) -> usize {
        self.memo.computed()
    }
    /// memo entries per day
    pub fn memoized(&self) -> Vec<usize> {
        self.memo.sizes()
    }
}

// search interface
impl Solver {
    /// Best composite score the party can guarantee from day 0, against the
    /// sampled draws.
    pub async fn solve(self: &Arc<Self>, state: State) -> anyhow::Result<Score> {
        self.check(&state)?;
        let start = Instant::now();
        let value = self.clone().value(0, state, 0).await;
        log::info!(
            "{:<32}{:<16}",
            "solved game tree",
            format!("{:.3}s", start.elapsed().as_secs_f32())
        );
        log::info!("{:<32}{:<16}", "memoized states", self.memoized().iter().sum::<usize>());
        for (day, n) in self.memoized().iter().enumerate() {
            log::debug!("{:<32}{:<16}", format!("states on day {}", day), n);
        }
        Ok(value)
    }
    /// Replays the game that realizes the solved value: one record per day,
    /// taking the first branch in enumeration order that attains it. Sibling
    /// values are looked up as parallel tasks, so a trace without a prior
    /// solve fills the memo the same way a solve does.
    pub async fn trace(self: &Arc<Self>, state: State) -> anyhow::Result<Vec<Step>> {
        self.check(&state)?;
        let mut steps = Vec::new();
        let mut day = 0;
        let mut state = state;
        while day < self.config.days {
            let target = self.clone().value(day, state, 0).await;
            if let Some(draws) = self.refills(day, &state) {
                let values = self.fan(day, draws.clone(), 0).await;
                state = draws
                    .into_iter()
                    .zip(values)
                    .find(|(_, value)| *value == target)
                    .map(|(draw, _)| draw)
                    .expect("a sampled draw attains the chance value");
                continue;
            }
            let branches = self.branches(&state);
            if branches.is_empty() {
                break;
            }
            let nexts = branches.iter().map(|branch| branch.next).collect::<Vec<_>>();
            let values = self.fan(day + 1, nexts, 0).await;
            let branch = branches
                .into_iter()
                .zip(values)
                .find(|(_, value)| *value == target)
                .map(|(branch, _)| branch)
                .expect("a branch attains the decision value");
            steps.push(Step {
                day,
                played: branch.cards.iter().map(|c| self.catalog.render(*c)).collect(),
                cards: branch.cards,
                vias: branch.vias,
                state: branch.next,
            });
            state = branch.next;
            day += 1;
        }
        Ok(steps)
    }
    /// hand and deck drawn from this catalog, climbers on the board
    fn check(&self, state: &State) -> anyhow::Result<()> {
        let full = self.catalog.full();
        anyhow::ensure!(
            (0..self.catalog.kinds())
                .all(|kind| state.hand.count(kind) + state.deck.count(kind) <= full.count(kind)),
            "hand and deck hold more cards than the catalog"
        );
        anyhow::ensure!(
            (self.catalog.kinds()..Packed::FIELDS)
                .all(|kind| state.hand.count(kind) + state.deck.count(kind) == 0),
            "hand or deck holds cards outside the catalog"
        );
        anyhow::ensure!(
            state.hand.size() <= self.config.hand,
            "hand of {} exceeds the hand size {}",
            state.hand.size(),
            self.config.hand
        );
        for climber in state.party.climbers() {
            anyhow::ensure!(
                climber.at.index() < self.board.n(),
                "climber stands off the board at {}",
                climber.at.index()
            );
            if let Some(tent) = climber.tent {
                anyhow::ensure!(
                    tent.index() < self.board.n(),
                    "climber tent pitched off the board at {}",
                    tent.index()
                );
            }
            anyhow::ensure!(
                (crate::MIN_ACC..=self.config.ceiling).contains(&climber.acc),
                "climber acclimatization {} outside {}..={}",
                climber.acc,
                crate::MIN_ACC,
                self.config.ceiling
            );
        }
        Ok(())
    }
}

// node evaluation
impl Solver {
    fn value(self: Arc<Self>, day: Day, state: State, depth: usize) -> BoxFuture<'static, Score> {
        async move {
            if day == self.config.days {
                return state.score(self.config.weight);
            }
            match self.memo.claim(day, &state) {
                Claim::Ready(value) => value,
                Claim::Await(rx) => Memo::wait(rx).await,
                Claim::Compute(tx) => {
                    let value = self.clone().evaluate(day, state, depth).await;
                    self.memo.resolve(day, &state, tx, value);
                    value
                }
            }
        }
        .boxed()
    }
    async fn evaluate(self: Arc<Self>, day: Day, state: State, depth: usize) -> Score {
        match self.refills(day, &state) {
            Some(draws) => self
                .fan(day, draws, depth)
                .await
                .into_iter()
                .min()
                .expect("chance nodes have at least one draw"),
            None => {
                let mut seen = HashSet::new();
                let nexts = self
                    .branches(&state)
                    .into_iter()
                    .map(|branch| branch.next)
                    .filter(|next| seen.insert(*next))
                    .collect::<Vec<_>>();
                match nexts.is_empty() {
                    true => state.score(self.config.weight),
                    false => self
                        .fan(day + 1, nexts, depth)
                        .await
                        .into_iter()
                        .max()
                        .expect("non-empty branches"),
                }
            }
        }
    }
    /// values of sibling states, as spawned tasks near the root and inline below
    async fn fan(self: &Arc<Self>, day: Day, states: Vec<State>, depth: usize) -> Vec<Score> {
        if depth < self.config.parallel {
            futures::future::join_all(
                states
                    .into_iter()
                    .map(|state| tokio::spawn(self.clone().value(day, state, depth + 1))),
            )
            .await
            .into_iter()
            .map(|joined| match joined {
                Ok(value) => value,
                Err(e) => match e.try_into_panic() {
                    Ok(panic) => std::panic::resume_unwind(panic),
                    Err(e) => panic!("search task failed: {}", e),
                },
            })
            .collect()
        } else {
            let mut values = Vec::with_capacity(states.len());
            for state in states {
                values.push(self.clone().value(day, state, depth + 1).await);
            }
            values
        }
    }
}

// node expansion
impl Solver {
    /// States after refilling the hand, or None when the state is a decision.
    ///
    /// The hand refills whenever it is short and the deck has cards, and a
    /// spent hand with a spent deck reshuffles the whole catalog. A deck
    /// holding no more than the cards needed is dealt out whole; otherwise a
    /// few seeded draws stand in for every possible draw.
    fn refills(&self, day: Day, state: &State) -> Option<Vec<State>> {
        let held = state.hand.size();
        let short = held < self.config.hand && !state.deck.is_empty();
        if !short && held > 0 {
            return None;
        }
        let deck = match state.deck.is_empty() {
            true => self.catalog.full(),
            false => state.deck,
        };
        let need = self.config.hand - held;
        if need >= deck.size() {
            return Some(vec![State {
                hand: state.hand + deck,
                deck: Packed::empty(),
                ..*state
            }]);
        }
        let ref mut rng = SmallRng::seed_from_u64(self.config.seed.wrapping_add(day as u64));
        Some(
            (0..self.config.samples)
                .map(|_| deck.sample(need, rng))
                .map(|drawn| State {
                    hand: state.hand + drawn,
                    deck: deck - drawn,
                    ..*state
                })
                .collect(),
        )
    }
    /// Every legal way to spend the day, in enumeration order: played subset,
    /// then split between climbers, then each climber's moves.
    fn branches(&self, state: &State) -> Vec<Branch> {
        let mover = Mover::new(&self.board, &self.paths, &self.catalog, self.config.ceiling);
        let play = self.config.play.min(state.hand.size());
        let climbers = state.party.climbers();
        let mut branches = Vec::new();
        for cards in Subsets::from((play, state.hand)) {
            let hand = state.hand - cards;
            for split in Self::splits(climbers.len(), cards) {
                let options = climbers
                    .iter()
                    .zip(split.iter())
                    .map(|(climber, cards)| mover.moves(climber, *cards))
                    .collect::<Vec<_>>();
                for combo in Self::combos(&options) {
                    let tents = combo.iter().filter_map(|m| m.tent).collect::<Vec<_>>();
                    let Some(landed) = climbers
                        .iter()
                        .zip(combo.iter())
                        .map(|(climber, m)| climber.land(m, &tents, self.config.ceiling))
                        .collect::<Option<Vec<_>>>()
                    else {
                        continue;
                    };
                    let party = Party::from(landed);
                    if self.config.limits && !self.board.admits(&party.spots()) {
                        continue;
                    }
                    branches.push(Branch {
                        cards: split.clone(),
                        vias: combo.iter().map(|m| m.via.clone()).collect(),
                        next: State {
                            party,
                            hand,
                            deck: state.deck,
                        },
                    });
                }
            }
        }
        branches
    }
    /// ways to divide played cards among the climbers, first climber's share
    /// growing from nothing to everything
    fn splits(climbers: usize, cards: Packed) -> Vec<Vec<Packed>> {
        match climbers {
            1 => vec![vec![cards]],
            _ => (0..=cards.size())
                .flat_map(|k| Subsets::from((k, cards)))
                .map(|first| vec![first, cards - first])
                .collect(),
        }
    }
    /// one move per climber, every combination
    fn combos(options: &[Vec<ClimberMove>]) -> Vec<Vec<&ClimberMove>> {
        options.iter().fold(vec![Vec::new()], |combos, moves| {
            combos
                .into_iter()
                .flat_map(move |combo| {
                    moves.iter().map(move |m| {
                        let mut combo = combo.clone();
                        combo.push(m);
                        combo
                    })
                })
                .collect()
        })
    }
}
