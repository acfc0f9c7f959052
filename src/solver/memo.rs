use super::state::State;
use crate::Day;
use crate::Score;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use tokio::sync::watch;

/// A memo entry: either a value under computation, observed through the
/// receiving end of its promise, or the final value.
#[derive(Debug)]
enum Slot {
    Pending(watch::Receiver<Option<Score>>),
    Ready(Score),
}

/// Outcome of looking up a (day, state) key.
#[derive(Debug)]
pub enum Claim {
    /// already resolved
    Ready(Score),
    /// another task is computing it
    Await(watch::Receiver<Option<Score>>),
    /// the caller now owns the computation and must resolve it
    Compute(watch::Sender<Option<Score>>),
}

/// Per-day tables from game state to value, shared by every search task.
///
/// Claiming a missing key atomically installs a pending promise, so each key
/// is computed at most once however many tasks reach it together. Late
/// arrivals wait on the promise rather than recomputing.
#[derive(Debug)]
pub struct Memo {
    days: Vec<Mutex<HashMap<State, Slot>>>,
    computed: AtomicUsize,
}

impl Memo {
    pub fn new(days: Day) -> Self {
        Self {
            days: (0..days).map(|_| Mutex::new(HashMap::new())).collect(),
            computed: AtomicUsize::new(0),
        }
    }
    pub fn claim(&self, day: Day, state: &State) -> Claim {
        let mut table = self.days[day].lock().expect("memo table poisoned");
        match table.get(state) {
            Some(Slot::Ready(value)) => Claim::Ready(*value),
            Some(Slot::Pending(rx)) => Claim::Await(rx.clone()),
            None => {
                let (tx, rx) = watch::channel(None);
                table.insert(*state, Slot::Pending(rx));
                self.computed.fetch_add(1, Ordering::Relaxed);
                Claim::Compute(tx)
            }
        }
    }
    /// Settles a claimed key and wakes its waiters. A key settles once; a
    /// second, different value means two searches disagree about the same
    /// position.
    pub fn resolve(&self, day: Day, state: &State, tx: watch::Sender<Option<Score>>, value: Score) {
        let mut table = self.days[day].lock().expect("memo table poisoned");
        if let Some(Slot::Ready(known)) = table.get(state) {
            assert_eq!(*known, value, "memo key resolved twice to different values");
        }
        table.insert(*state, Slot::Ready(value));
        tx.send_replace(Some(value));
    }
    pub async fn wait(mut rx: watch::Receiver<Option<Score>>) -> Score {
        loop {
            let seen = *rx.borrow_and_update();
            if let Some(value) = seen {
                return value;
            }
            assert!(rx.changed().await.is_ok(), "memo slot abandoned by its owner");
        }
    }
    /// resolved value, if any
    pub fn peek(&self, day: Day, state: &State) -> Option<Score> {
        match self.days[day].lock().expect("memo table poisoned").get(state) {
            Some(Slot::Ready(value)) => Some(*value),
            _ => None,
        }
    }
    /// entries per day
    pub fn sizes(&self) -> Vec<usize> {
        self.days
            .iter()
            .map(|table| table.lock().expect("memo table poisoned").len())
            .collect()
    }
    /// computations ever started
    pub fn computed(&self) -> usize {
        self.computed.load(Ordering::Relaxed)
    }
}
