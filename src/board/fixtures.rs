use super::board::Board;
use super::layout::Layout;
use std::path::Path;

fn load(name: &str) -> Board {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("boards").join(name);
    Layout::load(&path).expect("shipped board loads")
}

/// start -> mid -> top, rewards 1/10/20, entry costs 1/1/2
pub fn chain() -> Board {
    load("chain.json")
}

/// eleven vertices over six tiers with a crowded summit band
pub fn ridge() -> Board {
    load("ridge.json")
}

/// the full game board: 28 spaces over 16 tiers, crowded above score 5
pub fn easy() -> Board {
    load("easy.json")
}
