//! Core trait for generic game-tree search.

use std::fmt::Debug;
use std::hash::Hash;

/// A finite, deterministic, alternating-turn, two-player zero-sum game
/// with perfect information.
///
/// Implementations are stateless rule definitions: all position data
/// lives in the `State` value, and `result` derives a fresh state rather
/// than mutating its input. `result` must be a pure function, so
/// `result(s, m) == result(s, m)` holds for any legal `m` — the search
/// algorithms rely on this to revisit branches independently.
pub trait Game {
    type Player: Copy + Eq + Debug;
    type Move: Copy + Eq + Hash + Debug;
    type State: Clone + PartialEq + Debug;
    /// Ordered legal-move collection (`Vec`, `SmallVec`, ...). The order
    /// is significant: search tie-breaks resolve to the first optimal
    /// move this collection yields.
    type MoveList: AsRef<[Self::Move]>;

    /// Returns the legal moves from `state`. Empty iff the game is over
    /// or the position is exhausted.
    fn actions(&self, state: &Self::State) -> Self::MoveList;

    /// Returns the state reached by playing `mv` from `state`. A move
    /// not present in `actions(state)` has no effect and returns the
    /// input state unchanged; callers that care must validate first.
    fn result(&self, state: &Self::State, mv: Self::Move) -> Self::State;

    /// Score of `state` from `player`'s perspective. Must be
    /// antisymmetric between the two players for every terminal state.
    fn utility(&self, state: &Self::State, player: Self::Player) -> i16;

    /// Returns the player whose turn it is in `state`.
    fn to_move(&self, state: &Self::State) -> Self::Player;

    fn terminal_test(&self, state: &Self::State) -> bool {
        self.actions(state).as_ref().is_empty()
    }
}
