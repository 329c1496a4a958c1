//! Scoped board mutation
//!
//! Search plays hypothetical moves into the one board it was handed. A
//! [`ScopedMove`] owns the mark it placed and removes it when dropped, so the
//! board is restored on every exit path out of a search node.

use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::board::Player;
use crate::error::MoveError;
use crate::rules::Rules;

/// A mark placed for the lifetime of this guard
pub struct ScopedMove<'a, R: Rules> {
    board: &'a mut R::Board,
    pos: R::Pos,
    _rules: PhantomData<fn() -> R>,
}

impl<'a, R: Rules> ScopedMove<'a, R> {
    /// Apply `mv` for `player`; the mark is undone when the guard drops
    pub fn place(board: &'a mut R::Board, mv: R::Move, player: Player) -> Result<Self, MoveError> {
        let pos = R::apply(board, mv, player)?;
        Ok(Self {
            board,
            pos,
            _rules: PhantomData,
        })
    }

    /// Cell the guarded mark occupies
    #[inline]
    pub fn pos(&self) -> R::Pos {
        self.pos
    }
}

impl<R: Rules> Deref for ScopedMove<'_, R> {
    type Target = R::Board;

    fn deref(&self) -> &R::Board {
        &*self.board
    }
}

impl<R: Rules> DerefMut for ScopedMove<'_, R> {
    fn deref_mut(&mut self) -> &mut R::Board {
        &mut *self.board
    }
}

impl<R: Rules> Drop for ScopedMove<'_, R> {
    fn drop(&mut self) {
        R::undo(&mut *self.board, self.pos);
    }
}
