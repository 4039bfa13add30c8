use core::ops::{Deref, DerefMut};

use crate::engine::types::{Color, Column, MoveError};

/// AI が盤面に要求する契約。
///
/// 盤面は呼び出し側が所有し、AI は着手（`apply`）と取り消し（`revert`）を
/// 必ず対にして呼ぶ。取り消しは直前の着手の完全な逆操作であること（手番も含む）。
pub trait Board {
    /// 行数を返す。
    fn rows(&self) -> u8;

    /// 列数を返す。
    fn cols(&self) -> u8;

    /// 指定セルの駒を返す（行 0 が最下段）。範囲外は `None`。
    fn cell(&self, row: u8, col: u8) -> Option<Color>;

    /// 合法手（埋まっていない列）を昇順で返す。
    fn legal_moves(&self) -> Vec<Column>;

    /// `column` が合法手かを返す。
    fn is_legal(&self, column: Column) -> bool;

    /// 手番側の駒を `column` の最下段の空きに落とし、手番を交代する。
    ///
    /// # Errors
    ///
    /// 列が範囲外、または埋まっている場合にエラーを返す。
    fn apply(&mut self, column: Column) -> Result<(), MoveError>;

    /// `column` の最上段の駒を取り除き、手番をその駒の持ち主へ戻す。
    ///
    /// # Errors
    ///
    /// 列が範囲外、または空の場合にエラーを返す。
    fn revert(&mut self, column: Column) -> Result<(), MoveError>;

    /// 4 つ並べた側があればその色を返す。
    fn winner(&self) -> Option<Color>;

    /// 終局（勝敗がついた、または盤が埋まった）かを返す。
    fn is_terminal(&self) -> bool;

    /// 手番を返す。
    fn side_to_move(&self) -> Color;

    /// 手番を上書きする（読みの中で相手番を模擬するため）。
    fn set_side_to_move(&mut self, color: Color);
}

/// 投機的な1手。生存中は着手済みで、破棄時に必ず取り消す。
///
/// ガードを入れ子にすると LIFO 順に取り消されるため、兄弟の読み筋が
/// 互いの仮局面を観測することはない。
#[derive(Debug)]
pub struct Speculation<'board, B: Board> {
    /// 着手中の盤面。
    board: &'board mut B,
    /// 着手した列。
    column: Column,
}

impl<'board, B: Board> Speculation<'board, B> {
    /// `column` に着手してガードを返す。
    ///
    /// # Errors
    ///
    /// 盤面が着手を拒否した場合はそのエラーを返す（盤面は変化しない）。
    #[inline]
    pub fn apply(board: &'board mut B, column: Column) -> Result<Self, MoveError> {
        match board.apply(column) {
            Ok(()) => Ok(Self { board, column }),
            Err(err) => Err(err),
        }
    }

    /// 着手した列を返す。
    #[inline]
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }
}

impl<B: Board> Deref for Speculation<'_, B> {
    type Target = B;

    #[inline]
    fn deref(&self) -> &B {
        &*self.board
    }
}

impl<B: Board> DerefMut for Speculation<'_, B> {
    #[inline]
    fn deref_mut(&mut self) -> &mut B {
        &mut *self.board
    }
}

impl<B: Board> Drop for Speculation<'_, B> {
    #[inline]
    fn drop(&mut self) {
        if let Err(err) = self.board.revert(self.column) {
            tracing::error!(
                column = self.column.index(),
                %err,
                "speculative move could not be reverted"
            );
        }
    }
}

/// 手番の一時的な上書き。破棄時に元の手番へ戻す。
#[derive(Debug)]
pub struct TurnOverride<'board, B: Board> {
    /// 上書き中の盤面。
    board: &'board mut B,
    /// 上書き前の手番。
    saved: Color,
}

impl<'board, B: Board> TurnOverride<'board, B> {
    /// 手番を `color` に上書きしてガードを返す。
    #[inline]
    pub fn new(board: &'board mut B, color: Color) -> Self {
        let saved = board.side_to_move();
        board.set_side_to_move(color);
        Self { board, saved }
    }
}

impl<B: Board> Deref for TurnOverride<'_, B> {
    type Target = B;

    #[inline]
    fn deref(&self) -> &B {
        &*self.board
    }
}

impl<B: Board> DerefMut for TurnOverride<'_, B> {
    #[inline]
    fn deref_mut(&mut self) -> &mut B {
        &mut *self.board
    }
}

impl<B: Board> Drop for TurnOverride<'_, B> {
    #[inline]
    fn drop(&mut self) {
        self.board.set_side_to_move(self.saved);
    }
}
