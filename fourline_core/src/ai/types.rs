use rand::Rng;

use crate::engine::board::Board;
use crate::engine::types::{Color, Column};

/// 評価値。大きいほど AI に有利で、決着した局面だけが ±∞ になる。
pub type Score = f64;

/// 候補手を採点する評価関数。
pub trait Evaluate {
    /// 評価の視点となる色（AI 側）を返す。
    fn perspective(&self) -> Color;

    /// `candidate` を指した仮局面を採点する。
    ///
    /// 盤面は呼び出し前の状態（手番を含む）に戻してから返すこと。
    fn evaluate<B: Board>(&self, board: &mut B, candidate: Column) -> Score;
}

/// 盤面と評価関数から1手を提案する戦略。
pub trait Strategy {
    /// 提案する列を返す。合法手が無い場合は `None`。
    fn propose<B: Board, E: Evaluate, R: Rng>(
        &self,
        board: &mut B,
        evaluator: &E,
        rng: &mut R,
    ) -> Option<Column>;
}

/// 手を選択するAI。
pub trait Ai {
    /// 現在局面から次の手を選択する。合法手が無い場合は `None`。
    fn select_move<B: Board>(&mut self, board: &mut B) -> Option<Column>;
}
