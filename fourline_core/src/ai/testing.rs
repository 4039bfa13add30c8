//! テスト用の評価関数。

use core::cell::Cell;

use crate::ai::types::{Evaluate, Score};
use crate::engine::board::Board;
use crate::engine::types::{Color, Column};

/// 呼び出し番号と列から決まった値を返す評価関数（盤面には触れない）。
pub(crate) struct Scripted<F> {
    /// 呼び出し回数。
    calls: Cell<usize>,
    /// (呼び出し番号, 列) から評価値を返す関数。
    score: F,
}

impl<F: Fn(usize, Column) -> Score> Scripted<F> {
    /// `score` で採点する評価関数を返す。
    pub(crate) const fn new(score: F) -> Self {
        Self {
            calls: Cell::new(0),
            score,
        }
    }

    /// これまでの呼び出し回数を返す。
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Fn(usize, Column) -> Score> Evaluate for Scripted<F> {
    fn perspective(&self) -> Color {
        Color::Red
    }

    fn evaluate<B: Board>(&self, _board: &mut B, candidate: Column) -> Score {
        let call = self.calls.get();
        self.calls.set(call + 1);
        (self.score)(call, candidate)
    }
}
