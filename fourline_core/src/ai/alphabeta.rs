use rand::Rng;

use crate::ai::types::{Evaluate, Strategy};
use crate::engine::board::Board;
use crate::engine::types::Column;

/// 探索統計。
mod limits;
/// ルート探索とミニマックス本体。
mod search;

pub use limits::SearchStats;
pub use search::{SearchResult, search_root};

/// 深さ制限付きのアルファベータ探索を行う戦略。
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub struct Exhaustive {
    /// 探索深さ。
    depth: u8,
}

impl Exhaustive {
    /// 探索深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// `depth` を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self { depth }
    }
}

impl Strategy for Exhaustive {
    #[inline]
    fn propose<B: Board, E: Evaluate, R: Rng>(
        &self,
        board: &mut B,
        evaluator: &E,
        _rng: &mut R,
    ) -> Option<Column> {
        let depth = normalize_depth(self.depth);
        let result = search_root(board, evaluator, depth);
        let stats = result.stats();
        tracing::debug!(
            depth,
            score = result.best_score(),
            nodes = stats.nodes(),
            cutoffs = stats.cutoffs(),
            evaluations = stats.evaluations(),
            "minimax search finished"
        );
        result.best_move()
    }
}

/// 探索深さを正規化する（0の場合は1にする）。
#[inline]
const fn normalize_depth(depth: u8) -> u8 {
    if depth == u8::MIN {
        u8::MIN.wrapping_add(1)
    } else {
        depth
    }
}
