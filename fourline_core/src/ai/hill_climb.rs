use rand::Rng;

use crate::ai::config::HILL_CLIMB_PASSES;
use crate::ai::types::{Evaluate, Score, Strategy};
use crate::engine::board::Board;
use crate::engine::types::Column;

/// 1手先の候補を局所探索する山登り法。
///
/// 各走査では現在手以外の全候補を評価し直し、現在の評価値を厳密に上回る
/// 候補が出るたびに採用する（同じ走査の後続候補も続けて比較する）。
/// 改善の無い走査が出たら局所最適として打ち切る。
#[derive(Copy, Clone, Debug, Default)]
#[non_exhaustive]
pub struct HillClimb;

impl HillClimb {
    /// 初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for HillClimb {
    #[inline]
    fn propose<B: Board, E: Evaluate, R: Rng>(
        &self,
        board: &mut B,
        evaluator: &E,
        _rng: &mut R,
    ) -> Option<Column> {
        let moves = board.legal_moves();
        let mut current: Option<(Column, Score)> = None;
        for &column in &moves {
            let score = evaluator.evaluate(board, column);
            if current.is_none_or(|(_, best)| score > best) {
                current = Some((column, score));
            }
        }
        let (mut current_move, mut current_score) = match current {
            Some(value) => value,
            None => return None,
        };

        for pass in u8::MIN..HILL_CLIMB_PASSES {
            let mut improved = false;
            for &column in &moves {
                if column == current_move {
                    continue;
                }
                let score = evaluator.evaluate(board, column);
                if score > current_score {
                    current_move = column;
                    current_score = score;
                    improved = true;
                }
            }

            if !improved {
                tracing::trace!(pass, "hill climbing reached a local optimum");
                break;
            }
        }

        tracing::debug!(
            column = current_move.index(),
            score = current_score,
            "hill climbing finished"
        );
        Some(current_move)
    }
}
