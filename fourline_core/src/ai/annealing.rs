use rand::Rng;

use crate::ai::config::{ANNEALING_ITERATIONS, COOLING_FACTOR, TEMPERATURE_FLOOR};
use crate::ai::types::{Evaluate, Strategy};
use crate::engine::board::Board;
use crate::engine::types::Column;

/// 焼きなまし法による確率的な局所探索。
///
/// 候補は毎回合法手から一様に選ぶ（現在手と同じでもよい）。悪化する候補は
/// 確率 `exp(delta / T)` で受理し、温度は1反復ごとに `COOLING_FACTOR` 倍になる。
/// 返すのは最後の現在手ではなく、受理した中で最も評価の高い手。
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub struct Annealing {
    /// 初期温度。
    temperature: f64,
}

impl Annealing {
    /// 初期温度 `temperature` で初期化する。
    #[inline]
    #[must_use]
    pub const fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    /// 初期温度を返す。
    #[inline]
    #[must_use]
    pub const fn temperature(self) -> f64 {
        self.temperature
    }
}

impl Strategy for Annealing {
    #[inline]
    fn propose<B: Board, E: Evaluate, R: Rng>(
        &self,
        board: &mut B,
        evaluator: &E,
        rng: &mut R,
    ) -> Option<Column> {
        let moves = board.legal_moves();
        let mut current_move = match pick(&moves, rng) {
            Some(value) => value,
            None => return None,
        };
        let mut current_score = evaluator.evaluate(board, current_move);
        let mut best_move = current_move;
        let mut best_score = current_score;
        let mut temperature = self.temperature;

        for iteration in u8::MIN..ANNEALING_ITERATIONS {
            if temperature < TEMPERATURE_FLOOR {
                tracing::trace!(iteration, temperature, "annealing cooled below the floor");
                break;
            }

            let next_move = match pick(&moves, rng) {
                Some(value) => value,
                None => break,
            };
            let next_score = evaluator.evaluate(board, next_move);

            let delta = next_score - current_score;
            if delta > 0.0 || rng.random::<f64>() < (delta / temperature).exp() {
                current_move = next_move;
                current_score = next_score;

                if current_score > best_score {
                    best_move = current_move;
                    best_score = current_score;
                }
            }

            temperature *= COOLING_FACTOR;
        }

        tracing::debug!(
            column = best_move.index(),
            score = best_score,
            "simulated annealing finished"
        );
        Some(best_move)
    }
}

/// 合法手から一様に1手選ぶ（空なら `None`）。
fn pick<R: Rng>(moves: &[Column], rng: &mut R) -> Option<Column> {
    if moves.is_empty() {
        return None;
    }
    moves.get(rng.random_range(0..moves.len())).copied()
}
