use rand::rngs::StdRng;
use rand::{Rng, SeedableRng as _};

use crate::ai::alphabeta::Exhaustive;
use crate::ai::annealing::Annealing;
use crate::ai::config::{SearchConfig, StrategyKind};
use crate::ai::eval::Heuristic;
use crate::ai::hill_climb::HillClimb;
use crate::ai::types::{Ai, Evaluate, Strategy};
use crate::engine::board::Board;
use crate::engine::types::Column;

/// 設定から組み立てた戦略。
#[derive(Copy, Clone, Debug)]
enum Selector {
    /// アルファベータ探索。
    Exhaustive(Exhaustive),
    /// 山登り法。
    HillClimbing(HillClimb),
    /// 焼きなまし法。
    Annealing(Annealing),
}

impl Selector {
    /// `config` の戦略を組み立てる。
    const fn from_config(config: SearchConfig) -> Self {
        match config.strategy() {
            StrategyKind::Exhaustive => Self::Exhaustive(Exhaustive::new(config.depth())),
            StrategyKind::HillClimbing => Self::HillClimbing(HillClimb::new()),
            StrategyKind::Annealing => Self::Annealing(Annealing::new(config.temperature())),
        }
    }
}

impl Strategy for Selector {
    fn propose<B: Board, E: Evaluate, R: Rng>(
        &self,
        board: &mut B,
        evaluator: &E,
        rng: &mut R,
    ) -> Option<Column> {
        match self {
            Self::Exhaustive(strategy) => strategy.propose(board, evaluator, rng),
            Self::HillClimbing(strategy) => strategy.propose(board, evaluator, rng),
            Self::Annealing(strategy) => strategy.propose(board, evaluator, rng),
        }
    }
}

/// 設定された戦略で手を選び、結果が合法手であることを保証する AI。
///
/// 戦略が手を返さない、または非合法な手を返した場合は最初の合法手を指す。
/// 評価の視点は呼び出し時の手番側。
#[derive(Debug)]
pub struct Agent<R = StdRng> {
    /// 探索設定。
    config: SearchConfig,
    /// 乱数生成器（焼きなまし用）。
    rng: R,
}

impl Agent<StdRng> {
    /// OS の乱数で初期化する。
    #[inline]
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// `seed` を用いて決定的に初期化する。
    #[inline]
    #[must_use]
    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Agent<R> {
    /// 探索設定を返す。
    #[inline]
    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// 乱数生成器を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_rng(config: SearchConfig, rng: R) -> Self {
        Self { config, rng }
    }
}

impl<R: Rng> Agent<R> {
    /// `strategy` に手を提案させ、合法でなければ最初の合法手に差し替える。
    fn select_with<S: Strategy, B: Board>(
        &mut self,
        strategy: &S,
        board: &mut B,
    ) -> Option<Column> {
        let fallback = match board.legal_moves().first() {
            Some(&column) => column,
            None => return None,
        };

        let evaluator = Heuristic::new(board.side_to_move());
        match strategy.propose(board, &evaluator, &mut self.rng) {
            Some(column) if board.is_legal(column) => {
                tracing::debug!(column = column.index(), "move selected");
                Some(column)
            }
            other => {
                tracing::warn!(
                    proposed = ?other,
                    fallback = fallback.index(),
                    "strategy produced no legal move, playing the first legal column"
                );
                Some(fallback)
            }
        }
    }
}

impl<R: Rng> Ai for Agent<R> {
    #[inline]
    fn select_move<B: Board>(&mut self, board: &mut B) -> Option<Column> {
        let _span =
            tracing::debug_span!("select_move", strategy = self.config.strategy().name()).entered();
        let strategy = Selector::from_config(self.config);
        self.select_with(&strategy, board)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::Agent;
    use crate::ai::alphabeta::search_root;
    use crate::ai::config::{SearchConfig, StrategyKind};
    use crate::ai::eval::Heuristic;
    use crate::ai::types::{Ai as _, Evaluate, Strategy};
    use crate::engine::board::Board;
    use crate::engine::position::Position;
    use crate::engine::types::Column;

    fn position(moves: &[u8]) -> Position {
        Position::from_moves(moves).unwrap_or_else(|err| panic!("bad fixture {moves:?}: {err}"))
    }

    #[test]
    fn default_config_plays_the_center_on_an_empty_board() {
        let mut agent = Agent::seeded(SearchConfig::default(), 0);
        let mut pos = Position::standard();
        assert_eq!(agent.select_move(&mut pos), Some(Column::new(3)));
    }

    #[test]
    fn lost_position_falls_back_to_the_first_legal_column() {
        // 深さ2では全手が −∞ になり、探索は手を返さない。
        let mut pos = position(&[6, 2, 6, 3, 0, 4]);
        let evaluator = Heuristic::new(pos.side_to_move());
        assert_eq!(search_root(&mut pos, &evaluator, 2).best_move(), None);

        let mut agent = Agent::seeded(SearchConfig::default().with_depth(2), 0);
        assert_eq!(agent.select_move(&mut pos), Some(Column::new(0)));
    }

    #[test]
    fn fallback_skips_full_columns() {
        let mut pos = position(&[0, 0, 0, 0, 0, 0, 6, 2, 6, 3, 2, 4]);
        let mut agent = Agent::seeded(SearchConfig::default().with_depth(2), 0);
        assert_eq!(agent.select_move(&mut pos), Some(Column::new(1)));
    }

    /// 評価せずに決まった列を返す戦略。
    struct Fixed(Column);

    impl Strategy for Fixed {
        fn propose<B: Board, E: Evaluate, R: Rng>(
            &self,
            _board: &mut B,
            _evaluator: &E,
            _rng: &mut R,
        ) -> Option<Column> {
            Some(self.0)
        }
    }

    #[test]
    fn illegal_proposal_is_replaced_by_the_first_legal_column() {
        // 列0 は満杯。
        let mut pos = position(&[0, 0, 0, 0, 0, 0]);
        let before = pos;
        let mut agent = Agent::seeded(SearchConfig::default(), 0);

        let got = agent.select_with(&Fixed(Column::new(0)), &mut pos);
        assert_eq!(got, Some(Column::new(1)));
        let got = agent.select_with(&Fixed(Column::new(9)), &mut pos);
        assert_eq!(got, Some(Column::new(1)));
        let got = agent.select_with(&Fixed(Column::new(4)), &mut pos);
        assert_eq!(got, Some(Column::new(4)));
        assert_eq!(pos, before);
    }

    #[test]
    fn no_legal_moves_yields_none_for_every_strategy() {
        for kind in [
            StrategyKind::Exhaustive,
            StrategyKind::HillClimbing,
            StrategyKind::Annealing,
        ] {
            let mut pos = Position::new(1, 2).unwrap_or_else(|err| panic!("{err}"));
            assert!(pos.apply(Column::new(0)).is_ok());
            assert!(pos.apply(Column::new(1)).is_ok());

            let mut agent = Agent::seeded(SearchConfig::new(kind), 0);
            assert_eq!(agent.select_move(&mut pos), None, "strategy={kind:?}");
        }
    }

    #[test]
    fn every_strategy_selects_a_legal_move_and_restores_the_board() {
        for kind in [
            StrategyKind::Exhaustive,
            StrategyKind::HillClimbing,
            StrategyKind::Annealing,
        ] {
            let mut pos = position(&[3, 3, 2, 4, 2, 0, 0, 0, 0, 0, 0]);
            let before = pos;
            let mut agent = Agent::seeded(SearchConfig::new(kind).with_depth(3), 1);

            let got = agent
                .select_move(&mut pos)
                .unwrap_or_else(|| panic!("strategy={kind:?} returned no move"));
            assert_eq!(pos, before, "strategy={kind:?}");
            assert!(pos.is_legal(got), "strategy={kind:?} chose {got:?}");
        }
    }
}
