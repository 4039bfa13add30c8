use crate::ai::types::{Evaluate, Score};
use crate::engine::board::{Board, Speculation};
use crate::engine::types::{Color, Column};

use super::limits::SearchStats;

/// 探索結果。
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// ルートで選択した最善手（全手が −∞ の場合は `None`）。
    best_move: Option<Column>,
    /// `best_move` の評価値。
    best_score: Score,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// ルートで選択した最善手を返す。
    #[inline]
    #[must_use]
    pub const fn best_move(self) -> Option<Column> {
        self.best_move
    }

    /// `best_move` の評価値を返す。
    #[inline]
    #[must_use]
    pub const fn best_score(self) -> Score {
        self.best_score
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(self) -> SearchStats {
        self.stats
    }
}

/// 探索実行に必要な共有コンテキスト。
pub(super) struct SearchContext<'ctx, E> {
    /// 評価関数。
    evaluator: &'ctx E,
    /// 探索統計。
    stats: SearchStats,
}

impl<'ctx, E: Evaluate> SearchContext<'ctx, E> {
    /// 評価関数を返す。
    pub(super) const fn evaluator(&self) -> &'ctx E {
        self.evaluator
    }

    /// 探索コンテキストを生成する。
    pub(super) const fn new(evaluator: &'ctx E) -> Self {
        Self {
            evaluator,
            stats: SearchStats::new(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}

/// ルート探索。
///
/// 合法手を昇順に試し、厳密に大きい評価値だけで最善手を更新する
/// （同点は左の列が残る）。ルートの `alpha` は兄弟間の最善値で更新する。
#[inline]
pub fn search_root<B: Board, E: Evaluate>(
    board: &mut B,
    evaluator: &E,
    depth: u8,
) -> SearchResult {
    let mut ctx = SearchContext::new(evaluator);
    let mut best_move: Option<Column> = None;
    let mut best_score = Score::NEG_INFINITY;
    let mut alpha = Score::NEG_INFINITY;
    let beta = Score::INFINITY;
    let next_depth = depth.saturating_sub(1);

    for column in board.legal_moves() {
        let score = match Speculation::apply(&mut *board, column) {
            Ok(mut child) => minimax(&mut *child, next_depth, false, alpha, beta, &mut ctx),
            Err(_err) => continue,
        };
        tracing::trace!(column = column.index(), score, "root move scored");

        if score > best_score {
            best_score = score;
            best_move = Some(column);
        }
        alpha = alpha.max(best_score);
    }

    SearchResult {
        best_move,
        best_score,
        stats: ctx.stats(),
    }
}

/// ミニマックス（αβ付き）。`maximizing` は AI の手番かどうか。
pub(super) fn minimax<B: Board, E: Evaluate>(
    board: &mut B,
    depth: u8,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    ctx: &mut SearchContext<'_, E>,
) -> Score {
    ctx.stats_mut().inc_nodes();

    if board.is_terminal() {
        return terminal_score(&*board, ctx.evaluator().perspective());
    }
    if depth == u8::MIN {
        ctx.stats_mut().inc_evaluations();
        return leaf_score(board, ctx.evaluator());
    }

    let next_depth = depth.wrapping_sub(1);
    let mut best = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };

    for column in board.legal_moves() {
        let score = match Speculation::apply(&mut *board, column) {
            Ok(mut child) => minimax(&mut *child, next_depth, !maximizing, alpha, beta, ctx),
            Err(_err) => continue,
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    best
}

/// 終局の評価（AI 視点）：勝ち +∞、負け −∞、引き分け 0。
pub(super) fn terminal_score<B: Board>(board: &B, ai: Color) -> Score {
    match board.winner() {
        Some(color) if color == ai => Score::INFINITY,
        Some(_) => Score::NEG_INFINITY,
        None => 0.0,
    }
}

/// 深さ切れの葉の評価。
///
/// 局面全体ではなく、最初の合法手1つを評価関数にかけた値で近似する。
fn leaf_score<B: Board, E: Evaluate>(board: &mut B, evaluator: &E) -> Score {
    match board.legal_moves().first() {
        Some(&column) => evaluator.evaluate(board, column),
        None => 0.0,
    }
}
