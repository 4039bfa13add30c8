use crate::ai::types::{Evaluate, Score};
use crate::engine::board::{Board, Speculation, TurnOverride};
use crate::engine::types::{Color, Column};

/// 中央列の支配の重み。
const WEIGHT_CENTER: Score = 3.0;

/// 勝ち筋の重み。
const WEIGHT_WINNING: Score = 10.0;

/// 相手の勝ち筋の重み。
const WEIGHT_BLOCKING: Score = 8.0;

/// 連結の重み。
const WEIGHT_CONNECTIVITY: Score = 5.0;

/// 即勝ちになる応手1つあたりの加点。
const WIN_BONUS: Score = 100.0;

/// 相手が即勝ちできる応手1つあたりの減点。
const THREAT_PENALTY: Score = 50.0;

/// 連結を数える方向（行, 列）：横・縦・斜め2方向。
const DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// 4つの部分評価の重み付き和で候補手を採点する評価関数。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Heuristic {
    /// AI 側の色。
    ai: Color,
}

impl Heuristic {
    /// `ai` の視点で採点する評価関数を返す。
    #[inline]
    #[must_use]
    pub const fn new(ai: Color) -> Self {
        Self { ai }
    }
}

impl Evaluate for Heuristic {
    #[inline]
    fn perspective(&self) -> Color {
        self.ai
    }

    /// 非合法な候補は盤面に触れずに −∞ を返す。
    #[inline]
    fn evaluate<B: Board>(&self, board: &mut B, candidate: Column) -> Score {
        let mut hypothetical = match Speculation::apply(board, candidate) {
            Ok(value) => value,
            Err(_err) => return Score::NEG_INFINITY,
        };

        let center = center_control(&*hypothetical, self.ai);
        let winning = winning_potential(&mut *hypothetical, self.ai);
        let blocking = blocking_value(&mut *hypothetical, self.ai);
        let connected = connectivity(&*hypothetical, self.ai);

        center * WEIGHT_CENTER
            + winning * WEIGHT_WINNING
            + blocking * WEIGHT_BLOCKING
            + connected * WEIGHT_CONNECTIVITY
    }
}

/// 中央列（`cols / 2`）にある AI の駒の数。
fn center_control<B: Board>(board: &B, ai: Color) -> Score {
    let center = board.cols().checked_div(2).unwrap_or(u8::MIN);
    let count = (u8::MIN..board.rows())
        .filter(|&row| board.cell(row, center) == Some(ai))
        .count();
    Score::from(u32::try_from(count).unwrap_or(u32::MAX))
}

/// 手番側の応手のうち、指した結果 AI の勝ちになるものごとに加点する。
fn winning_potential<B: Board>(board: &mut B, ai: Color) -> Score {
    let mut score: Score = 0.0;
    for column in board.legal_moves() {
        let reply = match Speculation::apply(&mut *board, column) {
            Ok(value) => value,
            Err(_err) => continue,
        };
        if reply.winner() == Some(ai) {
            score += WIN_BONUS;
        }
    }
    score
}

/// 各応手の後に相手番を模擬し、相手が即勝ちできる手ごとに減点する。
fn blocking_value<B: Board>(board: &mut B, ai: Color) -> Score {
    let opponent = ai.opponent();
    let mut score: Score = 0.0;

    for column in board.legal_moves() {
        let mut reply = match Speculation::apply(&mut *board, column) {
            Ok(value) => value,
            Err(_err) => continue,
        };
        let mut simulated = TurnOverride::new(&mut *reply, opponent);

        for threat in simulated.legal_moves() {
            let follow_up = match Speculation::apply(&mut *simulated, threat) {
                Ok(value) => value,
                Err(_err) => continue,
            };
            if follow_up.winner() == Some(opponent) {
                score -= THREAT_PENALTY;
            }
        }
    }
    score
}

/// AI の各駒から4方向へ続く連の長さの2乗和。
///
/// 連の途中の駒も起点として数えるため、長い連ほど大きく重複加算される。
fn connectivity<B: Board>(board: &B, ai: Color) -> Score {
    let rows = i16::from(board.rows());
    let cols = i16::from(board.cols());
    let mut total: u32 = 0;

    for row in 0..rows {
        for col in 0..cols {
            if owner(board, row, col) != Some(ai) {
                continue;
            }
            for (d_row, d_col) in DIRECTIONS {
                let run = run_length(board, ai, (row, col), (d_row, d_col));
                total = total.saturating_add(run.saturating_mul(run));
            }
        }
    }
    Score::from(total)
}

/// `start` から `step` 方向へ続く `ai` の駒の数（起点を含む）。
fn run_length<B: Board>(board: &B, ai: Color, start: (i16, i16), step: (i16, i16)) -> u32 {
    let (mut row, mut col) = start;
    let mut run: u32 = 0;
    while owner(board, row, col) == Some(ai) {
        run = run.saturating_add(1);
        row = row.saturating_add(step.0);
        col = col.saturating_add(step.1);
    }
    run
}

/// 符号付き座標でセルを引く（盤外は `None`）。
fn owner<B: Board>(board: &B, row: i16, col: i16) -> Option<Color> {
    match (u8::try_from(row), u8::try_from(col)) {
        (Ok(r), Ok(c)) => board.cell(r, c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Heuristic, blocking_value, center_control, connectivity, winning_potential};
    use crate::ai::types::{Evaluate as _, Score};
    use crate::engine::board::{Board as _, Speculation};
    use crate::engine::position::Position;
    use crate::engine::types::{Color, Column};

    fn position(moves: &[u8]) -> Position {
        Position::from_moves(moves).unwrap_or_else(|err| panic!("bad fixture {moves:?}: {err}"))
    }

    fn scores(pos: &mut Position) -> Vec<Score> {
        let evaluator = Heuristic::new(pos.side_to_move());
        pos.legal_moves()
            .into_iter()
            .map(|column| evaluator.evaluate(pos, column))
            .collect()
    }

    #[test]
    fn empty_board_prefers_the_center_column() {
        let mut pos = Position::standard();
        let got = scores(&mut pos);
        assert_eq!(got, vec![20.0, 20.0, 20.0, 23.0, 20.0, 20.0, 20.0]);
    }

    #[test]
    fn evaluation_leaves_the_board_untouched() {
        let mut pos = position(&[3, 3, 2, 4, 2]);
        let before = pos;
        let _: Vec<Score> = scores(&mut pos);
        assert_eq!(pos, before);
    }

    #[test]
    fn illegal_candidate_scores_negative_infinity() {
        let mut pos = position(&[0, 0, 0, 0, 0, 0]);
        let before = pos;
        let evaluator = Heuristic::new(pos.side_to_move());
        assert_eq!(evaluator.evaluate(&mut pos, Column::new(0)), Score::NEG_INFINITY);
        assert_eq!(evaluator.evaluate(&mut pos, Column::new(9)), Score::NEG_INFINITY);
        assert_eq!(pos, before);
    }

    #[test]
    fn sub_scores_of_a_completed_line() {
        // 黄が下段 1..=3 に3連、赤は列6に縦3連。黄の手番。
        let mut pos = position(&[6, 1, 6, 2, 5, 3, 6]);
        let ai = pos.side_to_move();
        let mut hypothetical = match Speculation::apply(&mut pos, Column::new(0)) {
            Ok(value) => value,
            Err(err) => panic!("column 0 must be legal: {err}"),
        };

        assert_eq!(center_control(&*hypothetical, ai), 1.0);
        // 赤が列6で勝つ応手だけは赤の勝ちとして判定される。
        assert_eq!(winning_potential(&mut *hypothetical, ai), 600.0);
        assert_eq!(blocking_value(&mut *hypothetical, ai), -650.0);
        assert_eq!(connectivity(&*hypothetical, ai), 42.0);
    }

    #[test]
    fn center_column_of_an_even_width_board() {
        let mut pos = Position::new(4, 4).unwrap_or_else(|err| panic!("{err}"));
        for col in [2, 1, 2] {
            assert!(pos.apply(Column::new(col)).is_ok());
        }
        assert_eq!(center_control(&pos, Color::Red), 2.0);
        assert_eq!(center_control(&pos, Color::Yellow), 0.0);
    }

    #[test]
    fn completing_four_outranks_every_other_candidate() {
        let mut pos = position(&[6, 1, 6, 2, 5, 3, 6]);
        let got = scores(&mut pos);
        assert_eq!(got, vec![1013.0, -5032.0, -5017.0, -5029.0, 1013.0, -5062.0, 138.0]);
    }

    #[test]
    fn blocking_an_open_three_outranks_ignoring_it() {
        // 黄が下段 2..=4 に3連（両端 1 と 5 が空き）。赤の手番。
        let mut pos = position(&[6, 2, 6, 3, 0, 4]);
        let got = scores(&mut pos);
        let blocks = [got[1], got[5]];
        for (index, score) in got.iter().enumerate() {
            if index == 1 || index == 5 {
                continue;
            }
            assert!(
                blocks.iter().all(|block| block > score),
                "blocking moves must outrank column {index}: {got:?}"
            );
        }
    }
}
