use crate::engine::board::Board;
use crate::engine::types::{Color, Column, MoveError};

/// 標準盤の行数。
pub const STANDARD_ROWS: u8 = 6;

/// 標準盤の列数。
pub const STANDARD_COLS: u8 = 7;

/// 勝利に必要な連結数。
pub const CONNECT: u32 = 4;

/// ビットボードの総ビット数。
const BOARD_BITS: u32 = 64;

/// `u64` の 1 を表す値。
const U64_ONE: u64 = u64::MIN.wrapping_add(1);

/// 盤の寸法が扱えない理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum DimensionError {
    /// 行数または列数が 0。
    #[error("board must have at least one row and one column")]
    Empty,
    /// 番兵ビット込みで 64 ビットに収まらない。
    #[error("a {rows}x{cols} board does not fit in a 64-bit board")]
    TooLarge {
        /// 指定された行数。
        rows: u8,
        /// 指定された列数。
        cols: u8,
    },
}

/// 局面（盤面＋手番）。
///
/// 列優先のビットボードで、各列の最上段の上に番兵ビットを1つ置く
/// （列 `c`・行 `r` のビット位置は `c * (rows + 1) + r`）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    /// 列数。
    cols: u8,
    /// 赤（先手）のビットボード。
    red: u64,
    /// 行数。
    rows: u8,
    /// 手番。
    side_to_move: Color,
    /// 黄（後手）のビットボード。
    yellow: u64,
}

impl Position {
    /// 棋譜（列インデックスの列）を標準盤の初期局面から適用した局面を返す。
    ///
    /// # Errors
    ///
    /// 途中の着手が不正な場合、その `MoveError` を返す。
    #[inline]
    pub fn from_moves(moves: &[u8]) -> Result<Self, MoveError> {
        let mut position = Self::standard();
        for &index in moves {
            if let Err(err) = position.apply(Column::new(index)) {
                return Err(err);
            }
        }
        Ok(position)
    }

    /// 指定した寸法の空の盤を返す（先手は赤）。
    ///
    /// # Errors
    ///
    /// 行数・列数が 0 の場合、または `(rows + 1) * cols > 64` の場合にエラーを返す。
    #[inline]
    pub fn new(rows: u8, cols: u8) -> Result<Self, DimensionError> {
        if rows == u8::MIN || cols == u8::MIN {
            return Err(DimensionError::Empty);
        }

        let stride = u32::from(rows).wrapping_add(1);
        let bits = stride.saturating_mul(u32::from(cols));
        if bits > BOARD_BITS {
            return Err(DimensionError::TooLarge { rows, cols });
        }

        Ok(Self {
            cols,
            red: u64::MIN,
            rows,
            side_to_move: Color::Red,
            yellow: u64::MIN,
        })
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> u64 {
        self.red | self.yellow
    }

    /// 赤のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn red(self) -> u64 {
        self.red
    }

    /// 6 行 7 列の空の標準盤を返す。
    #[inline]
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            cols: STANDARD_COLS,
            red: u64::MIN,
            rows: STANDARD_ROWS,
            side_to_move: Color::Red,
            yellow: u64::MIN,
        }
    }

    /// 黄のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn yellow(self) -> u64 {
        self.yellow
    }

    /// 指定色のビットボードを返す。
    const fn bits_of(self, color: Color) -> u64 {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
        }
    }

    /// 列 `col` の最下段のビット位置を返す。
    fn column_base(self, col: u8) -> u32 {
        self.stride().wrapping_mul(u32::from(col))
    }

    /// 1 列分（番兵を除く）のマスク。
    fn column_mask(self) -> u64 {
        bit_at(u32::from(self.rows)).wrapping_sub(1)
    }

    /// 列 `col` に積まれた駒の数を返す。
    fn height(self, col: u8) -> u8 {
        let column = self
            .occupied()
            .checked_shr(self.column_base(col))
            .unwrap_or(u64::MIN)
            & self.column_mask();
        u8::try_from(column.count_ones()).unwrap_or(u8::MAX)
    }

    /// 盤が埋まっているかを返す。
    fn is_full(self) -> bool {
        let cells = u32::from(self.rows).wrapping_mul(u32::from(self.cols));
        self.occupied().count_ones() >= cells
    }

    /// 指定色のビットボードを書き換える。
    const fn set_bits(&mut self, color: Color, bits: u64) {
        match color {
            Color::Red => self.red = bits,
            Color::Yellow => self.yellow = bits,
        }
    }

    /// 1 列分のビット幅（番兵込み）。
    fn stride(self) -> u32 {
        u32::from(self.rows).wrapping_add(1)
    }
}

impl Board for Position {
    #[inline]
    fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    fn cols(&self) -> u8 {
        self.cols
    }

    #[inline]
    fn cell(&self, row: u8, col: u8) -> Option<Color> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        let mask = bit_at(self.column_base(col).wrapping_add(u32::from(row)));
        if self.red & mask != u64::MIN {
            Some(Color::Red)
        } else if self.yellow & mask != u64::MIN {
            Some(Color::Yellow)
        } else {
            None
        }
    }

    #[inline]
    fn legal_moves(&self) -> Vec<Column> {
        (u8::MIN..self.cols)
            .filter(|&col| self.height(col) < self.rows)
            .map(Column::new)
            .collect()
    }

    #[inline]
    fn is_legal(&self, column: Column) -> bool {
        let col = column.index();
        col < self.cols && self.height(col) < self.rows
    }

    #[inline]
    fn apply(&mut self, column: Column) -> Result<(), MoveError> {
        let col = column.index();
        if col >= self.cols {
            return Err(MoveError::OutOfRange(col));
        }

        let height = self.height(col);
        if height >= self.rows {
            return Err(MoveError::ColumnFull(col));
        }

        let mask = bit_at(self.column_base(col).wrapping_add(u32::from(height)));
        let side = self.side_to_move;
        self.set_bits(side, self.bits_of(side) | mask);
        self.side_to_move = side.opponent();
        Ok(())
    }

    #[inline]
    fn revert(&mut self, column: Column) -> Result<(), MoveError> {
        let col = column.index();
        if col >= self.cols {
            return Err(MoveError::OutOfRange(col));
        }

        let height = self.height(col);
        if height == u8::MIN {
            return Err(MoveError::ColumnEmpty(col));
        }

        let top = u32::from(height.wrapping_sub(1));
        let mask = bit_at(self.column_base(col).wrapping_add(top));
        let owner = if self.red & mask != u64::MIN {
            Color::Red
        } else {
            Color::Yellow
        };
        self.set_bits(owner, self.bits_of(owner) & !mask);
        self.side_to_move = owner;
        Ok(())
    }

    #[inline]
    fn winner(&self) -> Option<Color> {
        let stride = self.stride();
        if has_four(self.red, stride) {
            Some(Color::Red)
        } else if has_four(self.yellow, stride) {
            Some(Color::Yellow)
        } else {
            None
        }
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }
}

/// 指定位置だけが立ったビットボードを返す。
fn bit_at(index: u32) -> u64 {
    U64_ONE.checked_shl(index).unwrap_or(u64::MIN)
}

/// `bits` に4連（縦・横・斜め2方向）があるかを返す。
///
/// 番兵行があるため、シフトが列をまたいで回り込むことはない。
fn has_four(bits: u64, stride: u32) -> bool {
    let shifts = [
        1,
        stride,
        stride.wrapping_add(1),
        stride.wrapping_sub(1),
    ];

    shifts.into_iter().any(|shift| {
        let pairs = bits & bits.checked_shr(shift).unwrap_or(u64::MIN);
        let span = shift.saturating_mul(CONNECT.wrapping_sub(2));
        pairs & pairs.checked_shr(span).unwrap_or(u64::MIN) != u64::MIN
    })
}
