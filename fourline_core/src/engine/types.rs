/// 手番（駒の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手（player-1）。
    Red,
    /// 後手（player-2）。慣例では AI 側。
    Yellow,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}

/// 駒を落とす列（0 始まりのインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Column(u8);

impl Column {
    /// インデックスから `Column` を生成する（盤幅のチェックは盤面側で行う）。
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// 0 始まりのインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for Column {
    #[inline]
    fn from(index: u8) -> Self {
        Self(index)
    }
}

/// 着手・取り消しに失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MoveError {
    /// 列が盤の範囲外。
    #[error("column {0} is outside the board")]
    OutOfRange(u8),
    /// 列が埋まっている。
    #[error("column {0} is full")]
    ColumnFull(u8),
    /// 取り消す駒が列に無い。
    #[error("column {0} has no piece to revert")]
    ColumnEmpty(u8),
}
