/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// ベータカット等で枝刈りした回数。
    cutoffs: u64,
    /// 葉で評価関数を呼んだ回数。
    evaluations: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りの回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 葉で評価関数を呼んだ回数を返す。
    #[inline]
    #[must_use]
    pub const fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// 探索ノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// すべて 0 の統計を返す。
    pub(super) const fn new() -> Self {
        Self {
            cutoffs: 0,
            evaluations: 0,
            nodes: 0,
        }
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 葉の評価回数を加算する。
    pub(super) const fn inc_evaluations(&mut self) {
        self.evaluations = self.evaluations.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }
}
