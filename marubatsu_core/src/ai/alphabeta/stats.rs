/// 探索統計。制御には使わず、診断としてのみ報告する。
#[derive(Default, Clone, Copy, Debug)]
pub(super) struct SearchStats {
    /// ベータカットで枝刈りした回数。
    cutoffs: u64,
    /// 訪問したノード数（ルート含む）。
    nodes: u64,
}

impl SearchStats {
    #[cfg(test)]
    /// 枝刈り回数を返す（テスト用）。
    pub(super) const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈り（ベータカット）の回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 訪問ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 訪問ノード数を返す。
    pub(super) const fn nodes(&self) -> u64 {
        self.nodes
    }
}
