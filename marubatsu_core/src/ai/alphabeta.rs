use crate::ai::types::Ai;
use crate::engine::position::Position;
use crate::engine::types::Square;

/// 探索窓の初期境界（評価値の範囲 ±10 より十分広い値）。
const INF: i32 = 1000;

/// 勝ち局面の評価値。
const SCORE_WIN: i32 = 10;

mod eval;
mod search;
mod stats;


/// 1回の探索の結果（選択した手と診断情報）。
#[derive(Clone, Copy, Debug)]
pub struct Decision {
    /// 探索中に訪問したノード数（ルート含む）。
    nodes: u64,
    /// `square` の評価値（手番視点）。
    score: i32,
    /// 選択した手。
    square: Square,
}

impl Decision {
    /// 探索中に訪問したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(self) -> u64 {
        self.nodes
    }

    /// 選択した手の評価値を返す。
    #[inline]
    #[must_use]
    pub const fn score(self) -> i32 {
        self.score
    }

    /// 選択した手を返す。
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }
}

/// アルファベータ探索を行うAI。
///
/// 残り空きマス数を探索深さとするため、常に終局まで読み切る。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent;

impl Agent {
    /// 初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, position: Position) -> Option<Square> {
        choose_move(position).map(Decision::square)
    }
}

/// 現局面の手番側にとっての最善手を終局まで読み切って選択する。
///
/// すでに終局している局面では `None` を返す。
#[inline]
#[must_use]
pub fn choose_move(position: Position) -> Option<Decision> {
    let decision = search::search_root(position)?;

    tracing::debug!(
        nodes = decision.nodes(),
        score = decision.score(),
        square = decision.square().display_index(),
        "alphabeta decision"
    );

    Some(decision)
}
