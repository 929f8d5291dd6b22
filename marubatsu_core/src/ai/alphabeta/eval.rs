use crate::engine::position::Position;

use super::SCORE_WIN;

/// 終局していれば手番視点の評価値を返す。
///
/// 直前に着手した相手側が勝っていれば負け（-10）、盤面が埋まっていれば
/// 引き分け（0）。手番側の勝ち（+10）は交互の着手では到達しないが、
/// 対称性のため判定は残す。
#[inline]
pub(super) fn terminal_score(position: Position) -> Option<i32> {
    let side = position.side_to_move();

    if position.has_won(side.opponent()) {
        return Some(SCORE_WIN.wrapping_neg());
    }

    if position.has_won(side) {
        return Some(SCORE_WIN);
    }

    if position.is_full() {
        return Some(0_i32);
    }

    None
}

/// 空きマス数。
#[inline]
pub(super) fn empty_count(position: Position) -> u8 {
    let empty_u32 = position.legal_moves().count_ones();
    u8::try_from(empty_u32).unwrap_or(u8::MAX)
}
