use crate::engine::position::Position;
use crate::engine::types::Square;

use super::Decision;
use super::INF;
use super::eval::{empty_count, terminal_score};
use super::stats::SearchStats;

/// ルート探索（終局までの完全読み）。
///
/// 候補手をインデックス昇順に列挙し、最初に最大評価を得た手を選ぶ
/// （同評価なら先に見つかった手を保持する）。ルートでは探索窓を候補手間で
/// 共有せず、各候補手を全開の窓（±1000）で評価する。
pub(super) fn search_root(position: Position) -> Option<Decision> {
    if position.is_terminal() {
        return None;
    }

    let legal_moves = position.legal_moves();

    let depth = empty_count(position);
    let next_depth = depth.wrapping_sub(1);

    let mut stats = SearchStats::default();
    stats.inc_nodes();

    let mut best_score = INF.wrapping_neg();
    let mut best_square: Option<Square> = None;
    let mut bb = legal_moves;

    while bb != u16::MIN {
        let choice = bb & bb.wrapping_neg();
        let square_opt = square_from_bit(choice);

        let square = if let Some(value) = square_opt {
            value
        } else {
            bb &= bb.wrapping_sub(1);
            continue;
        };

        let next = match position.apply_move(square) {
            Ok(value) => value,
            Err(_err) => {
                bb &= bb.wrapping_sub(1);
                continue;
            }
        };

        let score = negamax(next, next_depth, INF.wrapping_neg(), INF, &mut stats).wrapping_neg();
        if score > best_score {
            best_score = score;
            best_square = Some(square);
        }

        bb &= bb.wrapping_sub(1);
    }

    best_square.map(|square| Decision {
        nodes: stats.nodes(),
        score: best_score,
        square,
    })
}

/// ネガマックス（αβ付き）。
///
/// 深さは残り空きマス数から始まるため、打ち切りより先に必ず終局に到達する。
pub(super) fn negamax(
    position: Position,
    depth: u8,
    alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.inc_nodes();

    if let Some(score) = terminal_score(position) {
        return score;
    }

    if depth == u8::MIN {
        return 0_i32;
    }

    let mut best = INF.wrapping_neg();
    let mut alpha_mut = alpha;
    let mut bb = position.legal_moves();
    let next_depth = depth.wrapping_sub(1);

    while bb != u16::MIN {
        let choice = bb & bb.wrapping_neg();
        let square_opt = square_from_bit(choice);

        let square = if let Some(value) = square_opt {
            value
        } else {
            bb &= bb.wrapping_sub(1);
            continue;
        };

        let next = match position.apply_move(square) {
            Ok(value) => value,
            Err(_err) => {
                bb &= bb.wrapping_sub(1);
                continue;
            }
        };

        let score = negamax(
            next,
            next_depth,
            beta.wrapping_neg(),
            alpha_mut.wrapping_neg(),
            stats,
        )
        .wrapping_neg();
        if score > best {
            best = score;
        }

        if best > alpha_mut {
            alpha_mut = best;
        }

        if alpha_mut >= beta {
            stats.inc_cutoffs();
            break;
        }

        bb &= bb.wrapping_sub(1);
    }

    best
}

/// 1ビットのビットボードから `Square` を生成する。
pub(super) fn square_from_bit(bit: u16) -> Option<Square> {
    if bit == u16::MIN {
        return None;
    }

    let index_u32 = bit.trailing_zeros();
    let index_u8 = match u8::try_from(index_u32) {
        Ok(value) => value,
        Err(_conversion_error) => return None,
    };

    Some(Square::from_index_unchecked(index_u8))
}
