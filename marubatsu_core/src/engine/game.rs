use crate::engine::position::{ApplyMoveError, Position};
use crate::engine::types::{Mark, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局。引き分けの場合 `winner` は `None`。
    GameOver {
        /// 勝者の記号。
        winner: Option<Mark>,
    },
    /// 進行中。
    InProgress,
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定マスが空いていない。
    IllegalMove,
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の局面。
    position: Position,
}

impl Game {
    /// 初期局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            position: Position::initial(),
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(self) -> bool {
        self.position.is_terminal()
    }

    /// 1手を適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが空いていない場合
    ///
    #[inline]
    pub fn play(&mut self, square: Square) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let next = match self.position.apply_move(square) {
            Ok(next_position) => next_position,
            Err(err) => {
                return Err(match err {
                    ApplyMoveError::IllegalMove => PlayError::IllegalMove,
                });
            }
        };

        self.position = next;
        Ok(self.status())
    }

    /// 現在の局面を返す。
    #[inline]
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Mark {
        self.position.side_to_move()
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(self) -> Status {
        if self.is_game_over() {
            return Status::GameOver {
                winner: self.position.winner(),
            };
        }

        Status::InProgress
    }
}
