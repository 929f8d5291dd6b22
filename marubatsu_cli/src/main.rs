//! 端末（標準入出力）で動作する最小 UI。
//!
//! 記号選択・着手入力の検証ループと盤面描画のみを担当し、
//! ルールと探索は `marubatsu_core` に委ねる。

use std::io::{self, BufRead, Write};

use marubatsu_core::ai::alphabeta;
use marubatsu_core::engine;

/// 行区切りの罫線。
const ROW_SEPARATOR: &str = "---+---+---";

fn main() -> io::Result<()> {
    // 構造化ログは stderr へ出し、ゲーム画面（stdout）と混ざらないようにする。
    tracing_subscriber::fmt()
        .json()
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())
}

/// ゲーム全体を1回実行する。入力が尽きた（EOF）場合は静かに終了する。
fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    let human = match prompt_mark(input, output)? {
        Some(value) => value,
        None => return Ok(()),
    };
    let computer = human.opponent();

    writeln!(output, "Welcome to Tic Tac Toe!")?;
    writeln!(output, "You are playing as {}.", human.as_char())?;
    writeln!(output, "The AI is playing as {}.", computer.as_char())?;
    writeln!(output, "Enter a number from 1-9 to make your move:")?;
    writeln!(output)?;

    let mut game = engine::Game::initial();

    while !game.is_game_over() {
        write!(output, "{}", render_board(game.position()))?;

        if game.side_to_move() == human {
            if !human_turn(&mut game, input, output)? {
                return Ok(());
            }
        } else {
            computer_turn(&mut game, output)?;
        }
    }

    write!(output, "{}", render_board(game.position()))?;
    writeln!(output)?;
    writeln!(output, "{}", outcome_message(game.status(), human))?;
    Ok(())
}

/// 記号選択のプロンプト。`X` か `O` が入力されるまで再入力を促す。
fn prompt_mark<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<engine::Mark>> {
    write!(output, "Do you want to play as X or O? (X goes first): ")?;
    output.flush()?;

    loop {
        let line = match read_trimmed_line(input)? {
            Some(value) => value,
            None => return Ok(None),
        };

        if let Some(mark) = parse_mark(&line) {
            return Ok(Some(mark));
        }

        write!(output, "Invalid choice. Please choose X or O: ")?;
        output.flush()?;
    }
}

/// 人間の1手。合法手が適用されるまで再入力を促す。
///
/// EOF に達した場合は `false` を返す。
fn human_turn<R: BufRead, W: Write>(
    game: &mut engine::Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    loop {
        writeln!(output)?;
        writeln!(output, "Your move (1-9):")?;
        output.flush()?;

        let line = match read_trimmed_line(input)? {
            Some(value) => value,
            None => return Ok(false),
        };

        let square = match parse_square(&line) {
            Some(value) => value,
            None => {
                writeln!(output, "Invalid input. Enter a number 1-9.")?;
                continue;
            }
        };

        match game.play(square) {
            Ok(_status) => return Ok(true),
            Err(engine::PlayError::IllegalMove) => {
                writeln!(output, "That position is taken. Try again.")?;
            }
            Err(_err) => return Ok(true),
        }
    }
}

/// コンピュータの1手。選んだ位置と探索ノード数を報告する。
fn computer_turn<W: Write>(game: &mut engine::Game, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "AI is making a move...")?;

    let decision = match alphabeta::choose_move(game.position()) {
        Some(value) => value,
        None => return Ok(()),
    };

    writeln!(output, "AI chose position {}.", decision.square().display_index())?;
    writeln!(output, "Nodes explored: {}", decision.nodes())?;
    writeln!(output)?;

    let play_result = game.play(decision.square());
    let _: Result<engine::GameStatus, engine::PlayError> = play_result;
    Ok(())
}

/// 盤面を文字列に描画する。
///
/// 空きマスの位置番号は、盤面全体が空の間だけヒントとして表示する。
fn render_board(position: engine::Position) -> String {
    let show_hints = position.occupied() == u16::MIN;
    let mut board = String::new();

    for y in u8::MIN..engine::Square::BOARD_LEN {
        if y > u8::MIN {
            board.push_str(ROW_SEPARATOR);
            board.push('\n');
        }

        for x in u8::MIN..engine::Square::BOARD_LEN {
            if x > u8::MIN {
                board.push('|');
            }

            let square = match engine::Square::from_xy(x, y) {
                Some(value) => value,
                None => continue,
            };
            board.push_str(&format_cell(position, square, show_hints));
        }

        board.push('\n');
    }

    board
}

/// 1マス分（3文字）を描画する。
fn format_cell(position: engine::Position, square: engine::Square, show_hints: bool) -> String {
    match position.piece_at(square) {
        Some(mark) => format!(" {} ", mark.as_char()),
        None if show_hints => format!(" {} ", square.display_index()),
        None => "   ".to_owned(),
    }
}

/// 記号選択の入力を解析する（`X` / `O` のみ、大文字小文字を区別する）。
fn parse_mark(input: &str) -> Option<engine::Mark> {
    let mut chars = input.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    engine::Mark::from_char(first)
}

/// 着手入力を解析する（1文字の `1`..`9` のみ）。
fn parse_square(input: &str) -> Option<engine::Square> {
    let mut chars = input.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let digit = first.to_digit(10)?;
    let display = u8::try_from(digit).ok()?;
    engine::Square::from_display_index(display)
}

/// 1行読み取り、前後の空白を除いて返す。EOF なら `None`。
fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == usize::MIN {
        return Ok(None);
    }

    Ok(Some(line.trim().to_owned()))
}

/// 終局メッセージ（人間視点）。
fn outcome_message(status: engine::GameStatus, human: engine::Mark) -> String {
    match status {
        engine::GameStatus::GameOver { winner: Some(mark) } if mark == human => {
            "Congratulations! You win!".to_owned()
        }
        engine::GameStatus::GameOver { winner: Some(_) } => "The AI wins!".to_owned(),
        engine::GameStatus::GameOver { winner: None } => "It's a draw!".to_owned(),
        _ => String::new(),
    }
}
