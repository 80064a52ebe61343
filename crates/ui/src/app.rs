use std::io::{self, BufRead, Write};

use engine::{Game, GameLogger, Move, Square};

const EVEN_BANNER: &str = "  *****       *****       *****       *****      ";
const ODD_BANNER: &str = "        *****       *****       *****       *****";

/// Console front end: collects square tokens from stdin, draws the board and
/// drives the game until the engine reports a winner.
pub struct ConsoleApp {
    game: Game,
    logger: GameLogger,
}

impl ConsoleApp {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            logger: GameLogger::new(),
        }
    }

    pub fn run(&mut self) {
        self.draw_board();
        self.print_turn();

        while !self.game.is_over() {
            if !self.advance_game() {
                // Input stream closed; flush what we have and stop.
                self.finish("input closed");
                return;
            }
            self.draw_board();
            self.print_turn();
        }

        let winner = self.game.winner();
        println!("Winner: {}", winner.letter());
        self.logger.log_winner(winner);
        self.finish("king captured");
    }

    /// One attempt: collect a source and destination, hand them to the
    /// engine, log the outcome. Returns false only when stdin runs dry.
    fn advance_game(&mut self) -> bool {
        let (from, to) = match self.collect_move() {
            Some(squares) => squares,
            None => return false,
        };

        let mv = Move::new(from, to);
        let side = self.game.side_to_move;
        let captured = self.game.board.get_piece(mv.to);

        if self.game.try_make_move(mv) {
            self.logger.log_move(side, mv, captured);
        } else {
            self.logger.log_rejected(side, mv);
        }
        true
    }

    /// Prompt for both tokens until each is well-formed. A malformed token
    /// restarts the pair, matching the all-or-nothing collection loop of the
    /// console dialog. Returns None on end of input.
    fn collect_move(&mut self) -> Option<(Square, Square)> {
        loop {
            let source = prompt_line("Enter source square (letter then digit, e.g. A2): ")?;
            let dest = prompt_line("Enter destination square: ")?;
            println!();

            match (parse_square(&source), parse_square(&dest)) {
                (Some(from), Some(to)) => return Some((from, to)),
                _ => continue,
            }
        }
    }

    fn print_turn(&self) {
        println!();
        println!("{}'s turn", self.game.side_to_move.letter());
    }

    /// Checkered asterisk layout: a banner line above and below each piece
    /// row, offset by row parity, with the column letters underneath.
    fn draw_board(&self) {
        for row in 0..8u8 {
            let banner = if row % 2 == 0 { EVEN_BANNER } else { ODD_BANNER };
            println!("{}", banner);

            let mut line = format!("{} ", row + 1);
            for col in 0..8u8 {
                match self.game.board.get_piece(Square::new(row, col)) {
                    Some(piece) => {
                        line.push_str(&format!(" {}:{}  ", piece.side.letter(), piece.kind.symbol()))
                    }
                    None => line.push_str("  -   "),
                }
            }
            println!("{}", line);
            println!("{}", banner);
        }

        println!();
        let mut footer = String::new();
        for col in 0..8u8 {
            footer.push_str(&format!("    {} ", (b'A' + col) as char));
        }
        println!("{}", footer);
        println!();
    }

    fn finish(&mut self, reason: &str) {
        self.logger.log_position(&self.game.board);
        match self.logger.save_to_file(reason) {
            Ok(path) => println!("Game log saved to {}", path),
            Err(message) => eprintln!("{}", message),
        }
    }
}

impl Default for ConsoleApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a prompt and read one line. None when stdin is closed or unreadable.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

/// A token is a column letter `A`-`H` followed by a row digit `1`-`8`; the
/// digit maps to row index digit - 1. Characters past the second are ignored.
fn parse_square(token: &str) -> Option<Square> {
    let token = token.trim_end();
    let mut chars = token.chars();
    let col_char = chars.next()?;
    let row_char = chars.next()?;

    if !('A'..='H').contains(&col_char) || !('1'..='8').contains(&row_char) {
        return None;
    }

    let col = col_char as u8 - b'A';
    let row = row_char as u8 - b'1';
    Some(Square::new(row, col))
}
