use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use engine::{ChessLogger, Game, GameError, Outcome};

struct Options {
    verbose: bool,
    log_dir: Option<PathBuf>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        verbose: false,
        log_dir: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => options.verbose = true,
            "--log-dir" => {
                let dir = args.next().ok_or("--log-dir needs a directory")?;
                options.log_dir = Some(PathBuf::from(dir));
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn print_board(game: &Game) {
    for row in game.board().render() {
        println!("{}", row);
    }
    let (white, black) = game.board().move_counts();
    println!("\n{} to move.", game.to_move().name());
    println!("White moves: {} | Black moves: {}", white, black);
}

/// Next line of input. A read error is reported and logged, then ends the game like end of input.
fn next_line<I>(lines: &mut I, logger: &mut ChessLogger) -> Option<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            logger.log_game_aborted(&format!("input error: {}", e));
            None
        }
    }
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: play [--verbose] [--log-dir <dir>]");
            std::process::exit(2);
        }
    };

    let mut game = Game::new();
    if options.verbose {
        game.logger.enable_advanced_logging();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(&game);
        print!("Enter a move (e.g. A7 A5) or 'undo': ");
        io::stdout().flush().ok();

        let line = match next_line(&mut lines, &mut game.logger) {
            Some(line) => line,
            None => break,
        };

        match game.execute_line(&line) {
            Ok(Outcome::Moved { .. }) | Ok(Outcome::Undone(_)) => {}
            Err(GameError::Parse(e)) => println!("Invalid input: {}", e),
            Err(GameError::Move(engine::MoveError::EmptyHistory)) => println!("Nothing to undo."),
            Err(e) => println!("Illegal move: {}", e),
        }
        println!();
    }

    if let Some(dir) = options.log_dir {
        match game.logger.save_to_file(&dir, "end of input") {
            Ok(path) => println!("💾 Log saved to {}", path.display()),
            Err(e) => eprintln!("Failed to save log: {}", e),
        }
    }
}
