//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Reads one word per line.

use crate::core::{Game, SessionStats};
use crate::output::display::{format_outcome, format_round_header, format_round_summary};
use crate::wordlists::{SpellChecker, WordSource};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<C: SpellChecker, W: WordSource>(
    game: &mut Game<C, W>,
) -> io::Result<SessionStats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, stdin.lock(), stdout.lock())
}

/// Play from any line-based input
///
/// `:new` starts a new round, `:quit` (or end of input) stops.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn play_lines<C, W, R, O>(
    game: &mut Game<C, W>,
    input: R,
    mut out: O,
) -> io::Result<SessionStats>
where
    C: SpellChecker,
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Word Scramble - Simple Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(out, "Words must be at least 3 letters and can only be used once.\n")?;
    writeln!(out, "Commands: ':new' for a new root word, ':quit' to exit\n")?;
    writeln!(out, "{}\n", format_round_header(game.round()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                game.start_round();
                writeln!(out, "\n🔄 New round!\n")?;
                writeln!(out, "{}\n", format_round_header(game.round()))?;
            }
            _ => {
                let outcome = game.submit(&line);
                if let Some(text) = format_outcome(&outcome) {
                    writeln!(out, "{text}")?;
                }
                if outcome.is_accepted() {
                    writeln!(out, "{}\n", format_round_summary(game.round()))?;
                }
            }
        }
    }

    let stats = game.stats().clone();
    info!(?stats, "Simple mode finished");

    writeln!(
        out,
        "\n👋 Thanks for playing! {} rounds, {} words, best score {}\n",
        stats.rounds_played,
        stats.words_accepted,
        stats.best_score.to_string().bright_cyan().bold()
    )?;

    Ok(stats)
}
