use std::io::{self, BufRead, Write};

use crunch_core::SubmitOutcome;
use crunch_core::model::Stats;
use services::SessionEngine;

/// Line-based drill: every line is an answer unless it is one of the commands below.
///
/// - `q` / `quit`: stop and print the summary
/// - `stats`: print the running stats
/// - `reset`: zero the stats
///
/// End of input behaves like `quit`.
pub fn run_drill<R: BufRead, W: Write>(
    engine: &mut SessionEngine,
    input: R,
    out: &mut W,
    json: bool,
) -> io::Result<()> {
    writeln!(out, "Type the product and press Enter. `stats`, `reset`, `quit`.")?;
    prompt(engine, out)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            "stats" => write_stats(engine.stats(), out)?,
            "reset" => {
                engine.reset_stats();
                writeln!(out, "Stats reset.")?;
            }
            _ => {
                engine.set_answer_text(line.as_str());
                let outcome = engine.submit_answer();
                if outcome == SubmitOutcome::Correct {
                    writeln!(out, "Correct!")?;
                }
                if let Some(message) = engine.notice().message() {
                    writeln!(out, "{message}")?;
                }
                // The terminal has nothing to close, so notices are acknowledged once printed.
                engine.dismiss_notice();
            }
        }
        prompt(engine, out)?;
    }

    writeln!(out)?;
    if json {
        let summary = serde_json::to_string_pretty(&engine.snapshot()).map_err(io::Error::other)?;
        writeln!(out, "{summary}")?;
    } else {
        write_stats(engine.stats(), out)?;
    }
    out.flush()
}

fn prompt<W: Write>(engine: &SessionEngine, out: &mut W) -> io::Result<()> {
    write!(out, "{} = ", engine.problem())?;
    out.flush()
}

fn write_stats<W: Write>(stats: Stats, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Correct: {}  Incorrect: {}  Accuracy: {}%  Streak: {} (best {})",
        stats.correct_count,
        stats.incorrect_count,
        stats.accuracy_percent(),
        stats.current_streak,
        stats.best_streak
    )
}
