use clap::{Parser, Subcommand};
use crunch_core::AnswerPolicy;
use services::EngineConfig;

#[derive(Parser, Debug)]
#[command(name = "num-crunch")]
#[command(about = "Multiplication drills, 1×1 through 12×12")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the desktop window (default)
    Ui,
    /// Drill in the terminal, one answer per line
    Drill {
        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct EngineArgs {
    /// Seed for a reproducible problem sequence
    #[arg(long, global = true, env = "NUM_CRUNCH_SEED")]
    pub seed: Option<u64>,

    /// Which answers count as numbers: `strict` integers or `permissive` decimals
    #[arg(long, global = true, env = "NUM_CRUNCH_ANSWERS", default_value_t = AnswerPolicy::Strict)]
    pub answers: AnswerPolicy,
}

impl EngineArgs {
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_seed(self.seed)
            .with_answer_policy(self.answers)
    }
}

impl Cli {
    /// The subcommand to run; the desktop window when none was given.
    #[must_use]
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ui)
    }
}
