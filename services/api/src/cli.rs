use crate::demo::{run_demo, run_evaluate, run_questions, DemoArgs, EvaluateArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use passport_renewal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Passport Renewal Eligibility",
    about = "Evaluate passport renewal intake rules from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate renewal rules for a single document or a full case
    Renewal {
        #[command(subcommand)]
        command: RenewalCommand,
    },
    /// Print form plans for a set of representative renewal cases
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RenewalCommand {
    /// Run the question-disclosure table for one previously issued document
    Questions(QuestionsArgs),
    /// Build the full form plan for a case stored as JSON
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Renewal {
            command: RenewalCommand::Questions(args),
        } => run_questions(args),
        Command::Renewal {
            command: RenewalCommand::Evaluate(args),
        } => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}
