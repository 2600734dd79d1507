use clap::{Parser, Subcommand};

mod cmd;

#[derive(Debug, Parser)]
#[command(name = "takehome", version, author)]
#[command(about = "Calculate UK take-home pay, Income Tax and National Insurance")]
struct Opts {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Take-home pay after income tax and National Insurance
    #[command(name = "summary")]
    Summary(cmd::summary::SummaryCommand),
    /// Income tax owed, optionally split by band
    #[command(name = "tax")]
    Tax(cmd::tax::TaxCommand),
    /// National Insurance contributions
    #[command(name = "ni")]
    Ni(cmd::ni::NiCommand),
    /// Pension contributions (not implemented)
    #[command(name = "pension")]
    Pension(cmd::pension::PensionCommand),
    /// List the built-in tax years
    #[command(name = "years")]
    Years(cmd::years::YearsCommand),
    /// Print the format of a custom rates file
    #[command(name = "schema")]
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.cmd {
        Command::Summary(summary) => summary.exec(),
        Command::Tax(tax) => tax.exec(),
        Command::Ni(ni) => ni.exec(),
        Command::Pension(pension) => pension.exec(),
        Command::Years(years) => years.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
