//! Schema command - print the custom rates file format

use super::RatesArgs;
use clap::Args;
use schemars::schema_for;
use takehome::TaxYearConfig;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or template
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,

    #[command(flatten)]
    rates: RatesArgs,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the --config file
    JsonSchema,
    /// A complete --config file using the selected year's rates
    Template,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Template => self.print_template(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(TaxYearConfig);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_template(&self) -> anyhow::Result<()> {
        let calculator = self.rates.calculator()?;
        println!("{}", serde_json::to_string_pretty(calculator.config())?);
        Ok(())
    }
}
