//! Country commands

use clap::{Args, Subcommand};
use worldgeo_core::{Country, CountrySearch};
use worldgeo_engine::Intent;

#[derive(Debug, Args)]
pub struct CountryArgs {
    #[command(subcommand)]
    pub command: CountryCommand,
}

#[derive(Debug, Subcommand)]
pub enum CountryCommand {
    /// Find countries by exact code and/or name
    Search(SearchArgs),
    /// Show one country
    Load { id: i64 },
    /// Add a country; its id is assigned
    Add(FieldArgs),
    /// Overwrite a country
    Edit {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    #[arg(long, default_value = "")]
    pub code: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long)]
    pub continent_id: i64,
    #[arg(long, default_value = "")]
    pub wikipedia_link: String,
    #[arg(long)]
    pub keywords: Option<String>,
}

impl FieldArgs {
    fn into_record(self, id: i64) -> Country {
        Country {
            id,
            code: self.code,
            name: self.name,
            continent_id: self.continent_id,
            wikipedia_link: self.wikipedia_link,
            keywords: self.keywords,
        }
    }
}

pub fn intent(args: CountryArgs) -> Intent {
    match args.command {
        CountryCommand::Search(s) => Intent::SearchCountry(CountrySearch {
            code: s.code,
            name: s.name,
        }),
        CountryCommand::Load { id } => Intent::LoadCountry { id },
        CountryCommand::Add(fields) => Intent::SaveNewCountry(fields.into_record(0)),
        CountryCommand::Edit { id, fields } => Intent::SaveCountry(fields.into_record(id)),
    }
}
