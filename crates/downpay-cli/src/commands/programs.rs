//! Programs command implementation.
//!
//! Shows down payment assistance program descriptions. This is reference
//! information only; no eligibility is checked.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use downpay_core::programs::{self, AssistanceProgram};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output, print_single, print_warning};

/// Arguments for the programs command.
#[derive(Args, Debug)]
pub struct ProgramsArgs {
    /// Program name, e.g. "FHA Loans". Lists all programs when omitted.
    pub name: Option<String>,
}

/// Summary row for the program listing.
#[derive(Debug, Serialize, Tabled)]
pub struct ProgramRow {
    #[tabled(rename = "Program")]
    pub name: String,
    #[tabled(rename = "Website")]
    pub url: String,
}

impl From<&AssistanceProgram> for ProgramRow {
    fn from(program: &AssistanceProgram) -> Self {
        Self {
            name: program.name.to_string(),
            url: program.url.to_string(),
        }
    }
}

fn print_program(title: &str, program: &AssistanceProgram, quiet: bool) {
    print_header(title, quiet);
    println!("{}", program.description);
    println!();
    println!("Key Benefits:");
    for benefit in program.benefits {
        println!("  - {benefit}");
    }
    println!();
    println!("Website: {}", program.url);
}

/// Execute the programs command.
pub fn execute(args: ProgramsArgs, ctx: &Context) -> Result<()> {
    let Some(name) = args.name else {
        let rows: Vec<ProgramRow> = programs::all().iter().map(ProgramRow::from).collect();
        if ctx.format == OutputFormat::Table {
            print_header("Assistance Programs", ctx.quiet);
        }
        return print_output(&rows, ctx.format);
    };

    let program = programs::lookup(&name);
    if programs::find(&name).is_none() && !ctx.quiet {
        print_warning(&format!("No details for \"{name}\"; showing general guidance"));
    }

    match ctx.format {
        OutputFormat::Table => print_program(&name, program, ctx.quiet),
        OutputFormat::Json => print_single(program)?,
        OutputFormat::Csv | OutputFormat::Minimal => {
            print_output(&[ProgramRow::from(program)], ctx.format)?;
        }
    }

    Ok(())
}
