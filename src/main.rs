use budgetbook::application::{init::init, ConfigService, LedgerController, SubmitOutcome};
use budgetbook::cli::{
    format_form, format_totals, Cli, Commands, ConsoleDialogs, ConsoleRenderer,
};
use budgetbook::domain::{EditMode, EntryId, FormInput, Totals};
use budgetbook::error::BudgetError;
use budgetbook::infrastructure::{EntryRepository, EntryStorage, JsonFileStorage, Workspace};
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type ConsoleController = LedgerController<JsonFileStorage, ConsoleRenderer, ConsoleDialogs>;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr, filtered by BUDGETBOOK_LOG (default: warn)
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("BUDGETBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn open_controller(
    workspace: &Workspace,
    assume_yes: bool,
) -> Result<ConsoleController, BudgetError> {
    let config = workspace.load_config()?;
    let form = workspace.load_form();

    Ok(LedgerController::new(
        EntryRepository::new(workspace.storage()),
        ConsoleRenderer::new(config.currency),
        ConsoleDialogs::new(assume_yes),
        config.edit_mode,
    )
    .with_form(form))
}

fn run(cli: Cli) -> Result<(), BudgetError> {
    match cli.command {
        Commands::Init {
            path,
            currency,
            edit_mode,
        } => {
            let edit_mode = EditMode::from_str(&edit_mode).map_err(BudgetError::Config)?;
            init(&path, currency, edit_mode)?;
            Ok(())
        }
        Commands::Add {
            kind,
            category,
            amount,
            date,
        } => {
            let workspace = Workspace::discover()?;
            let mut controller = open_controller(&workspace, false)?;

            let outcome = controller.submit(FormInput {
                kind,
                category,
                amount,
                date,
            })?;
            workspace.save_form(controller.form())?;

            match outcome {
                SubmitOutcome::Created(_) => Ok(()),
                SubmitOutcome::Rejected(reason) => Err(BudgetError::Validation(reason)),
            }
        }
        Commands::List => {
            let workspace = Workspace::discover()?;
            let mut controller = open_controller(&workspace, false)?;
            controller.refresh();
            Ok(())
        }
        Commands::Totals => {
            let workspace = Workspace::discover()?;
            let config = workspace.load_config()?;
            let totals = Totals::from_entries(&workspace.storage().load());
            println!("{}", format_totals(&totals, &config.currency));
            Ok(())
        }
        Commands::Edit { id } => {
            let workspace = Workspace::discover()?;
            let mut controller = open_controller(&workspace, false)?;

            if controller.edit(&EntryId::from(id))?.is_some() {
                workspace.save_form(controller.form())?;
                println!();
                println!("{}", format_form(controller.form()));
                println!();
                println!("Run 'budgetbook add' with any changed fields to save the entry.");
            }
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let workspace = Workspace::discover()?;
            let mut controller = open_controller(&workspace, yes)?;
            controller.delete(&EntryId::from(id))?;
            Ok(())
        }
        Commands::Form => {
            let workspace = Workspace::discover()?;
            println!("{}", format_form(&workspace.load_form()));
            Ok(())
        }
        Commands::Cancel => {
            let workspace = Workspace::discover()?;
            let mut controller = open_controller(&workspace, false)?;

            if let Some(entry) = controller.cancel()? {
                println!();
                println!("Restored entry {}", entry.id);
            }
            workspace.save_form(controller.form())?;
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("currency = {}", config.currency);
                println!("edit_mode = {}", config.edit_mode.as_str());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: budgetbook config [--list | <key> [<value>]]");
                println!("Valid keys: currency, edit_mode, created");
                Ok(())
            }
        }
    }
}
