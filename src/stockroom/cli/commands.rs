//! # Dispatch and Menu
//!
//! `run()` parses arguments, sets up logging and the data directory, then
//! either answers a one-shot subcommand (`list`, `search`) or enters the
//! interactive menu.
//!
//! The menu loop owns the only [`Prompter`] on stdin. Handlers get it by
//! reference and pass it to the API as the selection and confirmation
//! collaborator. A handler returns `Err` only for input problems; store
//! errors are printed where they happen and the menu goes on.
//!
//! Closing stdin (Ctrl+D) anywhere surfaces as
//! [`InventoryError::Interrupted`] and ends the program with a farewell.
//! Ctrl+C does the same from the signal handler installed before the menu
//! starts; unsaved changes are dropped in both cases.

use super::logging;
use super::print::{print_failure, print_farewell, print_messages, print_unexpected};
use super::render::{
    render_banner, render_menu, render_product_card, render_product_details, render_table,
    render_title, CardDetail,
};
use super::setup::{Cli, Commands};
use super::styles::THEME;
use clap::Parser;
use colored::Colorize;
use stockroom::api::{CmdMessage, InventoryApi, MessageLevel};
use stockroom::error::{InventoryError, Result};
use stockroom::init::{initialize, InitOptions};
use stockroom::model::{normalize, NewProduct};
use stockroom::prompt::Prompter;
use stockroom::search::Confirmer;
use stockroom::store::fs::FileStorage;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

struct AppContext {
    api: InventoryApi<FileStorage>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = InitOptions {
        data_dir: cli.data_dir.clone(),
        file: cli.file.clone(),
    };
    let ctx = initialize(&options)?;
    debug!(dir = %ctx.data_dir.display(), "stockroom ready");

    let interactive = matches!(cli.command, None | Some(Commands::Menu));
    if interactive {
        print_messages(&ctx.startup.messages);
    } else {
        print_problems(&ctx.startup.messages);
    }

    let mut app = AppContext { api: ctx.api };

    match cli.command {
        None | Some(Commands::Menu) => {
            install_interrupt_handler();
            let mut prompter = Prompter::stdio().with_styles(THEME.prompt_styles());
            run_menu(&mut app, &mut prompter)
        }
        Some(Commands::List) => {
            handle_list(&app);
            Ok(())
        }
        Some(Commands::Search { term }) => {
            handle_search(&app, &term.join(" "));
            Ok(())
        }
    }
}

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        print_farewell(true);
        std::process::exit(0);
    });
    if let Err(e) = installed {
        warn!(error = %e, "could not install the Ctrl+C handler");
    }
}

/// One-shot commands only surface load problems, not the routine load notice.
fn print_problems(messages: &[CmdMessage]) {
    let problems: Vec<CmdMessage> = messages
        .iter()
        .filter(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
        .cloned()
        .collect();
    print_messages(&problems);
}

fn run_menu<R: BufRead, W: Write>(
    app: &mut AppContext,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!("\n{}", render_title());

    loop {
        print!("{}", render_menu());
        let outcome = prompter
            .read_line("Seleccione una opción (1-6): ")
            .and_then(|choice| dispatch(choice.trim(), app, prompter));

        match outcome {
            Ok(true) => continue,
            Ok(false) => {
                print_farewell(false);
                return Ok(());
            }
            Err(InventoryError::Interrupted) => {
                print_farewell(true);
                return Ok(());
            }
            Err(e @ InventoryError::Terminal(_)) => return Err(e),
            Err(e) => print_unexpected(&e),
        }
    }
}

/// Runs one menu option. `Ok(false)` means the user chose to leave.
fn dispatch<R: BufRead, W: Write>(
    choice: &str,
    app: &mut AppContext,
    prompter: &mut Prompter<R, W>,
) -> Result<bool> {
    match choice {
        "1" => handle_list(app),
        "2" => handle_create(app, prompter)?,
        "3" => handle_update(app, prompter)?,
        "4" => handle_delete(app, prompter)?,
        "5" => handle_save(app),
        "6" => {
            handle_exit(app, prompter)?;
            return Ok(false);
        }
        _ => println!(
            "{}",
            "Opción inválida. Por favor seleccione una opción del 1 al 6.".red()
        ),
    }
    Ok(true)
}

/// Configured limits are `u64`; prompts read signed numbers.
fn as_bound(limit: u64) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

fn handle_list(app: &AppContext) {
    let result = app.api.list_products();
    print_messages(&result.messages);
    if !result.listed_products.is_empty() {
        print!(
            "{}",
            render_table(&result.listed_products, result.summary.as_ref())
        );
    }
}

fn handle_search(app: &AppContext, query: &str) {
    let result = app.api.search_products(query);
    print_messages(&result.messages);
    if !result.listed_products.is_empty() {
        print!("{}", render_table(&result.listed_products, None));
    }
}

fn handle_create<R: BufRead, W: Write>(
    app: &mut AppContext,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!("{}", render_banner("REGISTRAR NUEVO PRODUCTO"));

    // The code is checked before anything else is asked.
    let code = normalize(&prompter.read_line("Ingrese código SKU: ")?);
    if code.is_empty() {
        println!("{}", "Error: El SKU no puede estar vacío.".red());
        return Ok(());
    }
    if app.api.code_in_use(&code) {
        println!(
            "{}",
            format!("Error: El SKU '{}' ya existe en el inventario.", code).red()
        );
        return Ok(());
    }

    let name = normalize(&prompter.read_line("Ingrese nombre del producto: ")?);
    if name.is_empty() {
        println!("{}", "Error: El nombre no puede estar vacío.".red());
        return Ok(());
    }

    let limits = app.api.inventory().limits();
    let category = prompter.category()?;
    let price: i64 = prompter.number_at_most(
        "Ingrese precio en CLP: ",
        false,
        as_bound(limits.max_price),
    )?;
    let stock: i64 = prompter.number_at_most(
        "Ingrese cantidad en stock: ",
        true,
        as_bound(limits.max_stock),
    )?;

    match app
        .api
        .create_product(NewProduct::new(code, name, category, price, stock))
    {
        Ok(result) => {
            println!();
            print_messages(&result.messages);
            for product in &result.affected_products {
                print!("{}", render_product_details(product, CardDetail::Full));
            }
        }
        Err(e) => print_failure(&e),
    }
    Ok(())
}

fn handle_update<R: BufRead, W: Write>(
    app: &mut AppContext,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!("{}", render_banner("ACTUALIZAR STOCK DE PRODUCTO"));

    let query = if app.api.inventory().is_empty() {
        String::new()
    } else {
        prompter.read_line("Ingrese nombre o SKU del producto a buscar: ")?
    };
    let found = app.api.find_product(&query, "actualizar", prompter)?;
    print_messages(&found.messages);
    let Some(product) = found.selected else {
        return Ok(());
    };

    print!(
        "{}",
        render_product_card("Producto seleccionado:", &product, CardDetail::Stock)
    );
    let max_stock = as_bound(app.api.inventory().limits().max_stock);
    let new_stock: i64 =
        prompter.number_at_most("\nIngrese el nuevo stock: ", true, max_stock)?;

    match app.api.update_stock(&product.code, new_stock) {
        Ok(result) => {
            println!();
            print_messages(&result.messages);
        }
        Err(e) => print_failure(&e),
    }
    Ok(())
}

fn handle_delete<R: BufRead, W: Write>(
    app: &mut AppContext,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!("{}", render_banner("ELIMINAR PRODUCTO"));

    let query = if app.api.inventory().is_empty() {
        String::new()
    } else {
        prompter.read_line("Ingrese nombre o SKU del producto a eliminar: ")?
    };
    let found = app.api.find_product(&query, "eliminar", prompter)?;
    print_messages(&found.messages);
    let Some(product) = found.selected else {
        return Ok(());
    };

    print!(
        "{}",
        render_product_card("Producto a eliminar:", &product, CardDetail::Full)
    );
    println!();

    match app.api.delete_product(&product.code, prompter) {
        Ok(result) => {
            println!();
            print_messages(&result.messages);
        }
        Err(e) => print_failure(&e),
    }
    Ok(())
}

fn handle_save(app: &mut AppContext) {
    let result = app.api.save();
    println!();
    print_messages(&result.messages);
}

fn handle_exit<R: BufRead, W: Write>(
    app: &mut AppContext,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!();
    if prompter.confirm("¿Desea guardar el inventario antes de salir?")? {
        handle_save(app);
    }
    Ok(())
}
