use colored::Colorize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::error::InventoryError;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Reports a failed operation. The menu goes on afterwards.
pub(super) fn print_failure(error: &InventoryError) {
    let text = match error {
        InventoryError::InvalidField { reason, .. } => format!("Error: {}.", reason),
        other => format!("Error: {}.", other),
    };
    println!("{}", text.red());
}

pub(super) fn print_unexpected(error: &InventoryError) {
    println!("{}", format!("Error inesperado: {}", error).red());
    println!("{}", "El programa continuará ejecutándose...".cyan());
}

pub(super) fn print_farewell(interrupted: bool) {
    if interrupted {
        println!(
            "\n\n{}\n",
            "Programa interrumpido por el usuario. ¡Hasta pronto!".cyan()
        );
    } else {
        println!("\n{}\n", "¡Gracias por usar Stockroom!".cyan());
    }
}
