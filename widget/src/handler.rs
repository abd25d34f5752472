use std::str::FromStr;

use tracing::debug;

use crate::{service::CatalogService, view::View, workflow::ConverterWidget, WidgetError};

pub const HELP: &str = "Commands:
  base <CODE>     select the source currency (no code clears it)
  target <CODE>   select the target currency (no code clears it)
  amount <VALUE>  set the amount to convert
  swap            exchange source and target
  convert         convert (or just press Enter)
  reload          fetch the currency list again
  list            show the currency list
  help            show this help
  quit            exit";

/// One user action typed at the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Base(String),
    Target(String),
    Amount(String),
    Swap,
    Convert,
    Reload,
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = WidgetError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            // Enter converts
            "" | "convert" => Ok(Command::Convert),
            "base" | "from" => Ok(Command::Base(arg.to_string())),
            "target" | "to" => Ok(Command::Target(arg.to_string())),
            "amount" => Ok(Command::Amount(arg.to_string())),
            "swap" => Ok(Command::Swap),
            "reload" => Ok(Command::Reload),
            "list" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(WidgetError::UnknownCommand(word.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply a command to the widget
pub async fn handle<V: View>(
    widget: &mut ConverterWidget<V>,
    service: &CatalogService,
    command: Command,
) -> Result<Flow, WidgetError> {
    debug!("Handling {:?}", command);

    match command {
        Command::Base(code) => widget.select_base(&code)?,
        Command::Target(code) => widget.select_target(&code)?,
        Command::Amount(input) => widget.set_amount(&input),
        Command::Swap => {
            widget.swap().await;
        }
        Command::Convert => {
            widget.submit().await;
        }
        Command::Reload => {
            widget.show_loading_catalog();
            let catalog = service.load_catalog().await;
            widget.apply_catalog(catalog);
        }
        Command::List => widget.list_options(),
        Command::Help => widget.view_mut().notice(HELP),
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}
