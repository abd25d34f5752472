use std::sync::Arc;

use connectors::{catalog::FrankfurterCatalog, exchange::ExchangeEndpoint};
use store::CatalogStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use widget::{
    config::WidgetConfig,
    handler::{self, Command, Flow, HELP},
    service::CatalogService,
    view::{TerminalView, View},
    workflow::ConverterWidget,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr; stdout is the widget
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Starting exchange widget");

    let config = WidgetConfig::from_env();
    info!(
        "Conversion endpoint {}, catalog {}",
        config.exchange_url, config.catalog_url
    );

    let backend = Arc::new(ExchangeEndpoint::new(
        config.exchange_url.clone(),
        config.credentials(),
    ));
    let service = CatalogService::new(
        Arc::new(FrankfurterCatalog::with_url(config.catalog_url.clone())),
        Arc::new(CatalogStore::default()),
    );

    let view = TerminalView::new(std::io::stdout(), config.renderer());
    let mut widget = ConverterWidget::new(backend, view, service.current().await, config.locale);

    widget.view_mut().notice(HELP);
    widget.show_loading_catalog();
    let catalog = service.load_catalog().await;
    widget.apply_catalog(catalog);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                widget.view_mut().notice(&e.to_string());
                continue;
            }
        };

        match handler::handle(&mut widget, &service, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => widget.view_mut().notice(&e.to_string()),
        }
    }

    info!("Exchange widget stopped");
    Ok(())
}
