use cart_widget::page::{MESSAGE_ID, VISIBLE_CLASS};
use cart_widget::ui::{render_page, storefront_page};
use cart_widget::{load_catalog, CartWidget, SharedPage, WidgetConfig};
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: cart_widget [add <upc> [quantity] | remove <upc> | clear | render]";

enum Command {
    Count,
    Add { upc: String, quantity: u32 },
    Remove { upc: String },
    Clear,
    Render,
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    match args {
        [] => Ok(Command::Count),
        [cmd, upc] if cmd == "add" => Ok(Command::Add {
            upc: upc.clone(),
            quantity: 1,
        }),
        [cmd, upc, quantity] if cmd == "add" => {
            let quantity = quantity
                .parse::<u32>()
                .ok()
                .filter(|quantity| *quantity >= 1)
                .ok_or_else(|| format!("quantity must be a positive integer, got '{quantity}'"))?;
            Ok(Command::Add {
                upc: upc.clone(),
                quantity,
            })
        }
        [cmd, upc] if cmd == "remove" => Ok(Command::Remove { upc: upc.clone() }),
        [cmd] if cmd == "clear" => Ok(Command::Clear),
        [cmd] if cmd == "render" => Ok(Command::Render),
        _ => Err(USAGE.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = parse_command(&args)?;

    let config = WidgetConfig::from_env()?;
    let products = load_catalog(&config.catalog_path).await;
    let widget = CartWidget::new(&config, storefront_page(&products))?;

    widget.page_load().await;
    match &command {
        Command::Count | Command::Render => {}
        Command::Add { upc, quantity } => {
            widget.add_item_to_cart(upc, *quantity).await;
        }
        Command::Remove { upc } => {
            widget.remove_item_from_cart(upc).await;
        }
        Command::Clear => {
            widget.clear_cart().await;
        }
    }

    if matches!(command, Command::Render) {
        println!("{}", widget.page().with(|page| render_page(page)));
    } else {
        print_summary(widget.page());
    }

    Ok(())
}

fn print_summary(page: &SharedPage) {
    page.with(|page| {
        let count = page
            .cart_count_texts()
            .into_iter()
            .next()
            .unwrap_or_default();
        println!("cart count: {count}");

        let message = page
            .find_by_id(MESSAGE_ID)
            .and_then(|id| page.element(id))
            .filter(|element| element.has_class(VISIBLE_CLASS));
        if let Some(message) = message {
            println!("message: {}", message.text);
        }
    });
}
