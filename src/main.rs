//! # Drive-Thru Terminal
//!
//! A line-oriented front end over [`OrderApp`].
//!
//! | Input | Effect |
//! |-------|--------|
//! | `cancel <id>` | Cancel order `<id>` |
//! | `orders` | List active orders |
//! | `clear` | Clear the current success/error message |
//! | `reset` | Reset local state |
//! | `quit` / `exit` | Stop |
//! | anything else | Sent to the ordering system as an order message |

use drivethru_client::clients::HttpApiClient;
use drivethru_client::config::ClientConfig;
use drivethru_client::lifecycle::{setup_tracing, OrderApp};
use drivethru_client::model::AppState;
use drivethru_client::order_service::{format_order_items, order_examples};
use drivethru_client::store::Projections;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

enum Command<'a> {
    Cancel(&'a str),
    Orders,
    Clear,
    Reset,
    Quit,
    Message(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "orders" => return Command::Orders,
        "clear" => return Command::Clear,
        "reset" => return Command::Reset,
        "quit" | "exit" => return Command::Quit,
        _ => {}
    }

    match line.split_once(char::is_whitespace) {
        Some((head, id)) if head.eq_ignore_ascii_case("cancel") && !id.trim().is_empty() => {
            Command::Cancel(id.trim().trim_start_matches('#'))
        }
        _ => Command::Message(line),
    }
}

fn print_status(state: &AppState) {
    if !state.error.is_empty() {
        println!("✗ {}", state.error);
    }
    if !state.last_response.is_empty() {
        println!("✓ {}", state.last_response);
    }

    let projections = Projections::from(state);
    println!(
        "  {} burgers | {} fries | {} drinks | {} items in {} orders",
        state.totals.burgers,
        state.totals.fries,
        state.totals.drinks,
        projections.total_items,
        projections.order_count
    );
}

fn print_orders(state: &AppState) {
    if state.orders.is_empty() {
        println!("  No active orders");
        return;
    }
    for (id, order) in &state.orders {
        println!("  #{id}: {}", format_order_items(order));
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
    info!(api = %config.api_base_url, timeout = ?config.timeout, "Starting drive-thru client");

    let app = OrderApp::new(HttpApiClient::from_config(&config));

    if !app.test_connection().await {
        warn!(api = %config.api_base_url, "Ordering system is not reachable");
        println!("Warning: cannot reach the ordering system at {}", config.api_base_url);
    }

    app.initialize().await.map_err(|e| e.to_string())?;
    print_status(&app.store().current());

    println!("Try: \"{}\"", order_examples().join("\", \""));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        let result = match parse_command(&line) {
            Command::Quit => break,
            Command::Orders => {
                print_orders(&app.store().current());
                continue;
            }
            Command::Clear => app.clear_messages().await,
            Command::Reset => app.reset().await,
            Command::Cancel(id) => app.cancel_order(id).await,
            Command::Message(text) => app.process_message(text).await,
        };
        result.map_err(|e| e.to_string())?;
        print_status(&app.store().current());
    }

    app.shutdown().await
}
