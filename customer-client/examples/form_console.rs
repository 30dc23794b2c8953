// customer-client/examples/form_console.rs
// 命令行表单示例 - 连接真实后端
//
// Usage:
//   CUSTOMER_API_URL=http://localhost:8080 cargo run --example form_console
//
//   set customer_name Alice     fill a form field
//   search-btn | search         click a button
//   show                        print the form and results
//   quit

use std::str::FromStr;

use customer_client::form::{RESULT_COLUMNS, field_ids};
use customer_client::{ClientConfig, Command, FormController, NetworkHttpClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "customer_client=info".into()),
        )
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Customer console");
    let http = config.build_http_client()?;
    let mut controller = FormController::new(http, config);

    let commands: Vec<_> = controller
        .available_commands()
        .iter()
        .map(|c| c.button_id())
        .collect();
    println!("Buttons: {}", commands.join(" "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line.split_once(' ') {
            Some(("set", rest)) => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if !controller.form_mut().set(field, value) {
                    println!("Unknown field: {field}");
                }
            }
            _ => match line {
                "" => {}
                "quit" | "exit" => break,
                "show" => print_view(&controller),
                other => match Command::from_str(other) {
                    Ok(command) => {
                        let outcome = controller.dispatch(command).await;
                        println!("[{:?}] {}", outcome, controller.flash());
                    }
                    Err(e) => println!("{e}"),
                },
            },
        }
    }

    Ok(())
}

fn print_view(controller: &FormController<NetworkHttpClient>) {
    for field in field_ids::FORM_FIELDS {
        println!("{:<24}{}", field, controller.form().get(field).unwrap_or_default());
    }
    println!("{:<24}{}", field_ids::FLASH_MESSAGE, controller.flash());

    if let Some(results) = controller.search_results() {
        println!("{}", RESULT_COLUMNS.join(" | "));
        for (customer, row) in results.rows().iter().zip(results.table()) {
            let marker = if results.is_highlighted(customer) { "*" } else { " " };
            println!("{marker} {}", row.join(" | "));
        }
    }
}
