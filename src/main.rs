use log::{debug, info};
use std::env;

use random_meal::render::RETRY_HINT;
use random_meal::ui::{HtmlButton, HtmlContainer, CONTAINER_ID, TRIGGER_ID};
use random_meal::{MealClient, MealConfig, MealController};

const USAGE: &str = "Usage: random-meal [--page] [OUTPUT]";

fn page_html(button: &HtmlButton, container: &HtmlContainer) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Random Meal</title>
</head>
<body>
    <main>
        {}
        {}
    </main>
</body>
</html>
"#,
        button.to_html(),
        container.to_html()
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut full_page = false;
    let mut output = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--page" => full_page = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if output.is_none() => output = Some(arg),
            _ => return Err(USAGE.into()),
        }
    }

    let config = MealConfig::load()?;
    debug!("Using API at {}", config.base_url);
    let client = MealClient::new(&config)?;

    let mut controller = MealController::bind(
        client,
        Some(HtmlButton::new(TRIGGER_ID, "Random meal")),
        Some(HtmlContainer::new(CONTAINER_ID)),
    )
    .ok_or("page elements missing")?;

    let state = controller.on_click().await;
    if !state.is_loaded() {
        eprintln!("{RETRY_HINT}");
    }

    let html = if full_page {
        page_html(controller.trigger(), controller.container())
    } else {
        controller.container().to_html()
    };

    match output {
        Some(path) => {
            tokio::fs::write(&path, html).await?;
            info!("Wrote {}", path);
        }
        None => println!("{html}"),
    }

    Ok(())
}
