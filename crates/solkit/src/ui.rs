use {
    comfy_table::{Cell, Table, presets::UTF8_FULL},
    console::style,
    indicatif::{ProgressBar, ProgressStyle},
    std::time::Duration,
};

pub async fn show_spinner<F, T>(message: &str, fut: F) -> anyhow::Result<T>
where
    F: std::future::Future<Output = anyhow::Result<T>>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message.to_string());

    let result = fut.await;
    match &result {
        Ok(_) => spinner.finish_with_message("✅ Done"),
        Err(_) => spinner.finish_with_message("❌ Failed"),
    }

    result
}

pub fn print_error(message: impl std::fmt::Display) {
    println!("\n{}\n", style(message).red().bold());
}

/// Renders a two column Field/Value table under a green heading.
pub fn print_summary(title: &str, rows: &[(&str, String)]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Field").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }

    println!("\n{}", style(title).green().bold());
    println!("{table}");
}
