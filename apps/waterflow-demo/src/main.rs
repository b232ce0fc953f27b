use clap::Parser;
use waterflow_demo::DemoOptions;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::parse();
    let summary = waterflow_demo::run(&options)?;

    println!("=== Waterflow Demo ===");
    println!(
        "content: {} x {}",
        summary.content_size.width, summary.content_size.height
    );
    println!(
        "scrolled {} pages, drew {} cells and {} headers",
        summary.pages, summary.cells_drawn, summary.headers_drawn
    );
    println!(
        "after reload: {} tall, after append: {} tall",
        summary.reloaded_content_size.height, summary.appended_content_size.height
    );
    Ok(())
}
