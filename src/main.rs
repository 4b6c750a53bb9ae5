use anyhow::Context;
use log::{info, warn};
use mortality_views::{DashboardConfig, DashboardSession, ViewId, ViewModel, load_dataset};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();
    if !config.national_path.exists() || !config.states_path.exists() {
        warn!(
            "Dataset files not found: {} / {}",
            config.national_path.display(),
            config.states_path.display()
        );
        return Ok(());
    }

    info!(
        "Loading mortality data from {} and {}",
        config.national_path.display(),
        config.states_path.display()
    );

    let dataset = load_dataset(&config)
        .await
        .context("loading the mortality datasets")?;
    info!("Causes available: {}", dataset.national().causes().join(", "));

    let mut session = DashboardSession::new(dataset, config);

    // Walk every view for the default selection
    print_view(&session.current_view());
    for view in [
        ViewId::Trend,
        ViewId::UsStateBar,
        ViewId::UsBubble,
        ViewId::MhCompare,
    ] {
        print_view(&session.set_view(view));
    }

    // Selecting the reserved cause drops the comparison back to the bar
    print_view(&session.set_cause("Mental health/suicide"));

    // One model as JSON, the way a frontend would receive it
    let model = session.set_year(2010);
    println!("{}", serde_json::to_string_pretty(&model)?);

    info!("Dashboard walkthrough completed");
    Ok(())
}

/// Log one view model the way the dashboard would render it
fn print_view(model: &ViewModel) {
    info!("=== {}", model.title);
    if !model.note.is_empty() {
        info!("note: {}", model.note);
    }
    for insight in &model.insights {
        info!("  {insight}");
    }
}
