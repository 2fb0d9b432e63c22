use hotelres_app::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    hotelres_observability::init_with(config.log_format);

    let today = chrono::Local::now().date_naive();
    let stdout = std::io::stdout();
    hotelres_app::run(&config, today, &mut stdout.lock())?;
    Ok(())
}
