use car_rental_server::{cars::Fleet, config::Config, location::Geocoder, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::from_env()?;
	let fleet = Fleet::load(config.fleet_path.as_deref())?;
	log::info!(
		"loaded {} cars from {}",
		fleet.len(),
		config.fleet_path.as_deref().map_or("embedded fleet".to_owned(), |p| p.display().to_string())
	);
	let geocoder = Geocoder::from_config(&config)?;

	let app = router(AppState::new(fleet, geocoder));
	let addr = config.addr()?;
	let listener = tokio::net::TcpListener::bind(addr).await?;
	log::info!("listening on {}", addr);

	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
	log::info!("server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		log::error!("unable to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
