use holocron::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes().with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.address).await?;

    tracing::info!("Starting server on {}", config.address);

    axum::serve(listener, app).await?;

    Ok(())
}
