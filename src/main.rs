use astra::Server;
use hostelpulse::app::AppContext;
use hostelpulse::config::AppConfig;
use hostelpulse::db::connection::init_db;
use hostelpulse::router;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let app = AppContext::new(config);

    if let Err(e) = init_db(&app.db) {
        log::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr = app.config.addr;
    log::info!(
        "starting server at http://{addr} ({} workers, {:?} stats)",
        app.config.max_workers,
        app.config.stats_source
    );

    let server = Server::bind(&addr).max_workers(app.config.max_workers);
    let result = server.serve(move |req, _info| router::serve(req, &app));

    if let Err(e) = result {
        log::error!("server ended with error: {e}");
        std::process::exit(1);
    }

    log::info!("server shut down cleanly");
}
