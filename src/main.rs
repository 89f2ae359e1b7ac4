use std::sync::Mutex;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use roster_backend::config::Config;
use roster_backend::handlers::{self, Roster};
use roster_backend::{JsonFileSlot, Persistence, RecordStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    let slot = JsonFileSlot::in_dir(&config.data_dir);
    info!("Using roster at {}", slot.path().display());

    let backend: Box<dyn Persistence + Send> = Box::new(slot);
    let store = RecordStore::open(backend).map_err(|err| {
        error!("Failed to open roster: {}", err);
        std::io::Error::other(err)
    })?;
    let roster: web::Data<Roster> = web::Data::new(Mutex::new(store));

    info!("Starting server at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(roster.clone())
            .configure(handlers::configure)
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
