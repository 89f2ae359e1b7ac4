use std::sync::{Mutex, MutexGuard};

use actix_web::{web, HttpResponse};

use crate::db::Persistence;
use crate::errors::AppError;
use crate::store::RecordStore;
use crate::utils::image::MAX_IMAGE_BYTES;
use crate::utils::states::US_STATES;

pub mod employee;
pub mod file;

// Room for a 5 MB image once base64 encoded inside a JSON form.
const JSON_LIMIT: usize = 8 * 1024 * 1024;
const UPLOAD_LIMIT: usize = MAX_IMAGE_BYTES * 2;

type Store = RecordStore<Box<dyn Persistence + Send>>;

/// The store as shared between actix workers.
pub type Roster = Mutex<Store>;

pub fn lock(store: &Roster) -> Result<MutexGuard<'_, Store>, AppError> {
    store
        .lock()
        .map_err(|_| AppError::StorageError("Employee store is unavailable".to_string()))
}

pub async fn get_states() -> HttpResponse {
    HttpResponse::Ok().json(&US_STATES[..])
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_LIMIT))
        .app_data(web::PayloadConfig::new(UPLOAD_LIMIT))
        .service(
            web::resource("/v1/employee")
                .route(web::get().to(employee::get_employees))
                .route(web::post().to(employee::create_employee)),
        )
        .service(web::resource("/v1/employee/print").route(web::get().to(employee::print_employees)))
        .service(
            web::resource("/v1/employee/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::patch().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        )
        .service(web::resource("/v1/employee/{id}/toggle").route(web::post().to(employee::toggle_status)))
        .service(web::resource("/v1/employee/{id}/print").route(web::get().to(employee::print_employee)))
        .service(web::resource("/v1/stats").route(web::get().to(employee::get_stats)))
        .service(web::resource("/v1/states").route(web::get().to(get_states)))
        .service(web::resource("/v1/file").route(web::post().to(file::upload_file)));
}
