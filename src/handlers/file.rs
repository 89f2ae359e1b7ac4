use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::AppError;
use crate::models::file::FileUploadResponse;
use crate::utils::image::image_data_uri;

/// Accepts a raw image body and hands back an inline data URI. Nothing is
/// stored; the client puts the URI on the employee form.
pub async fn upload_file(file: web::Bytes) -> Result<HttpResponse, AppError> {
    let uri = image_data_uri(&file)?;
    info!("Accepted profile image of {} bytes", file.len());
    Ok(HttpResponse::Ok().json(FileUploadResponse { uri }))
}
