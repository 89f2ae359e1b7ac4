use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::errors::AppError;
use crate::handlers::{lock, Roster};
use crate::models::employee::{EmployeeForm, EmployeeId, EmployeePatch};
use crate::store::Outcome;
use crate::utils::filter::{Criteria, GenderFilter, StatusFilter};
use crate::utils::print;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate, Debug, Default)]
pub struct EmployeeQueryParams {
    #[validate(length(max = 100))]
    search: Option<String>,
    gender: Option<String>,
    status: Option<String>,
}

impl TryFrom<&EmployeeQueryParams> for Criteria {
    type Error = AppError;

    fn try_from(params: &EmployeeQueryParams) -> Result<Self, Self::Error> {
        let gender = params
            .gender
            .as_deref()
            .unwrap_or("all")
            .parse::<GenderFilter>()
            .map_err(AppError::BadRequest)?;
        let status = params
            .status
            .as_deref()
            .unwrap_or("all")
            .parse::<StatusFilter>()
            .map_err(AppError::BadRequest)?;

        Ok(Criteria {
            search: params.search.clone().unwrap_or_default(),
            gender,
            status,
        })
    }
}

fn criteria(query: &EmployeeQueryParams) -> Result<Criteria, AppError> {
    validate_payload(query)?;
    Criteria::try_from(query)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    id: EmployeeId,
    is_active: bool,
}

fn not_found(id: &EmployeeId) -> AppError {
    AppError::NotFound(format!("Employee {} not found", id))
}

pub async fn get_employees(
    store: web::Data<Roster>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, AppError> {
    let criteria = criteria(&query)?;
    let store = lock(&store)?;
    let employees = store.filter(&criteria);
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    store: web::Data<Roster>,
    new_employee: web::Json<EmployeeForm>,
) -> Result<HttpResponse, AppError> {
    let employee = lock(&store)?.create(&new_employee)?;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employee(
    store: web::Data<Roster>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = EmployeeId::from(id.into_inner());
    let store = lock(&store)?;
    let employee = store.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    store: web::Data<Roster>,
    id: web::Path<String>,
    updates: web::Json<EmployeePatch>,
) -> Result<HttpResponse, AppError> {
    let id = EmployeeId::from(id.into_inner());
    let mut store = lock(&store)?;
    let current = store.get(&id).ok_or_else(|| not_found(&id))?.to_form();
    let form = updates.into_inner().merge_into(current);
    match store.update(&id, &form)? {
        Outcome::Found(employee) => Ok(HttpResponse::Ok().json(employee)),
        Outcome::NotFound => Err(not_found(&id)),
    }
}

pub async fn delete_employee(
    store: web::Data<Roster>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = EmployeeId::from(id.into_inner());
    match lock(&store)?.delete(&id)? {
        Outcome::Found(employee) => Ok(HttpResponse::Ok().json(json!({
            "message": format!("{} has been deleted", employee.full_name),
            "employee": employee,
        }))),
        Outcome::NotFound => Err(not_found(&id)),
    }
}

pub async fn toggle_status(
    store: web::Data<Roster>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = EmployeeId::from(id.into_inner());
    match lock(&store)?.toggle_status(&id)? {
        Outcome::Found(is_active) => Ok(HttpResponse::Ok().json(StatusResponse { id, is_active })),
        Outcome::NotFound => Err(not_found(&id)),
    }
}

pub async fn print_employee(
    store: web::Data<Roster>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = EmployeeId::from(id.into_inner());
    let store = lock(&store)?;
    let employee = store.get(&id).ok_or_else(|| not_found(&id))?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(print::render_employee(employee)))
}

pub async fn print_employees(
    store: web::Data<Roster>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, AppError> {
    let criteria = criteria(&query)?;
    let store = lock(&store)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(print::render_table(store.filter(&criteria))))
}

pub async fn get_stats(store: web::Data<Roster>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(lock(&store)?.stats()))
}
