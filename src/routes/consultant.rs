use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::consultant::{
    CreateConsultantForm, DeleteConsultantParams, SearchConsultantsParams, UpdateConsultantForm,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::consultant as consultant_service;

#[post("/consultor")]
pub async fn create_consultant(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateConsultantForm>,
) -> impl Responder {
    match consultant_service::create_consultant(repo.get_ref(), form) {
        Ok(consultant) => HttpResponse::Ok().json(consultant),
        Err(err) => error_response(err),
    }
}

#[put("/consultor")]
pub async fn update_consultant(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateConsultantForm>,
) -> impl Responder {
    match consultant_service::update_consultant(repo.get_ref(), form) {
        Ok(consultant) => HttpResponse::Ok().json(consultant),
        Err(err) => error_response(err),
    }
}

#[delete("/consultor")]
pub async fn delete_consultant(
    repo: web::Data<DieselRepository>,
    params: web::Query<DeleteConsultantParams>,
) -> impl Responder {
    match consultant_service::delete_consultant(repo.get_ref(), params.id) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err),
    }
}

#[get("/consultor")]
pub async fn search_consultants(
    repo: web::Data<DieselRepository>,
    params: web::Query<SearchConsultantsParams>,
) -> impl Responder {
    match consultant_service::search_consultants(repo.get_ref(), params.into_inner()) {
        Ok(consultants) => HttpResponse::Ok().json(consultants),
        Err(err) => error_response(err),
    }
}
