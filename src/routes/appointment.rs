use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::appointment::{
    CreateAppointmentForm, DeleteAppointmentParams, SearchAppointmentsParams,
    UpdateAppointmentForm,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::appointment as appointment_service;

#[post("/compromisso")]
pub async fn create_appointment(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateAppointmentForm>,
) -> impl Responder {
    match appointment_service::create_appointment(repo.get_ref(), form) {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(err) => error_response(err),
    }
}

#[put("/compromisso")]
pub async fn update_appointment(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateAppointmentForm>,
) -> impl Responder {
    match appointment_service::update_appointment(repo.get_ref(), form) {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(err) => error_response(err),
    }
}

#[delete("/compromisso")]
pub async fn delete_appointment(
    repo: web::Data<DieselRepository>,
    params: web::Query<DeleteAppointmentParams>,
) -> impl Responder {
    match appointment_service::delete_appointment(repo.get_ref(), params.id) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err),
    }
}

#[get("/compromisso")]
pub async fn search_appointments(
    repo: web::Data<DieselRepository>,
    params: web::Query<SearchAppointmentsParams>,
) -> impl Responder {
    match appointment_service::search_appointments(repo.get_ref(), params.into_inner()) {
        Ok(statement) => HttpResponse::Ok().json(statement),
        Err(err) => error_response(err),
    }
}
