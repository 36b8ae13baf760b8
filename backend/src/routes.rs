use actix_files::Files;
use actix_web::{web, HttpResponse};
use log::info;
use serde_json::json;
use shared::DoctorQuery;

use crate::doctors::mock_doctors;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.service(web::resource("/api/find-doctors").route(web::post().to(find_doctors)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

/// Mock lookup endpoint. The query is logged for visibility but does not
/// influence the response.
async fn find_doctors(query: web::Json<DoctorQuery>) -> HttpResponse {
    info!(
        "Doctor search request: pin_code={:?} city={:?}",
        query.pin_code, query.city
    );

    HttpResponse::Ok().json(json!({ "doctors": mock_doctors() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use shared::DoctorSearchResponse;

    fn app_config(cfg: &mut web::ServiceConfig) {
        cfg.service(web::resource("/api/find-doctors").route(web::post().to(find_doctors)));
    }

    #[actix_web::test]
    async fn returns_three_doctors_for_any_query() {
        let app = test::init_service(App::new().configure(app_config)).await;

        let req = test::TestRequest::post()
            .uri("/api/find-doctors")
            .set_json(json!({ "pinCode": "110001", "city": "Delhi" }))
            .to_request();
        let body: DoctorSearchResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.doctors.len(), 3);
        assert_eq!(body.doctors[0].name, "Dr. Sarah Johnson");
    }

    #[actix_web::test]
    async fn query_content_does_not_change_the_response() {
        let app = test::init_service(App::new().configure(app_config)).await;

        let empty = test::TestRequest::post()
            .uri("/api/find-doctors")
            .set_json(json!({ "pinCode": "", "city": "" }))
            .to_request();
        let a: DoctorSearchResponse = test::call_and_read_body_json(&app, empty).await;

        let full = test::TestRequest::post()
            .uri("/api/find-doctors")
            .set_json(json!({ "pinCode": "999999", "city": "Nowhere" }))
            .to_request();
        let b: DoctorSearchResponse = test::call_and_read_body_json(&app, full).await;

        assert_eq!(a.doctors, b.doctors);
    }

    #[actix_web::test]
    async fn rejects_a_non_json_body() {
        let app = test::init_service(App::new().configure(app_config)).await;

        let req = test::TestRequest::post()
            .uri("/api/find-doctors")
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
