//! Course listing endpoint.
//!
//! ```text
//! GET /api/v1/courses
//! ```

use actix_web::{HttpResponse, get, web};
use tracing::warn;

use crate::domain::{Course, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List the courses a registrant can pick.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Selectable courses", body = [Course]),
        (status = 503, description = "Course catalogue unavailable", body = Error)
    ),
    tags = ["registration"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let courses = state.catalogue.list_courses().await.map_err(|err| {
        warn!(error = %err, "course catalogue unavailable");
        Error::service_unavailable("Course catalogue unavailable")
    })?;
    Ok(HttpResponse::Ok().json(courses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldSchema;
    use crate::domain::ports::{CourseCatalogueError, MockCourseCatalogue};
    use crate::inbound::http::state::HttpStatePorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn call(catalogue: MockCourseCatalogue) -> (StatusCode, Value) {
        let ports = HttpStatePorts {
            catalogue: Arc::new(catalogue),
            ..HttpStatePorts::default()
        };
        let state = HttpState::new(Arc::new(FieldSchema::default()), ports);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(list_courses)),
        )
        .await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/courses").to_request(),
        )
        .await;
        let status = response.status();
        (status, test::read_body_json(response).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn lists_catalogue_courses() {
        let mut catalogue = MockCourseCatalogue::new();
        catalogue.expect_list_courses().times(1).returning(|| {
            let id = crate::domain::CourseId::new("rust").expect("valid id");
            Ok(vec![Course::new(id, "Rust Basics").expect("valid course")])
        });

        let (status, body) = call(catalogue).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": "rust", "label": "Rust Basics" }]));
    }

    #[rstest]
    #[actix_web::test]
    async fn catalogue_outage_is_service_unavailable() {
        let mut catalogue = MockCourseCatalogue::new();
        catalogue
            .expect_list_courses()
            .returning(|| Err(CourseCatalogueError::connection("timed out")));

        let (status, body) = call(catalogue).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "service_unavailable");
    }
}
