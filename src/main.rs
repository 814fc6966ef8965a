//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod handlers;
mod models;
mod services;
mod views;

use crate::config::AppState;

fn build_router(app_state: AppState) -> Router {
    // Páginas de clientes
    let customer_routes = Router::new()
        .route(
            "/",
            get(handlers::customers::list_page).post(handlers::customers::create),
        )
        .route("/add", get(handlers::customers::add_page))
        .route(
            "/{id}",
            post(handlers::customers::update).delete(handlers::customers::delete),
        )
        .route("/{id}/edit", get(handlers::customers::edit_page));

    // Páginas de leads
    let lead_routes = Router::new()
        .route(
            "/",
            get(handlers::leads::list_page).post(handlers::leads::create),
        )
        .route("/add", get(handlers::leads::add_page))
        .route(
            "/{id}",
            post(handlers::leads::update).delete(handlers::leads::delete),
        )
        .route("/{id}/edit", get(handlers::leads::edit_page));

    // Interações são sempre acessadas a partir de um cliente
    let interaction_routes = Router::new()
        .route(
            "/customers/{id}",
            get(handlers::interactions::list_page).post(handlers::interactions::create),
        )
        .route("/customer/{id}/add", get(handlers::interactions::add_page));

    // API JSON de leitura para os gráficos
    let analytics_routes = Router::new()
        .route(
            "/customers-over-time",
            get(handlers::analytics::customers_over_time),
        )
        .route("/leads-over-time", get(handlers::analytics::leads_over_time))
        .route("/customer-types", get(handlers::analytics::customer_types))
        .route("/lead-status", get(handlers::analytics::lead_status))
        .route("/lead-sources", get(handlers::analytics::lead_sources));

    // Combina tudo no router principal
    Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route("/analytics", get(handlers::pages::analytics))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/customers", customer_routes)
        .nest("/leads", lead_routes)
        .nest("/interactions", interaction_routes)
        .nest("/api/analytics", analytics_routes)
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Inicializa o logger antes de tudo: o boot abaixo já loga.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    let app = build_router(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn test_app() -> (Router, AppState) {
        let app_state = AppState::new_in_memory().await;
        (build_router(app_state.clone()), app_state)
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[tokio::test]
    async fn health_probe_responds_ok() {
        let (app, _) = test_app().await;

        let response = app.oneshot(get_request("/api/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn create_customer_redirects_and_shows_on_list() {
        let (app, _) = test_app().await;

        let response = app
            .clone()
            .oneshot(form_post(
                "/customers",
                "name=ACME+Ltda&email=contato%40acme.com&customerType=Empresa",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/customers"
        );

        let list = app.oneshot(get_request("/customers")).await.unwrap();
        assert_eq!(list.status(), StatusCode::OK);
        assert!(body_string(list).await.contains("ACME Ltda"));
    }

    #[tokio::test]
    async fn invalid_customer_payload_is_bad_request() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(form_post(
                "/customers",
                "name=&email=isso-nao-e-email&customerType=Empresa",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_missing_customer_is_not_found() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(form_post(
                "/customers/42",
                "name=Fantasma&email=f%40g.com&customerType=Individual",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_customer_cascades_and_returns_no_content() {
        let (app, _) = test_app().await;

        // Cliente 1 com lead 1
        app.clone()
            .oneshot(form_post(
                "/customers",
                "name=ACME&email=contato%40acme.com&customerType=Empresa",
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(form_post("/leads", "customerId=1&source=Site&status=Novo"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/customers/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // O cliente e o lead dele sumiram das páginas
        let edit = app
            .clone()
            .oneshot(get_request("/customers/1/edit"))
            .await
            .unwrap();
        assert_eq!(edit.status(), StatusCode::NOT_FOUND);

        let lead_edit = app.oneshot(get_request("/leads/1/edit")).await.unwrap();
        assert_eq!(lead_edit.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_lead_redirects_to_lead_list() {
        let (app, _) = test_app().await;

        app.clone()
            .oneshot(form_post(
                "/customers",
                "name=ACME&email=contato%40acme.com&customerType=Empresa",
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(form_post(
                "/leads",
                "customerId=1&source=Site&status=Novo&topic=Or%C3%A7amento",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/leads");

        let list = app.oneshot(get_request("/leads")).await.unwrap();
        let body = body_string(list).await;
        assert!(body.contains("ACME"));
        assert!(body.contains("Orçamento"));
    }

    #[tokio::test]
    async fn lead_for_missing_customer_is_unprocessable() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(form_post("/leads", "customerId=999&source=Site&status=Novo"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn edit_page_of_missing_lead_is_not_found() {
        let (app, _) = test_app().await;

        let response = app.oneshot(get_request("/leads/42/edit")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn interaction_without_time_is_stamped_with_now() {
        let (app, app_state) = test_app().await;

        app.clone()
            .oneshot(form_post(
                "/customers",
                "name=ACME&email=contato%40acme.com&customerType=Empresa",
            ))
            .await
            .unwrap();

        let before = chrono::Utc::now();
        let response = app
            .oneshot(form_post(
                "/interactions/customers/1",
                "time=&type=E-mail&topic=Boas-vindas",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/interactions/customers/1"
        );

        let stored = app_state
            .interaction_service
            .find_by_customer(1)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].time >= before && stored[0].time <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn interaction_with_bad_time_is_bad_request() {
        let (app, _) = test_app().await;

        app.clone()
            .oneshot(form_post(
                "/customers",
                "name=ACME&email=contato%40acme.com&customerType=Empresa",
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(form_post(
                "/interactions/customers/1",
                "time=ontem&type=Liga%C3%A7%C3%A3o",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn interaction_list_of_missing_customer_is_not_found() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(get_request("/interactions/customers/7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn customer_types_endpoint_returns_grouped_json() {
        let (app, _) = test_app().await;

        for body in [
            "name=ACME&email=a%40acme.com&customerType=Empresa",
            "name=Umbrella&email=u%40umbrella.com&customerType=Empresa",
            "name=Ana&email=ana%40exemplo.com&customerType=Individual",
        ] {
            app.clone().oneshot(form_post("/customers", body)).await.unwrap();
        }

        let response = app
            .oneshot(get_request("/api/analytics/customer-types"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["category"], "Empresa");
        assert_eq!(entries[0]["count"], 2);
        assert_eq!(entries[1]["category"], "Individual");
        assert_eq!(entries[1]["count"], 1);
    }

    #[tokio::test]
    async fn dashboard_page_renders_with_counts() {
        let (app, _) = test_app().await;

        app.clone()
            .oneshot(form_post(
                "/customers",
                "name=ACME&email=contato%40acme.com&customerType=Empresa",
            ))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Clientes"));
        assert!(body.contains("Leads"));
    }
}
