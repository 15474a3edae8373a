//! Edge-layer integration tests: drive the real `axum::Router` with
//! `tower::ServiceExt::oneshot` against wiremock-backed downstreams, the
//! same way requests actually reach the gateway in production.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hotel_booking_gateway::breaker::CircuitBreaker;
use hotel_booking_gateway::clients::{LoyaltyClient, PaymentClient, ReservationClient};
use hotel_booking_gateway::composition::CompositionService;
use hotel_booking_gateway::controllers::{self, AppState};
use hotel_booking_gateway::retry::RetryQueue;
use hotel_booking_gateway::saga::SagaOrchestrator;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Downstreams {
    reservation: MockServer,
    payment: MockServer,
    loyalty: MockServer,
}

async fn app(downstreams: &Downstreams) -> axum::Router {
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();

    let reservation = ReservationClient::new(
        downstreams.reservation.uri(),
        http.clone(),
        Arc::new(CircuitBreaker::with_defaults()),
    );
    let payment = PaymentClient::new(
        downstreams.payment.uri(),
        http.clone(),
        Arc::new(CircuitBreaker::with_defaults()),
    );
    let loyalty = LoyaltyClient::new(
        downstreams.loyalty.uri(),
        http,
        Arc::new(CircuitBreaker::with_defaults()),
    );

    let (retry, worker) = RetryQueue::new(100);
    worker.spawn();

    let saga = SagaOrchestrator::new(reservation.clone(), payment.clone(), loyalty.clone(), retry);
    let composition = CompositionService::new(reservation, payment, loyalty);

    controllers::router(AppState { composition, saga })
}

async fn downstreams() -> Downstreams {
    Downstreams {
        reservation: MockServer::start().await,
        payment: MockServer::start().await,
        loyalty: MockServer::start().await,
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let downstreams = downstreams().await;
    let app = app(&downstreams).await;

    let response = app
        .oneshot(Request::builder().uri("/manage/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn hotels_requires_no_identity_and_applies_defaults() {
    let downstreams = downstreams().await;

    Mock::given(method("GET"))
        .and(path("/internal/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "pageSize": 10,
            "totalElements": 0,
            "items": []
        })))
        .mount(&downstreams.reservation)
        .await;

    let app = app(&downstreams).await;
    let response = app
        .oneshot(Request::builder().uri("/api/v1/hotels").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn loyalty_requires_identity_header() {
    let downstreams = downstreams().await;
    let app = app(&downstreams).await;

    let response = app
        .oneshot(Request::builder().uri("/api/v1/loyalty").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// S4: the Loyalty service is unreachable; the call still returns 200 with
/// the default BRONZE tier rather than an error.
#[tokio::test]
async fn loyalty_down_degrades_to_default_tier() {
    let downstreams = downstreams().await;
    // No mock registered on `loyalty`: any request gets wiremock's 404,
    // which the client reports back as a downstream failure.
    let app = app(&downstreams).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/loyalty")
                .header("X-User-Name", "Test Max")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "BRONZE", "discount": 0, "reservationCount": 0 })
    );
}

/// S6: user A fetching user B's reservation gets 403.
#[tokio::test]
async fn cross_user_reservation_access_is_forbidden() {
    let downstreams = downstreams().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/internal/reservations/.*$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reservationUid": "res-9",
            "username": "owner",
            "hotelUid": "h1",
            "startDate": "2021-10-08",
            "endDate": "2021-10-11",
            "status": "PAID",
            "paymentUid": "pay-9"
        })))
        .mount(&downstreams.reservation)
        .await;

    let app = app(&downstreams).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/reservations/res-9")
                .header("X-User-Name", "not-the-owner")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn absent_reservation_is_404() {
    let downstreams = downstreams().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/internal/reservations/.*$"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&downstreams.reservation)
        .await;

    let app = app(&downstreams).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/reservations/ghost")
                .header("X-User-Name", "Test Max")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_reservation_happy_path_returns_paid() {
    let downstreams = downstreams().await;

    Mock::given(method("GET"))
        .and(path("/internal/hotels/049161bb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hotelUid": "049161bb",
            "name": "Ararat Park Hyatt Moscow",
            "country": "Russia",
            "city": "Moscow",
            "address": "Neglinnaya st., 4",
            "stars": 5,
            "price": 10000
        })))
        .mount(&downstreams.reservation)
        .await;

    Mock::given(method("GET"))
        .and(path("/internal/loyalty/Test Max"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "GOLD",
            "discount": 10,
            "reservationCount": 26
        })))
        .mount(&downstreams.loyalty)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/internal/loyalty/.*$"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&downstreams.loyalty)
        .await;

    Mock::given(method("POST"))
        .and(path("/internal/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentUid": "pay-1",
            "username": "Test Max",
            "status": "PAID",
            "price": 27000
        })))
        .mount(&downstreams.payment)
        .await;

    Mock::given(method("POST"))
        .and(path("/internal/reservations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reservationUid": "res-1",
            "username": "Test Max",
            "hotelUid": "049161bb",
            "startDate": "2021-10-08",
            "endDate": "2021-10-11",
            "status": "PAID",
            "paymentUid": "pay-1"
        })))
        .mount(&downstreams.reservation)
        .await;

    let app = app(&downstreams).await;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/reservations")
                .header("X-User-Name", "Test Max")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "hotelUid": "049161bb",
                        "startDate": "2021-10-08",
                        "endDate": "2021-10-11"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "PAID");
    assert_eq!(body["discount"], 10);
    assert_eq!(body["payment"]["price"], 27000);
}
