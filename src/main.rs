use std::sync::Arc;

use hotel_booking_gateway::breaker::CircuitBreaker;
use hotel_booking_gateway::clients::{LoyaltyClient, PaymentClient, ReservationClient};
use hotel_booking_gateway::composition::CompositionService;
use hotel_booking_gateway::config::Config;
use hotel_booking_gateway::controllers::{self, AppState};
use hotel_booking_gateway::retry::RetryQueue;
use hotel_booking_gateway::saga::SagaOrchestrator;
use tracing_subscriber::EnvFilter;

const RETRY_QUEUE_CAPACITY: usize = 100;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;

    let http = reqwest::Client::builder().timeout(config.downstream_timeout).build()?;

    let reservation = ReservationClient::new(
        config.reservation_url.clone(),
        http.clone(),
        Arc::new(CircuitBreaker::with_defaults()),
    );
    let payment = PaymentClient::new(
        config.payment_url.clone(),
        http.clone(),
        Arc::new(CircuitBreaker::with_defaults()),
    );
    let loyalty = LoyaltyClient::new(
        config.loyalty_url.clone(),
        http,
        Arc::new(CircuitBreaker::with_defaults()),
    );

    let (retry_queue, retry_worker) = RetryQueue::new(RETRY_QUEUE_CAPACITY);
    retry_worker.spawn();

    let saga = SagaOrchestrator::new(reservation.clone(), payment.clone(), loyalty.clone(), retry_queue);
    let composition = CompositionService::new(reservation, payment, loyalty);

    let state = AppState { composition, saga };
    let app = controllers::router(state);

    let addr = config.addr();
    tracing::info!(addr, "starting gateway");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
