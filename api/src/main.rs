use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use tutora_api::{app, config, middleware::cors::create_cors, telemetry, AppState};
use tutora_core::DomainEvent;
use tutora_infra::BroadcastEventPublisher;
use tutora_shared::phone::mask_phone_number;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load()?;
    telemetry::init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting Tutora API server");

    let events = Arc::new(BroadcastEventPublisher::default());
    spawn_event_logger(events.subscribe());

    let state = web::Data::new(AppState::from_config(&config, events).await?);

    let bind_address = config.server.bind_address();
    let server_config = config.server.clone();
    let environment = config.environment;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(create_cors(&server_config, environment))
            .wrap(TracingLogger::default())
            .configure(app::configure)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    info!(address = %bind_address, "Server listening");
    server.bind(&bind_address)?.run().await?;

    Ok(())
}

/// Log domain events as they are published
fn spawn_event_logger(mut events: Receiver<DomainEvent>) {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(DomainEvent::PhoneVerified(event)) => info!(
                    user_id = %event.user_id,
                    phone = %mask_phone_number(&event.phone),
                    verified_at = %event.verified_at,
                    event = "phone_verified",
                    "Domain event received"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event logger fell behind; events dropped")
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}
