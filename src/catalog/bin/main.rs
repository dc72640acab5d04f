use axum::Router;
use lambda_http::Error;
use tracing::info;
use book_catalog::catalog::controller::routes;
use book_catalog::catalog::factory;
use book_catalog::core::controller::AppState;
use book_catalog::core::domain::{Configuration, RuntimeMode};
use book_catalog::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.log_level.as_str());

    let catalog = factory::create_catalog_service(&config).await;
    let state = AppState::new(config.clone(), catalog);

    match config.runtime {
        RuntimeMode::Lambda => {
            info!(branch = config.branch_id.as_str(), "starting catalog on lambda runtime");
            let app: Router<(), lambda_http::Body> = routes(state);
            lambda_http::run(app).await
        }
        RuntimeMode::Http => {
            info!(branch = config.branch_id.as_str(), addr = %config.bind_addr, "starting catalog http server");
            let app: Router = routes(state);
            axum::Server::bind(&config.bind_addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
