use std::{process, sync::Arc};

use folio::{
    application::{blog::BlogService, chrome::ChromeService, error::AppError},
    config,
    infra::{
        catalog,
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::CheckCatalog(_) => run_check_catalog(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let catalog = catalog::load(settings.catalog.path.as_deref()).await?;

    let state = HttpState {
        blog: Arc::new(BlogService::new(Arc::new(catalog))),
        chrome: Arc::new(ChromeService::new(settings.site.clone())),
    };

    let router = http::build_router(state);
    let listener = tokio::net::TcpListener::bind(settings.server.public_addr)
        .await
        .map_err(InfraError::from)?;

    info!(
        target = "folio::serve",
        addr = %settings.server.public_addr,
        theme = settings.site.theme.as_str(),
        "Listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    info!(target = "folio::serve", "Server stopped");
    Ok(())
}

async fn run_check_catalog(settings: config::Settings) -> Result<(), AppError> {
    let catalog = catalog::load(settings.catalog.path.as_deref()).await?;
    let blog = BlogService::new(Arc::new(catalog));
    let tags = blog.catalog().tag_index();

    info!(
        target = "folio::check_catalog",
        posts = blog.catalog().len(),
        tags = ?tags,
        "Catalog is valid"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(target = "folio::serve", error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(target = "folio::serve", error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(target = "folio::serve", "Shutdown signal received");
}
