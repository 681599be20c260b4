use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Result;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ngo_core::application::{
    commands::submissions::MailBranding,
    ports::{
        mailer::Mailer,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        uploads::FileStore,
    },
    services::{ApplicationServices, Repositories},
};
use ngo_core::config::AppConfig;
use ngo_core::infrastructure::{
    database,
    mailer::LogMailer,
    repositories::{
        PostgresAppointmentRepository, PostgresBlogRepository, PostgresCommentRepository,
        PostgresContactRepository, PostgresEventRepository, PostgresGalleryRepository,
        PostgresIdeaRepository, PostgresMediaRepository, PostgresMembershipRepository,
        PostgresSlugLookup, PostgresStoryRepository, PostgresSubscriptionRepository,
        PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, BiscuitTokenManager},
    time::SystemClock,
    uploads::DiskFileStore,
};
use ngo_core::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        blogs: Arc::new(PostgresBlogRepository::new(pool.clone())),
        ideas: Arc::new(PostgresIdeaRepository::new(pool.clone())),
        media: Arc::new(PostgresMediaRepository::new(pool.clone())),
        events: Arc::new(PostgresEventRepository::new(pool.clone())),
        stories: Arc::new(PostgresStoryRepository::new(pool.clone())),
        gallery: Arc::new(PostgresGalleryRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        contacts: Arc::new(PostgresContactRepository::new(pool.clone())),
        appointments: Arc::new(PostgresAppointmentRepository::new(pool.clone())),
        memberships: Arc::new(PostgresMembershipRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        slug_lookup: Arc::new(PostgresSlugLookup::new(pool.clone())),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let mailer: Arc<dyn Mailer> = Arc::new(LogMailer);
    let uploads: Arc<dyn FileStore> = Arc::new(DiskFileStore::new(config.uploads_dir()));

    let branding = MailBranding {
        org_name: config.org_name().to_string(),
        inbox: config.contact_inbox().to_string(),
        frontend_url: config.frontend_url().to_string(),
    };

    let services = Arc::new(ApplicationServices::new(
        repos,
        password_hasher,
        token_manager,
        mailer,
        clock,
        branding,
    ));

    let state = HttpState {
        services,
        uploads,
    };

    let app = build_router(
        state,
        Path::new(config.uploads_dir()),
        config.allowed_origins(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
