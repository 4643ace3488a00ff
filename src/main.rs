// src/main.rs
use anyhow::{Context, Result, bail};
use folio_core::application::{
    dto::TokenSubject,
    ports::{security::TokenManager, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ServiceDependencies},
};
use folio_core::config::{AppConfig, StorageBackend};
use folio_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    user::{Role, UserId, UserRepository, Username},
};
use folio_core::infrastructure::{
    database,
    repositories::{
        InMemoryStore, PostgresArticleRepository, PostgresCategoryRepository,
        PostgresUserRepository,
    },
    security::BiscuitTokenManager,
    system::{DefaultSlugGenerator, SystemClock},
};
use folio_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{collections::HashSet, net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("serve") => serve(config).await,
        Some("issue-token") => issue_token(&config, &args[1..]).await,
        Some(other) => bail!("unknown command '{other}' (expected 'serve' or 'issue-token')"),
    }
}

struct Repositories {
    users: Arc<dyn UserRepository>,
    article_write: Arc<dyn ArticleWriteRepository>,
    article_read: Arc<dyn ArticleReadRepository>,
    categories: Arc<dyn CategoryRepository>,
}

async fn open_repositories(config: &AppConfig) -> Result<Repositories> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database_url())
                .await
                .context("connecting to postgres")?;
            database::run_migrations(&pool)
                .await
                .context("running migrations")?;
            tracing::info!("using postgres storage");

            let articles = Arc::new(PostgresArticleRepository::new(pool.clone()));
            Ok(Repositories {
                users: Arc::new(PostgresUserRepository::new(pool.clone())),
                article_write: articles.clone(),
                article_read: articles,
                categories: Arc::new(PostgresCategoryRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            let store = Arc::new(InMemoryStore::new());
            Ok(Repositories {
                users: store.clone(),
                article_write: store.clone(),
                article_read: store.clone(),
                categories: store,
            })
        }
    }
}

fn token_manager(config: &AppConfig) -> Result<Arc<dyn TokenManager>> {
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    Ok(Arc::new(manager))
}

async fn serve(config: AppConfig) -> Result<()> {
    let repos = open_repositories(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo: repos.users,
        article_write_repo: repos.article_write,
        article_read_repo: repos.article_read,
        category_repo: repos.categories,
        token_manager: token_manager(&config)?,
        clock,
        slugger,
    }));

    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };
    let app = build_router(HttpState { services }, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, rate_limit = options.rate_limit, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// `issue-token <user_id> <username> <role> [subject] [email]`: print a
/// development token signed with the configured root key.
async fn issue_token(config: &AppConfig, args: &[String]) -> Result<()> {
    let [user_id, username, role, rest @ ..] = args else {
        bail!("usage: issue-token <user_id> <username> <role> [subject] [email]");
    };

    let user_id: i64 = user_id.parse().context("user_id must be an integer")?;
    let user_id = UserId::new(user_id)?;
    // The server mirrors this claim into `users`, so it must pass the same rules.
    let username = Username::new(username.as_str())?;
    let role: Role = role.parse()?;
    let subject = rest
        .first()
        .cloned()
        .unwrap_or_else(|| format!("local|{user_id}"));
    let email = rest.get(1).cloned();

    let token = token_manager(config)?
        .issue(TokenSubject {
            user_id,
            subject,
            username: username.to_string(),
            email,
            role,
            capabilities: HashSet::new(),
        })
        .await?;

    println!("{}", token.token);
    tracing::info!(expires_at = %token.expires_at, "token issued");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
