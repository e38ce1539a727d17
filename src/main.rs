// src/main.rs

use dotenvy::dotenv;
use mini_forum::config::Config;
use mini_forum::error::AppError;
use mini_forum::repository::ForumRepository;
use mini_forum::routes;
use mini_forum::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Initialize Database Pool, creating the database file on first run
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to the database");

    tracing::info!("Database connected...");

    // Run Migrations Automatically
    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    let repo = ForumRepository::new(pool.clone());

    // Seed demonstration content on an empty forum
    if let Err(e) = seed_sample_data(&repo).await {
        tracing::error!("Failed to seed sample data: {:?}", e);
    }

    // Create AppState
    let state = AppState { repo, config };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

/// Insert a fixed set of demonstration posts and replies, once, when the forum
/// is empty, then bring the cached counters in line with the tables.
async fn seed_sample_data(repo: &ForumRepository) -> Result<(), AppError> {
    if repo.count_posts().await? > 0 {
        return Ok(());
    }

    tracing::info!("Empty forum, inserting sample data...");

    let welcome = repo
        .create_post(
            "Administrator",
            "Welcome to the Mini Forum!\n\nThis is a small discussion board. \
             Main features:\n\n\
             - Posts and single-level replies\n\
             - The latest 10 posts on the front page\n\
             - Automatic database setup\n\n\
             Feel free to try everything out!",
        )
        .await?;

    let technical = repo
        .create_post(
            "Developer",
            "Technical notes on the project:\n\n\
             - Server-rendered pages with periodic background refresh\n\
             - Input validation on both tiers from a single set of rules\n\
             - Stored markup is stripped down to a safe subset\n\n\
             Bug reports are welcome in the replies.",
        )
        .await?;

    let feedback = repo
        .create_post(
            "Beta Tester",
            "I have been trying the forum out and everything works smoothly. \
             The interface is intuitive and posting is fast. Nice work!",
        )
        .await?;

    repo.create_reply(
        "Demo User",
        "Thanks for the welcome! The forum looks very clean.",
        welcome,
    )
    .await?;
    repo.create_reply(
        "Visitor",
        "Really tidy interface, nice and readable. Congratulations!",
        welcome,
    )
    .await?;
    repo.create_reply(
        "Code Reviewer",
        "The validation rules being shared between tiers is a nice touch.",
        technical,
    )
    .await?;
    repo.create_reply(
        "Project Manager",
        "Perfect for a quick demonstration. Very impressive!",
        feedback,
    )
    .await?;

    // Known-good counters after seeding
    repo.recompute_stats().await?;

    tracing::info!("Sample data inserted.");
    Ok(())
}
