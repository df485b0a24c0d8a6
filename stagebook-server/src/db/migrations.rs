//! Schema for venues, artists and shows
//!
//! Every statement is idempotent so this runs on each startup. The whole
//! schema is applied in one transaction holding an advisory lock, so
//! processes starting together don't race on `CREATE TABLE`.

use sqlx::{PgConnection, PgPool};

/// Advisory lock key held while the schema is applied.
const SCHEMA_LOCK_KEY: i64 = 0x5354_4147_4542_4b;

/// Apply the schema.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(200) NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            address VARCHAR(120) NOT NULL,
            phone VARCHAR(120),
            image_link VARCHAR(500),
            facebook_link VARCHAR(120),
            genres TEXT[] NOT NULL DEFAULT '{}',
            website VARCHAR(200),
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(200) NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            phone VARCHAR(120),
            genres TEXT[] NOT NULL DEFAULT '{}',
            image_link VARCHAR(500),
            facebook_link VARCHAR(120),
            website VARCHAR(200),
            seeking_venue BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Deleting a venue or artist takes its shows with it.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id BIGSERIAL PRIMARY KEY,
            artist_id BIGINT NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
            venue_id BIGINT NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
            start_time TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    create_indexes(&mut tx).await?;
    tx.commit().await?;

    tracing::info!("Migrations complete");
    Ok(())
}

async fn create_indexes(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_location ON venues(state, city)")
        .execute(&mut *conn)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
        .execute(&mut *conn)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
        .execute(&mut *conn)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_start_time ON shows(start_time)")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
