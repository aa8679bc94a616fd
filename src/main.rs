/******************************************************************************
 * ALBUM STORE DEMO ENTRY POINT
 *
 * Runs one illustrative call against each repository operation: list the
 * albums for an artist, look one up by id, then insert, update and delete a
 * row end to end. Every step is fatal on first failure.
 ******************************************************************************/

use anyhow::{ Context, Result };
use clap::Parser;

use album_store::{
    db::{ Database, DbConfig },
    db::repositories::AlbumRepository,
    models::{ Album, NewAlbum },
};

// Default values
const DEFAULT_ARTIST: &str = "Pink Floyd";
const DEFAULT_ALBUM_ID: i64 = 4;

/// Album store demo CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Artist used for the listing, insert and update steps
    #[arg(long, default_value = DEFAULT_ARTIST)]
    artist: String,

    /// Existing album id used for the lookup step
    #[arg(long, default_value_t = DEFAULT_ALBUM_ID)]
    album_id: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Get database configuration
    let db_config = DbConfig::from_env().context("Failed to get database configuration")?;

    // Connect to the database
    let db = Database::connect(db_config).await.context("Failed to connect to database")?;

    let repository = AlbumRepository::new(db.pool().clone());

    // List albums by artist
    let albums = repository.list_by_artist(&cli.artist).await?;
    println!("Albums by {}: {}", cli.artist, serde_json::to_string_pretty(&albums)?);

    // Look one album up by id
    let album = repository.get_by_id(cli.album_id).await?;
    println!("Album by id {}: {:?}", cli.album_id, album);

    // Add an album; the database assigns the id
    let new_id = repository
        .insert(
            &(NewAlbum {
                title: "More".to_string(),
                artist: cli.artist.clone(),
                price: 9.99,
            })
        ).await?;
    println!("Added album with id: {}", new_id);

    // Update the freshly inserted row in place
    repository
        .update(
            &(Album {
                id: new_id,
                title: "The Endless River".to_string(),
                artist: cli.artist.clone(),
                price: 9.99,
            })
        ).await?;
    println!("Album updated");

    // Delete it again
    repository.delete(new_id).await?;
    println!("Album deleted");

    Ok(())
}
