use sqlx::MySqlPool;

use crate::db::common::Repository;
use crate::db::error::{ RepositoryError, Result };
use crate::models::{ Album, NewAlbum };

/// Repository for album database operations
pub struct AlbumRepository {
    pool: MySqlPool,
}

impl AlbumRepository {
    /// Create a new repository instance
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get all albums by an artist, exact match. Returns an empty vector if
    /// no rows match.
    pub async fn list_by_artist(&self, artist: &str) -> Result<Vec<Album>> {
        let rows = sqlx
            ::query("SELECT id, title, artist, price FROM albums WHERE artist = ?")
            .bind(artist)
            .fetch_all(&self.pool).await
            .map_err(RepositoryError::Query)?;

        let mut albums = Vec::with_capacity(rows.len());
        for row in &rows {
            albums.push(Album::from_row(row).map_err(RepositoryError::RowDecode)?);
        }

        log::debug!("Fetched {} albums for artist {}", albums.len(), artist);
        Ok(albums)
    }

    /// Get a single album by id
    pub async fn get_by_id(&self, id: i64) -> Result<Album> {
        let row = sqlx
            ::query("SELECT id, title, artist, price FROM albums WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool).await
            .map_err(|source| RepositoryError::NotFound { id, source })?;

        Album::from_row(&row).map_err(|source| RepositoryError::NotFound { id, source })
    }

    /// Insert a new album, returning the id assigned by the database
    pub async fn insert(&self, album: &NewAlbum) -> Result<i64> {
        let result = sqlx
            ::query("INSERT INTO albums (title, artist, price) VALUES (?, ?, ?)")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(&self.pool).await
            .map_err(RepositoryError::Insert)?;

        let id = result.last_insert_id() as i64;
        log::debug!("Inserted album '{}' with id {}", album.title, id);
        Ok(id)
    }

    /// Overwrite title, artist and price for the row matching the album's id.
    /// Rows-affected is not checked: updating an id with no matching row
    /// reports success.
    pub async fn update(&self, album: &Album) -> Result<()> {
        sqlx
            ::query("UPDATE albums SET title = ?, artist = ?, price = ? WHERE id = ?")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .bind(album.id)
            .execute(&self.pool).await
            .map_err(RepositoryError::Update)?;

        Ok(())
    }

    /// Delete the row matching id. Same no-existence-check policy as update:
    /// deleting an absent id reports success.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx
            ::query("DELETE FROM albums WHERE id = ?")
            .bind(id)
            .execute(&self.pool).await
            .map_err(RepositoryError::Delete)?;

        Ok(())
    }
}

impl Repository for AlbumRepository {
    fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
