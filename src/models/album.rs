use serde::{ Deserialize, Serialize };
use sqlx::mysql::MySqlRow;
use sqlx::Row;

/// A row of the `albums` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    /// Decode an album from a result row by column name
    pub fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            artist: row.try_get("artist")?,
            price: row.try_get("price")?,
        })
    }
}

/// Insert input for an album. The id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}
