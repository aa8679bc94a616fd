// Import the entity types from the public API
use album_store::{ Album, NewAlbum };

// Test the creation and properties of an album record
#[test]
fn test_album_creation() {
    let album = Album {
        id: 0, // Will be set by database
        title: "More".to_string(),
        artist: "Pink Floyd".to_string(),
        price: 9.99,
    };

    // Verify the properties
    assert_eq!(album.id, 0);
    assert_eq!(album.title, "More");
    assert_eq!(album.artist, "Pink Floyd");
    assert_eq!(album.price, 9.99);
}

// Test the insert input type
#[test]
fn test_new_album_creation() {
    let album = NewAlbum {
        title: "The Endless River".to_string(),
        artist: "Pink Floyd".to_string(),
        price: 9.99,
    };

    assert_eq!(album.title, "The Endless River");
    assert_eq!(album.artist, "Pink Floyd");
    assert_eq!(album.price, 9.99);
}

// Test the JSON shape used by the demo binary's output
#[test]
fn test_album_json_shape() {
    let album = Album {
        id: 7,
        title: "Meddle".to_string(),
        artist: "Pink Floyd".to_string(),
        price: 12.5,
    };

    let json = serde_json::to_value(&album).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Meddle");
    assert_eq!(json["artist"], "Pink Floyd");
    assert_eq!(json["price"], 12.5);
}

// The insert input carries no id at all, so an unset id can never leak into
// an INSERT statement
#[test]
fn test_new_album_has_no_id() {
    let album = NewAlbum {
        title: "More".to_string(),
        artist: "Pink Floyd".to_string(),
        price: 9.99,
    };

    let json = serde_json::to_value(&album).unwrap();
    assert!(json.get("id").is_none());
}

// Two albums with the same fields compare equal; the update path relies on
// full-row value semantics
#[test]
fn test_album_equality() {
    let a = Album {
        id: 5,
        title: "Animals".to_string(),
        artist: "Pink Floyd".to_string(),
        price: 10.0,
    };
    let b = a.clone();

    assert_eq!(a, b);
}
