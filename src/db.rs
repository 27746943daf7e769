use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::types::chrono::Utc;
use tracing::debug;

use crate::models::artist::{Artist, ArtistSong};
use crate::models::billboard::BillboardEntry;
use crate::models::favorite::FavoriteSong;
use crate::models::playlist::{NewPlaylist, Playlist, PublicPlaylist};
use crate::models::song::{SongDetail, SongListing};
use crate::models::user::{ProfileUpdate, User};
use crate::secrets::SecretManager;
use crate::utils::like_pattern;

pub const USER_SEARCH_LIMIT: i64 = 10;
pub const BILLBOARD_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

/// Connection options from the `MYSQL*` secrets.
pub fn connect_options(secrets: &SecretManager) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&secrets.get("MYSQLHOST"))
        .port(secrets.mysql_port())
        .username(&secrets.get("MYSQLUSER"))
        .password(&secrets.get("MYSQLPASSWORD"))
        .database(&secrets.get("MYSQLDATABASE"))
}

impl Database {
    pub async fn new(secrets: &SecretManager) -> Result<Self, sqlx::Error> {
        debug!(
            "MYSQLHOST={} MYSQLPORT={} MYSQLDATABASE={}",
            secrets.get("MYSQLHOST"),
            secrets.mysql_port(),
            secrets.get("MYSQLDATABASE")
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(secrets.max_connections())
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(connect_options(secrets))
            .await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Borrows a pooled connection and hands it straight back.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let conn = self.pool.acquire().await?;
        drop(conn);
        Ok(())
    }

    // Favorites

    /// Flips the favorite flag for the pair and returns the new state.
    pub async fn toggle_favorite_song(&self, user_id: i32, song_id: i32) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM Favorite_Songs WHERE user_id = ? AND song_id = ?")
            .bind(user_id)
            .bind(song_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !removed {
            sqlx::query("INSERT INTO Favorite_Songs (user_id, song_id, favorited_at) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(song_id)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(!removed)
    }

    pub async fn list_favorite_songs(&self, user_id: i32) -> Result<Vec<FavoriteSong>, sqlx::Error> {
        sqlx::query_as::<_, FavoriteSong>(
            "SELECT S.song_id, S.title, A.name AS artist, S.genre, S.duration, S.release_year, FS.favorited_at
             FROM Favorite_Songs FS
             INNER JOIN Songs S ON FS.song_id = S.song_id
             INNER JOIN Artists A ON S.artist_id = A.artist_id
             WHERE FS.user_id = ?
             ORDER BY FS.favorited_at DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    // Artists

    pub async fn list_artists(&self) -> Result<Vec<Artist>, sqlx::Error> {
        sqlx::query_as::<_, Artist>("SELECT artist_id, name FROM Artists ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_artist(&self, artist_id: i32) -> Result<Option<Artist>, sqlx::Error> {
        sqlx::query_as::<_, Artist>("SELECT artist_id, name FROM Artists WHERE artist_id = ?")
            .bind(artist_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_artist_songs(&self, artist_id: i32) -> Result<Vec<ArtistSong>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSong>(
            "SELECT song_id, title, genre, duration, release_year
             FROM Songs
             WHERE artist_id = ?
             ORDER BY title ASC"
        )
        .bind(artist_id)
        .fetch_all(&self.pool)
        .await
    }

    // Songs

    pub async fn list_songs(&self) -> Result<Vec<SongListing>, sqlx::Error> {
        sqlx::query_as::<_, SongListing>(
            "SELECT S.song_id, S.title, A.name AS artist, S.genre, S.duration, S.release_year
             FROM Songs S
             INNER JOIN Artists A ON S.artist_id = A.artist_id
             ORDER BY S.title ASC"
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_song(&self, song_id: i32) -> Result<Option<SongDetail>, sqlx::Error> {
        sqlx::query_as::<_, SongDetail>(
            "SELECT S.song_id, S.title, A.name AS artist, S.genre, S.lyrics, S.duration, S.release_year
             FROM Songs S
             INNER JOIN Artists A ON S.artist_id = A.artist_id
             WHERE S.song_id = ?"
        )
        .bind(song_id)
        .fetch_optional(&self.pool)
        .await
    }

    // Playlists

    pub async fn list_playlists(&self, user_id: i32) -> Result<Vec<Playlist>, sqlx::Error> {
        sqlx::query_as::<_, Playlist>(
            "SELECT playlist_id, user_id, name, description, color_hex, created_at
             FROM Playlists
             WHERE user_id = ?
             ORDER BY created_at DESC, playlist_id DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_playlist(&self, playlist_id: i32) -> Result<Option<Playlist>, sqlx::Error> {
        sqlx::query_as::<_, Playlist>(
            "SELECT playlist_id, user_id, name, description, color_hex, created_at
             FROM Playlists
             WHERE playlist_id = ?"
        )
        .bind(playlist_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_playlist_songs(&self, playlist_id: i32) -> Result<Vec<SongListing>, sqlx::Error> {
        sqlx::query_as::<_, SongListing>(
            "SELECT S.song_id, S.title, A.name AS artist, S.genre, S.duration, S.release_year
             FROM Playlist_Songs PS
             INNER JOIN Songs S ON PS.song_id = S.song_id
             INNER JOIN Artists A ON S.artist_id = A.artist_id
             WHERE PS.playlist_id = ?
             ORDER BY S.title ASC"
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Inserts the playlist and returns its new id.
    pub async fn create_playlist(&self, playlist: &NewPlaylist) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO Playlists (user_id, name, description, color_hex, created_at) VALUES (?, ?, ?, ?, ?)"
        )
        .bind(playlist.user_id)
        .bind(&playlist.name)
        .bind(&playlist.description)
        .bind(&playlist.color_hex)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    /// Adding a pair that is already present leaves the single existing row in place.
    pub async fn add_song_to_playlist(&self, playlist_id: i32, song_id: i32) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO Playlist_Songs (playlist_id, song_id) VALUES (?, ?)
             ON DUPLICATE KEY UPDATE song_id = song_id"
        )
        .bind(playlist_id)
        .bind(song_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove_song_from_playlist(&self, playlist_id: i32, song_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM Playlist_Songs WHERE playlist_id = ? AND song_id = ?")
            .bind(playlist_id)
            .bind(song_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Drops the membership rows and then the playlist, atomically.
    pub async fn delete_playlist(&self, playlist_id: i32) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM Playlist_Songs WHERE playlist_id = ?")
            .bind(playlist_id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM Playlists WHERE playlist_id = ?")
            .bind(playlist_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted)
    }

    // Users

    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, sqlx::Error> {
        let pattern = like_pattern(query);
        sqlx::query_as::<_, User>(
            "SELECT user_id, username, email, created_at
             FROM Users
             WHERE username LIKE ? OR email LIKE ?
             LIMIT ?"
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(USER_SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT user_id, username, email, created_at FROM Users WHERE user_id = ?"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count_user_playlists(&self, user_id: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM Playlists WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn count_user_distinct_songs(&self, user_id: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(DISTINCT PS.song_id)
             FROM Playlist_Songs PS
             INNER JOIN Playlists P ON PS.playlist_id = P.playlist_id
             WHERE P.user_id = ?"
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_public_playlists(&self, user_id: i32) -> Result<Vec<PublicPlaylist>, sqlx::Error> {
        sqlx::query_as::<_, PublicPlaylist>(
            "SELECT P.playlist_id AS id, P.name, P.description, P.color_hex AS color, P.created_at,
                    COUNT(PS.song_id) AS count
             FROM Playlists P
             LEFT JOIN Playlist_Songs PS ON P.playlist_id = PS.playlist_id
             WHERE P.user_id = ?
             GROUP BY P.playlist_id, P.name, P.description, P.color_hex, P.created_at
             ORDER BY P.created_at DESC, P.playlist_id DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Renames the user unless another account already holds `username`.
    pub async fn update_username(&self, user_id: i32, username: &str) -> Result<ProfileUpdate, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let taken: Option<i32> = sqlx::query_scalar(
            "SELECT user_id FROM Users WHERE username = ? AND user_id != ? LIMIT 1 FOR UPDATE"
        )
        .bind(username)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if taken.is_some() {
            // Dropping the transaction rolls it back.
            return Ok(ProfileUpdate::UsernameTaken);
        }

        sqlx::query("UPDATE Users SET username = ? WHERE user_id = ?")
            .bind(username)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ProfileUpdate::Updated)
    }

    // Billboard

    pub async fn billboard_top(&self) -> Result<Vec<BillboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, BillboardEntry>(
            "SELECT b.`rank` AS `rank`, b.last_week, b.weeks_on_chart,
                    s.song_id, s.title, a.name AS artist, s.genre, s.duration
             FROM Billboard_Top_Songs b
             INNER JOIN Songs s ON b.song_id = s.song_id
             INNER JOIN Artists a ON s.artist_id = a.artist_id
             ORDER BY b.`rank` ASC
             LIMIT ?"
        )
        .bind(BILLBOARD_LIMIT)
        .fetch_all(&self.pool)
        .await
    }
}
