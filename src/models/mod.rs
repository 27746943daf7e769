pub mod artist;
pub mod billboard;
pub mod favorite;
pub mod playlist;
pub mod song;
pub mod user;
