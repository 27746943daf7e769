pub mod artists;
pub mod billboard;
pub mod favorites;
pub mod playlists;
pub mod root;
pub mod songs;
pub mod users;
pub use artists::ArtistController;
pub use billboard::BillboardController;
pub use favorites::FavoriteController;
pub use playlists::PlaylistController;
pub use root::RootController;
pub use songs::SongController;
pub use users::UserController;
