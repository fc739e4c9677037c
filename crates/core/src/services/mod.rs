pub mod favorites;
pub mod tmdb;

pub use favorites::FavoritesService;
pub use tmdb::{CatalogResponse, TmdbService};
