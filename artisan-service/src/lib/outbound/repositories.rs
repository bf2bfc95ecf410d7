pub mod artisan;

pub use artisan::PostgresArtisanRepository;
