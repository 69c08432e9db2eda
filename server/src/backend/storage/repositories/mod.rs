pub mod entry_repository;
pub mod settings_repository;

pub use entry_repository::EntryRepository;
pub use settings_repository::SettingsRepository;
