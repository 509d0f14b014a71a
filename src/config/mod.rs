pub mod settings;

pub use settings::QuobyteSettings;
