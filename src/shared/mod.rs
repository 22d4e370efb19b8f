//! Geteilte Konfiguration für Library-Konsumenten und das Report-Werkzeug.

pub mod options;

pub use options::LayoutOptions;
