pub use grafo_core::format::OutputFormat;
