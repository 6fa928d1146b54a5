//! Serialization and deserialization using serde.

mod de;
mod ser;
