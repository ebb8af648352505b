//! Minimal Supabase client covering session lookup and table inserts.

mod client;
mod error;
mod types;

pub use client::SupabaseClient;
pub use error::SupabaseError;
pub use types::*;
