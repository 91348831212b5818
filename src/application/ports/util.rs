// src/application/ports/util.rs

/// Turns arbitrary text into a URL-safe token. Must be pure and total.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Source of opaque tokens for records that have nothing to derive a slug from.
pub trait TokenGenerator: Send + Sync {
    fn random_token(&self) -> String;
}
