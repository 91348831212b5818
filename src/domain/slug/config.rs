// src/domain/slug/config.rs

/// Per-type slug settings, fixed when the record type is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugConfig {
    /// Field whose text seeds the slug when none is set.
    pub source_field: &'static str,
    /// Field storing the slug.
    pub slug_field: &'static str,
    /// Keep a null slug instead of falling back to the key or a random token.
    pub nullable: bool,
}

impl SlugConfig {
    pub const DEFAULT: Self = Self::new("name", "slug");

    pub const fn new(source_field: &'static str, slug_field: &'static str) -> Self {
        Self {
            source_field,
            slug_field,
            nullable: false,
        }
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
