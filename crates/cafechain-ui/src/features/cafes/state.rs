//! Cafe display projection and listing helpers.

use cafechain_api_models::CafeDto;

/// Read-only cafe card data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cafe {
    /// Cafe identifier.
    pub id: String,
    /// Cafe name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Feature tags.
    pub features: Vec<String>,
    /// Image URLs, cover first.
    pub images: Vec<String>,
}

impl Cafe {
    /// Cover image, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Feature tags capped for card display, with an overflow count.
    #[must_use]
    pub fn feature_badges(&self, max: usize) -> (Vec<&str>, usize) {
        let shown: Vec<&str> = self.features.iter().take(max).map(String::as_str).collect();
        let hidden = self.features.len().saturating_sub(shown.len());
        (shown, hidden)
    }
}

impl From<CafeDto> for Cafe {
    fn from(value: CafeDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            address: value.address,
            phone: value.phone,
            features: value
                .features
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            images: value
                .images
                .into_iter()
                .filter(|url| !url.trim().is_empty())
                .collect(),
        }
    }
}

/// Build the listing path, passing a non-blank search through to the backend.
#[must_use]
pub fn build_cafes_path(search: Option<&str>) -> String {
    search
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .map_or_else(
            || "/api/cafes".to_string(),
            |query| format!("/api/cafes?search={}", urlencoding::encode(query)),
        )
}

/// Heading for the listing page.
#[must_use]
pub fn results_heading(search: Option<&str>, count: usize) -> String {
    match search.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) if count == 1 => format!("1 cafe matching \"{query}\""),
        Some(query) => format!("{count} cafes matching \"{query}\""),
        None if count == 1 => "1 cafe near you".to_string(),
        None => format!("{count} cafes near you"),
    }
}
