//! Fetch helpers that normalize every backend failure to "no data".

use log::{debug, info, warn};
use storefront_model::{Product, Section, SectionType};

use crate::infra::services::StorefrontApi;

/// Active, renderable sections in server order. Any failure yields an empty
/// page rather than an error.
pub async fn load_active_sections(api: &dyn StorefrontApi) -> Vec<Section> {
    let sections = match api.fetch_sections().await {
        Ok(sections) => sections,
        Err(err) => {
            warn!("[LandingPage] Failed to load sections: {}", err);
            return Vec::new();
        }
    };
    let total = sections.len();
    let active: Vec<Section> = sections
        .into_iter()
        .filter(|s| {
            if !s.is_active {
                return false;
            }
            if s.section_type == SectionType::Unknown {
                debug!("[LandingPage] Skipping section {} of unknown type", s.id);
                return false;
            }
            true
        })
        .collect();
    info!(
        "[LandingPage] Loaded {} of {} sections",
        active.len(),
        total
    );
    active
}

/// Products of a collection, capped at `limit`. A missing collection name,
/// a failed request or an empty payload all yield no products.
pub async fn load_collection(
    api: &dyn StorefrontApi,
    name: Option<&str>,
    limit: Option<usize>,
) -> Vec<Product> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        debug!("[LandingPage] Products section without a collection");
        return Vec::new();
    };
    match api.fetch_collection(name).await {
        Ok(mut products) => {
            if let Some(limit) = limit {
                products.truncate(limit);
            }
            debug!(
                "[LandingPage] Collection '{}': {} products",
                name,
                products.len()
            );
            products
        }
        Err(err) => {
            warn!("[LandingPage] Failed to load collection '{}': {}", name, err);
            Vec::new()
        }
    }
}
