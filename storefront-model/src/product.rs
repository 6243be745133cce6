use serde::{Deserialize, Serialize};

use crate::de::{loose_bool, null_as_default};
use crate::ids::ProductId;
use crate::price::Price;

/// Catalog product as returned by a collection listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub old_price: Option<Price>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub on_sale: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feature_images: Vec<String>,
}

impl Product {
    /// Image to show on a product card. Stores fill different fields, so the
    /// first non-empty of `thumbnail_image`, `thumbnail`, `image` and the
    /// first feature image wins.
    pub fn display_image(&self) -> Option<&str> {
        [
            self.thumbnail_image.as_deref(),
            self.thumbnail.as_deref(),
            self.image.as_deref(),
            self.feature_images.first().map(String::as_str),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
    }

    /// Previous price, only when the product is on sale and it was higher.
    pub fn strike_price(&self) -> Option<Price> {
        self.old_price
            .filter(|old| self.on_sale && *old > self.price)
    }

    pub fn discount_percent(&self) -> Option<u8> {
        self.strike_price()
            .and_then(|old| self.price.discount_from(old))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: serde_json::Value) -> Product {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn image_fallback_order() {
        let p = product(serde_json::json!({
            "id": 1, "title": "Mug", "price": 10,
            "thumbnail": "", "image": "mug.png",
            "feature_images": ["mug-1.png"]
        }));
        assert_eq!(p.display_image(), Some("mug.png"));

        let p = product(serde_json::json!({
            "id": 2, "title": "Cap", "price": "12.00",
            "feature_images": ["cap-1.png", "cap-2.png"]
        }));
        assert_eq!(p.display_image(), Some("cap-1.png"));

        let p = product(serde_json::json!({
            "id": 3, "title": "Pin", "price": 1,
            "thumbnail_image": "pin-t.png", "thumbnail": "pin.png"
        }));
        assert_eq!(p.display_image(), Some("pin-t.png"));
    }

    #[test]
    fn discount_only_when_on_sale() {
        let mut p = product(serde_json::json!({
            "id": "sku-9", "title": "Lamp", "price": 30,
            "old_price": "40", "on_sale": true
        }));
        assert_eq!(p.discount_percent(), Some(25));

        p.on_sale = false;
        assert_eq!(p.strike_price(), None);
        assert_eq!(p.discount_percent(), None);
    }
}
