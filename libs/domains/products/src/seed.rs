//! Fixed sample catalog written by the seed operation

use crate::models::CreateProduct;

type Sample = (
    &'static str,
    &'static str,
    f64,
    &'static str,
    &'static str,
    &'static str,
    [&'static str; 2],
    f64,
);

// title, description, price, category, unsplash photo, brand, tags, rating
const SAMPLES: [Sample; 4] = [
    (
        "Velvet Matte Lipstick",
        "Rich pigment, long-lasting matte finish",
        14.99,
        "makeup",
        "photo-1585218336020-3a9c1a66d0d8",
        "GlowLab",
        ["lipstick", "matte"],
        4.6,
    ),
    (
        "Hydrating Face Serum",
        "Hyaluronic acid + Vitamin B5 for deep hydration",
        24.5,
        "skincare",
        "photo-1611930022073-b7a4ba5fcccd",
        "PureSkin",
        ["serum", "hydrating"],
        4.8,
    ),
    (
        "Nourishing Hair Oil",
        "Lightweight oil for shine and frizz control",
        18.0,
        "haircare",
        "photo-1604654894610-df63bc536371",
        "SilkRoot",
        ["hair", "oil"],
        4.5,
    ),
    (
        "Mineral Sunscreen SPF 50",
        "Broad spectrum, reef-safe mineral sunscreen",
        19.99,
        "skincare",
        "photo-1610384104073-96d02d53c16f",
        "SunVeil",
        ["sunscreen", "spf50"],
        4.7,
    ),
];

/// The four products inserted into an empty catalog.
pub fn sample_products() -> Vec<CreateProduct> {
    SAMPLES
        .iter()
        .map(
            |&(title, description, price, category, photo, brand, tags, rating)| CreateProduct {
                title: title.to_string(),
                description: Some(description.to_string()),
                price,
                category: Some(category.to_string()),
                in_stock: true,
                image_url: Some(format!(
                    "https://images.unsplash.com/{photo}?q=80&w=1200&auto=format&fit=crop"
                )),
                shopify_url: None,
                brand: Some(brand.to_string()),
                tags: Some(tags.iter().map(|t| t.to_string()).collect()),
                rating: Some(rating),
            },
        )
        .collect()
}
