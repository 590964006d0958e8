//! Bootstrap catalog.
//!
//! On startup the `products` collection is seeded with the house teas, but
//! only when it is completely empty. The check is on emptiness, not content:
//! deleting every product and restarting re-seeds the same teas under new ids.

use tracing::{info, instrument};

use mangal_chai_core::{Price, Product, ProductId};

use crate::db::{ProductStore, RepositoryError};

/// A seed entry, without an id.
struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: Price,
    category: &'static str,
    image_url: &'static str,
    weight: &'static str,
}

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Premium Assam Black Tea",
        description: "Rich, malty Assam tea with robust flavor. Perfect for morning tea with milk and sugar. Sourced from the finest tea gardens of Assam.",
        price: Price::from_paise(29_900),
        category: "Black Tea",
        image_url: "https://images.unsplash.com/photo-1563822249366-3efb23b8e0c9",
        weight: "100g",
    },
    SeedProduct {
        name: "Darjeeling Muscatel",
        description: "Delicate and aromatic Darjeeling tea with a distinctive muscatel flavor. Known as the 'Champagne of Teas'.",
        price: Price::from_paise(45_000),
        category: "Black Tea",
        image_url: "https://images.pexels.com/photos/1793034/pexels-photo-1793034.jpeg",
        weight: "100g",
    },
    SeedProduct {
        name: "Traditional Masala Chai",
        description: "Our signature blend of black tea with cardamom, cinnamon, cloves, and ginger. A 60-year-old family recipe.",
        price: Price::from_paise(19_900),
        category: "Masala Chai",
        image_url: "https://images.pexels.com/photos/5947062/pexels-photo-5947062.jpeg",
        weight: "200g",
    },
    SeedProduct {
        name: "Royal Jaipur Blend",
        description: "A premium blend inspired by royal traditions of Jaipur. Mix of fine Assam tea with aromatic spices.",
        price: Price::from_paise(39_900),
        category: "Special Blends",
        image_url: "https://images.unsplash.com/photo-1625033405953-f20401c7d848",
        weight: "150g",
    },
    SeedProduct {
        name: "Green Tea Classic",
        description: "Pure green tea leaves with natural antioxidants. Light, refreshing taste perfect for health-conscious tea lovers.",
        price: Price::from_paise(34_900),
        category: "Green Tea",
        image_url: "https://images.unsplash.com/photo-1521136492500-e18f107709f7",
        weight: "100g",
    },
    SeedProduct {
        name: "Cardamom Tea",
        description: "Aromatic tea infused with premium green cardamom. A classic favorite for its warming and soothing properties.",
        price: Price::from_paise(25_900),
        category: "Flavored Tea",
        image_url: "https://images.pexels.com/photos/3904035/pexels-photo-3904035.jpeg",
        weight: "100g",
    },
];

/// What a seeding pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and this many products were inserted.
    Seeded(usize),
    /// The collection already held this many products; nothing was written.
    AlreadyPopulated(u64),
}

/// The seed catalog, each product under a freshly generated id.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|seed| Product {
            id: ProductId::generate(),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            price: seed.price,
            category: seed.category.to_owned(),
            image_url: seed.image_url.to_owned(),
            in_stock: true,
            weight: seed.weight.to_owned(),
        })
        .collect()
}

/// Insert the seed catalog if the product collection is empty.
///
/// # Errors
///
/// Returns `RepositoryError` if counting or inserting fails. The insert is
/// all-or-nothing.
#[instrument(skip(store))]
pub async fn seed_catalog(store: &dyn ProductStore) -> Result<SeedOutcome, RepositoryError> {
    let existing = store.count().await?;
    if existing > 0 {
        info!(existing, "catalog already populated, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated(existing));
    }

    let products = seed_products();
    store.insert_many(&products).await?;
    info!(inserted = products.len(), "seed products inserted");
    Ok(SeedOutcome::Seeded(products.len()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let store = MemoryStore::new();
        let outcome = seed_catalog(&store).await.unwrap();

        assert_eq!(outcome, SeedOutcome::Seeded(6));
        assert_eq!(store.count().await.unwrap(), 6);
        assert_eq!(store.categories().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_second_pass_is_a_no_op() {
        let store = MemoryStore::new();
        seed_catalog(&store).await.unwrap();
        let before = store.list().await.unwrap();

        let outcome = seed_catalog(&store).await.unwrap();
        assert_eq!(outcome, SeedOutcome::AlreadyPopulated(6));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_reseed_after_clearing_assigns_new_ids() {
        let store = MemoryStore::new();
        seed_catalog(&store).await.unwrap();
        let first: Vec<ProductId> = store.list().await.unwrap().into_iter().map(|p| p.id).collect();

        store.clear_products().await;
        seed_catalog(&store).await.unwrap();
        let second: Vec<ProductId> = store.list().await.unwrap().into_iter().map(|p| p.id).collect();

        assert_eq!(second.len(), 6);
        assert!(first.iter().all(|id| !second.contains(id)));
    }

    #[test]
    fn test_seed_products_are_in_stock_with_unique_ids() {
        let products = seed_products();
        assert!(products.iter().all(|p| p.in_stock));

        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }
}
