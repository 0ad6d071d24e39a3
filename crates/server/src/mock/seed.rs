//! Demo data the mock store starts with.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use comxstore_core::{
    Category, CategoryId, CurrencyCode, Customer, CustomerId, Order, OrderId, OrderItem,
    OrderStatus, Product, ProductId, StoreProfile,
};

/// The store profile.
#[must_use]
pub fn store_profile() -> StoreProfile {
    StoreProfile {
        name: "ComXStore Lagos".to_string(),
        logo: "https://picsum.photos/seed/comx/200/200".to_string(),
        currency: CurrencyCode::NGN,
        address: "123 Marina, Lagos Island, Nigeria".to_string(),
        whatsapp: "+2348000000000".to_string(),
    }
}

/// The five launch categories.
#[must_use]
pub fn categories() -> Vec<Category> {
    [
        ("1", "Powertrain", "⚙️", 124),
        ("2", "Braking", "🛑", 86),
        ("3", "Chassis", "🚙", 45),
        ("4", "Illumination", "💡", 210),
        ("5", "Aerodynamics", "🌪️", 156),
    ]
    .into_iter()
    .map(|(id, name, icon, count)| Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        icon: icon.to_string(),
        count,
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    price: i64,
    image: &str,
    stock: u32,
    featured: bool,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: CategoryId::new(category),
        price: Decimal::new(price, 0),
        currency: CurrencyCode::NGN,
        image: format!("https://images.unsplash.com/{image}?auto=format&fit=crop&q=80&w=400"),
        stock,
        featured,
        description: description.to_string(),
    }
}

/// The demo catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "p1",
            "V6 Cylinder Head",
            "1",
            150_000,
            "photo-1619642751034-765dfdf7c58e",
            12,
            true,
            "Genuine V6 cylinder head for high-performance engines. Optimized for heat dissipation and maximum torque throughput. Manufactured with aerospace-grade aluminum alloys for durability under extreme African road conditions.",
        ),
        product(
            "p2",
            "Brembo Sport Pads",
            "2",
            45_000,
            "photo-1486262715619-67b85e0b08d3",
            50,
            true,
            "High performance ceramic brake pads for superior stopping power and low dust. Designed for the discerning driver who demands safety without compromise.",
        ),
        product(
            "p3",
            "Coilover Suspension",
            "3",
            285_000,
            "photo-1512428559083-a40ca990724d",
            8,
            false,
            "Adjustable damping and ride height for precision handling. Transform your vehicle's stance and cornering ability with our premium coilover kit.",
        ),
        product(
            "p4",
            "Adaptive LED Kit",
            "4",
            15_000,
            "photo-1598501479155-738914099436",
            100,
            true,
            "Ultra bright 6000K LED bulbs with adaptive cooling technology. High-intensity discharge performance with the longevity of modern LED chips.",
        ),
        product(
            "p5",
            "Aerodynamic Grille",
            "5",
            32_000,
            "photo-1533473359331-0135ef1b58bf",
            15,
            false,
            "Carbon fiber finish front grille with improved airflow dynamics. Enhance both cooling efficiency and aggressive aesthetic styling.",
        ),
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Two historical orders, newest last.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-1001"),
            customer_id: CustomerId::new("c1"),
            customer_name: "Chidi Okoro".to_string(),
            items: vec![OrderItem {
                product_id: ProductId::new("p1"),
                name: "V6 Cylinder Head".to_string(),
                quantity: 1,
                price: Decimal::new(150_000, 0),
            }],
            total: Decimal::new(150_000, 0),
            currency: CurrencyCode::NGN,
            status: OrderStatus::Paid,
            date: at(2023, 10, 24, 10, 0),
        },
        Order {
            id: OrderId::new("ORD-1002"),
            customer_id: CustomerId::new("c2"),
            customer_name: "Fatima Musa".to_string(),
            items: vec![OrderItem {
                product_id: ProductId::new("p2"),
                name: "Brake Pads".to_string(),
                quantity: 2,
                price: Decimal::new(45_000, 0),
            }],
            total: Decimal::new(90_000, 0),
            currency: CurrencyCode::NGN,
            status: OrderStatus::Pending,
            date: at(2023, 10, 25, 14, 30),
        },
    ]
}

/// Known customers.
#[must_use]
pub fn customers() -> Vec<Customer> {
    [
        ("c1", "Chidi Okoro", "+234801111111", 1_500_000, (2023, 10, 24)),
        ("c2", "Fatima Musa", "+234802222222", 450_000, (2023, 10, 25)),
    ]
    .into_iter()
    .map(|(id, name, phone, spent, (y, m, d))| Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        phone: phone.to_string(),
        total_spent: Decimal::new(spent, 0),
        last_order: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_has_a_seeded_category() {
        let categories = categories();
        for product in products() {
            assert!(
                categories.iter().any(|c| c.id == product.category),
                "{} has no category",
                product.id
            );
        }
    }

    #[test]
    fn test_seed_orders_keep_recorded_totals() {
        for order in orders() {
            assert_eq!(order.total, order.items_subtotal());
        }
    }

    #[test]
    fn test_seed_dates() {
        let first = orders().into_iter().next().map(|o| o.date.to_rfc3339());
        assert_eq!(first.as_deref(), Some("2023-10-24T10:00:00+00:00"));
    }
}
