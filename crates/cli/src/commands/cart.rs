//! Cart quotes.

use comxstore_core::cart::Cart;
use comxstore_core::format::format_currency;
use comxstore_core::{Product, ProductId};
use comxstore_server::mock::seed;

use super::{CommandError, print_json};

/// Parse `product_id:quantity`; a bare id means one unit.
fn parse_line(raw: &str) -> Result<(ProductId, u32), CommandError> {
    let invalid = || CommandError::InvalidLine(raw.to_string());
    let (id, quantity) = match raw.split_once(':') {
        Some((id, qty)) => (id, qty.trim().parse::<u32>().map_err(|_| invalid())?),
        None => (raw, 1),
    };
    let id = id.trim();
    if id.is_empty() || quantity == 0 {
        return Err(invalid());
    }
    Ok((ProductId::new(id), quantity))
}

/// Fill a cart from parsed lines.
fn build_cart(lines: &[String], products: &[Product]) -> Result<Cart, CommandError> {
    let mut cart = Cart::default();
    for raw in lines {
        let (id, quantity) = parse_line(raw)?;
        let product = products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CommandError::UnknownProduct(id.to_string()))?;
        cart.add(product, quantity);
    }
    Ok(cart)
}

/// Price the given lines, delivery fee included.
///
/// # Errors
///
/// Returns an error for a malformed line or an unknown product.
#[allow(clippy::print_stdout)]
pub fn quote(lines: &[String], json: bool) -> Result<(), CommandError> {
    let cart = build_cart(lines, &seed::products())?;
    let totals = cart.totals();

    if json {
        return print_json(&totals);
    }

    let currency = cart.currency();
    for line in cart.lines() {
        println!(
            "{:<22} x{:<3} {:>16}",
            line.name,
            line.quantity,
            format_currency(line.line_total(), currency)
        );
    }
    println!("{:<27} {:>16}", "Subtotal", format_currency(totals.subtotal, currency));
    println!("{:<27} {:>16}", "Delivery", format_currency(totals.delivery, currency));
    println!("{:<27} {:>16}", "Total", format_currency(totals.total, currency));
    Ok(())
}
