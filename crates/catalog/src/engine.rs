//! Filter/sort engine.
//!
//! Every call starts from a fresh copy of the full collection, so results never
//! depend on a previous selection. All sorts are stable: ties keep input order.

use chrono::{DateTime, Utc};

use shelfwise_core::{Clock, SystemClock};
use shelfwise_inventory::total_stock;
use shelfwise_products::Product;

use crate::collation::NameCollator;
use crate::criterion::Criterion;
use crate::policy::FilterPolicy;

/// Derive the display list for `criterion` from the full `products` collection.
///
/// | criterion        | keeps                                   | order                     |
/// |------------------|-----------------------------------------|---------------------------|
/// | `Alphabetical`   | all                                     | name, `en` collation      |
/// | `LowQuantity`    | total stock `< low_quantity_threshold`  | total stock ascending     |
/// | `DateModified`   | all                                     | last modified, newest first |
/// | `ExpirationDate` | expiry `<= now + expiration_window`     | expiry ascending          |
/// | `Unfiltered`     | all                                     | input order               |
///
/// `clock` is read at most once per call, and only for `ExpirationDate`.
pub fn apply(
    products: &[Product],
    criterion: Criterion,
    policy: &FilterPolicy,
    clock: &dyn Clock,
) -> Vec<Product> {
    let mut view = products.to_vec();

    match criterion {
        Criterion::Alphabetical => {
            let collator = NameCollator::new();
            view.sort_by(|a, b| collator.compare(a.name(), b.name()));
        }
        Criterion::LowQuantity => {
            // Sort, then filter. Same output as filter-then-sort.
            view.sort_by_cached_key(total_stock);
            view.retain(|p| total_stock(p) < policy.low_quantity_threshold);
        }
        Criterion::DateModified => {
            view.sort_by(|a, b| b.last_modified().cmp(&a.last_modified()));
        }
        Criterion::ExpirationDate => {
            let horizon = expiration_horizon(clock.now(), policy);
            view.retain(|p| p.expiry_date() <= horizon);
            view.sort_by_key(Product::expiry_date);
        }
        Criterion::Unfiltered => {}
    }

    tracing::debug!(
        criterion = %criterion,
        total = products.len(),
        retained = view.len(),
        "applied catalog criterion"
    );

    view
}

/// [`apply`] with the default policy and the wall clock.
pub fn apply_default(products: &[Product], criterion: Criterion) -> Vec<Product> {
    apply(products, criterion, &FilterPolicy::default(), &SystemClock)
}

/// Latest expiry date still considered "expiring soon". Saturates instead of overflowing.
fn expiration_horizon(now: DateTime<Utc>, policy: &FilterPolicy) -> DateTime<Utc> {
    now.checked_add_signed(policy.expiration_window())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
