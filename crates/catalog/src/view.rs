//! Session state of a product listing screen.
//!
//! The view owns the full source collection and the active criterion. The
//! filtered list is a disposable snapshot: it is rebuilt from the full source
//! whenever either input changes and is never patched in place.

use shelfwise_core::{Clock, SystemClock};
use shelfwise_products::Product;

use crate::criterion::Criterion;
use crate::engine::apply;
use crate::policy::FilterPolicy;
use crate::selection::select_by_index;

#[derive(Debug)]
pub struct CatalogView<C = SystemClock> {
    policy: FilterPolicy,
    clock: C,
    products: Vec<Product>,
    criterion: Criterion,
    filtered: Vec<Product>,
    selected: Option<usize>,
}

impl CatalogView<SystemClock> {
    pub fn with_system_clock(policy: FilterPolicy) -> Self {
        Self::new(policy, SystemClock)
    }
}

impl<C: Clock> CatalogView<C> {
    /// An empty view with no criterion selected.
    pub fn new(policy: FilterPolicy, clock: C) -> Self {
        Self {
            policy,
            clock,
            products: Vec::new(),
            criterion: Criterion::Unfiltered,
            filtered: Vec::new(),
            selected: None,
        }
    }

    /// Replace the source collection wholesale (initial load or store refresh).
    ///
    /// Clears the selection, since positions in the old collection are meaningless.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        tracing::info!(count = products.len(), "product collection replaced");
        self.products = products;
        self.selected = None;
        self.recompute();
    }

    /// Select a criterion by label. Unknown labels show the collection unfiltered.
    pub fn apply_filter(&mut self, label: &str) {
        self.set_criterion(Criterion::from_label(label));
    }

    pub fn set_criterion(&mut self, criterion: Criterion) {
        self.criterion = criterion;
        self.recompute();
    }

    /// Recompute against the current clock (e.g. after the day rolled over).
    pub fn refresh(&mut self) {
        self.recompute();
    }

    /// Select a product by its position in the **full** source collection.
    pub fn select(&mut self, index: i64) -> Option<&Product> {
        self.selected = select_by_index(&self.products, index).map(|_| index as usize);
        self.selected()
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.products.get(i))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current display list; export services consume this as-is.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn recompute(&mut self) {
        self.filtered = apply(&self.products, self.criterion, &self.policy, &self.clock);
        tracing::debug!(
            criterion = %self.criterion,
            shown = self.filtered.len(),
            "catalog view recomputed"
        );
    }
}
