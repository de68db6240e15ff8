//! Grand total and percentage rules

use crate::models::Money;
use crate::store::ExpenseStore;

/// Sum of every amount in the store
///
/// Currency symbols are ignored; a store mixing symbols is summed as-is.
pub fn total_spend(store: &ExpenseStore) -> Money {
    store.iter().map(|record| record.amount).sum()
}

/// Share of `part` in `whole` as a whole percentage, rounding halves up.
///
/// Returns 0 whenever `whole` is not positive, so an empty or all-zero store
/// never divides by zero.
pub fn percentage_of(part: Money, whole: Money) -> i64 {
    if !whole.is_positive() {
        return 0;
    }
    let part = i128::from(part.cents());
    let whole = i128::from(whole.cents());
    // floor(part / whole * 100 + 1/2), kept in integers
    (200 * part + whole).div_euclid(2 * whole) as i64
}
