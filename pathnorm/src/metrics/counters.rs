use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

pub static PATHS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "pathnorm_paths_total",
        "Paths normalized, by flavor and absolute/relative",
        &["flavor", "kind"]
    )
        .expect("register pathnorm_paths_total")
});

pub static PARENT_REFS_RETAINED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "pathnorm_parent_refs_retained_total",
        "Leading `..` segments kept in relative output",
        &["flavor"]
    )
        .expect("register pathnorm_parent_refs_retained_total")
});

pub static OUTPUT_ERRORS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "pathnorm_output_errors_total",
        "Results that could not be written",
        &["reason"]
    )
        .expect("register pathnorm_output_errors_total")
});

#[inline]
pub fn on_normalized(flavor: &str, absolute: bool, parent_refs: usize) {
    let kind = if absolute { "absolute" } else { "relative" };
    PATHS_TOTAL.with_label_values(&[flavor, kind]).inc();
    if parent_refs > 0 {
        PARENT_REFS_RETAINED
            .with_label_values(&[flavor])
            .inc_by(parent_refs as u64);
    }
}

#[inline]
pub fn inc_output_error(reason: &str) {
    OUTPUT_ERRORS.with_label_values(&[reason]).inc();
}
