use once_cell::sync::Lazy;
use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Instant,
};

/* ───────────── Host‑Latenzen pro API‑Aufruf ─────────── */

static TIMES: Lazy<Mutex<Vec<(&'static str, u128)>>> =
    Lazy::new(|| Mutex::new(Vec::new()));

/// Im Wrapper aufrufen: `record("enqueue_write", t)`
pub fn record(name: &'static str, start: Instant) {
    let dur = start.elapsed().as_micros();
    TIMES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push((name, dur));
}

/* ───────────── Device‑Allokationen ───────────────────── */

pub static ALLOCS:      AtomicUsize = AtomicUsize::new(0);
pub static ALLOC_BYTES: AtomicUsize = AtomicUsize::new(0);

/* ───────────── Zusammenfassung ───────────────────────── */

/// Am Programmende aufrufen
pub fn summary() {
    let mut map: BTreeMap<&str, Vec<u128>> = BTreeMap::new();
    {
        let mut times = TIMES.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for (name, us) in times.drain(..) {
            map.entry(name).or_default().push(us);
        }
    }

    println!("── metrics summary ──");
    for (name, mut v) in map {
        v.sort_unstable();
        let mean = v.iter().sum::<u128>() / v.len() as u128;
        let p95  = v[((v.len() * 95) / 100).saturating_sub(1)];
        println!("{:<18} n={:<4} mean={:>7} µs   p95={:>7} µs", name, v.len(), mean, p95);
    }

    // nach dem Teardown sollten beide Zähler 0 sein
    let allocs = ALLOCS.load(Ordering::Relaxed);
    let bytes  = ALLOC_BYTES.load(Ordering::Relaxed);
    println!("live device buffers: {}   ({} bytes)", allocs, bytes);
}
