//! Resolve several template maps (one per mounted site section) concurrently.

use std::collections::VecDeque;
use std::sync::{mpsc, Mutex};

use crate::template::TemplateMap;

use super::{resolve, Resolution, ResolveOptions};

/// Resolves each map in its own pass on a small pool of scoped threads.
///
/// Every map gets a private memo, so each result equals `resolve(map, options)`
/// on its own. Results come back in input order.
pub fn resolve_all(maps: &[TemplateMap], options: &ResolveOptions) -> Vec<Resolution> {
    if maps.len() <= 1 {
        return maps.iter().map(|m| resolve(m, options)).collect();
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(maps.len());
    let work: Mutex<VecDeque<(usize, &TemplateMap)>> =
        Mutex::new(maps.iter().enumerate().collect());
    let (tx, rx) = mpsc::channel();

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let work = &work;
            scope.spawn(move || loop {
                let next = match work.lock() {
                    Ok(mut queue) => queue.pop_front(),
                    Err(_) => None,
                };
                let Some((index, map)) = next else {
                    break;
                };
                let _ = tx.send((index, resolve(map, options)));
            });
        }
    });
    drop(tx);

    let mut results: Vec<(usize, Resolution)> = rx.into_iter().collect();
    results.sort_by_key(|(index, _)| *index);
    tracing::debug!(sections = results.len(), workers, "resolved template maps");
    results.into_iter().map(|(_, r)| r).collect()
}
