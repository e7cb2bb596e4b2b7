//! Process-wide, build-once caches keyed by Rust type.
//!
//! A [`TypeCache`] publishes immutable snapshots through [`ArcSwap`]. Values
//! are built outside of any lock; publication is a compare-and-swap, so when
//! two threads race on the first construction of a type only one value is
//! ever visible and the loser adopts it.

use std::any::{TypeId, type_name};
use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

type Snapshot<V> = HashMap<TypeId, Arc<V>>;

/// Init-once map from a Rust type to a shared, immutable value.
pub struct TypeCache<V> {
	domain: &'static str,
	snap: ArcSwap<Snapshot<V>>,
}

impl<V> TypeCache<V> {
	/// Creates an empty cache. `domain` only labels trace events.
	pub fn new(domain: &'static str) -> Self {
		Self {
			domain,
			snap: ArcSwap::from_pointee(HashMap::default()),
		}
	}

	/// Returns the published value for `T`, if any.
	#[inline]
	pub fn get<T: 'static>(&self) -> Option<Arc<V>> {
		self.snap.load().get(&TypeId::of::<T>()).cloned()
	}

	/// Returns the value for `T`, building and publishing it on first use.
	///
	/// A failed build publishes nothing; the next call tries again.
	pub fn get_or_try_init<T: 'static, E>(&self, build: impl FnOnce() -> Result<V, E>) -> Result<Arc<V>, E> {
		if let Some(existing) = self.get::<T>() {
			return Ok(existing);
		}

		let built = Arc::new(build()?);
		let id = TypeId::of::<T>();

		loop {
			let cur = self.snap.load_full();
			if let Some(existing) = cur.get(&id) {
				return Ok(existing.clone());
			}

			let mut next = (*cur).clone();
			next.insert(id, built.clone());

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				tracing::debug!(domain = self.domain, type_name = type_name::<T>(), "published type cache entry");
				return Ok(built);
			}
		}
	}

	/// Number of published entries.
	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Barrier;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	struct Marker;
	struct Other;

	#[test]
	fn test_builds_once() {
		let cache: TypeCache<Vec<u32>> = TypeCache::new("test");
		let calls = AtomicUsize::new(0);

		let first = cache
			.get_or_try_init::<Marker, ()>(|| {
				calls.fetch_add(1, Ordering::SeqCst);
				Ok(vec![1, 2, 3])
			})
			.unwrap();
		let second = cache
			.get_or_try_init::<Marker, ()>(|| {
				calls.fetch_add(1, Ordering::SeqCst);
				Ok(vec![9])
			})
			.unwrap();

		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn test_failed_build_is_not_published() {
		let cache: TypeCache<u32> = TypeCache::new("test");
		assert_eq!(cache.get_or_try_init::<Marker, &str>(|| Err("boom")), Err("boom"));
		assert!(cache.is_empty());
		assert_eq!(*cache.get_or_try_init::<Marker, &str>(|| Ok(7)).unwrap(), 7);
	}

	#[test]
	fn test_entries_are_per_type() {
		let cache: TypeCache<&'static str> = TypeCache::new("test");
		cache.get_or_try_init::<Marker, ()>(|| Ok("marker")).unwrap();
		cache.get_or_try_init::<Other, ()>(|| Ok("other")).unwrap();
		assert_eq!(*cache.get::<Marker>().unwrap(), "marker");
		assert_eq!(*cache.get::<Other>().unwrap(), "other");
	}

	#[test]
	fn test_concurrent_first_use_publishes_one_value() {
		let cache: TypeCache<usize> = TypeCache::new("test");
		let barrier = Barrier::new(8);

		let results: Vec<Arc<usize>> = std::thread::scope(|s| {
			let handles: Vec<_> = (0..8)
				.map(|i| {
					let cache = &cache;
					let barrier = &barrier;
					s.spawn(move || {
						barrier.wait();
						cache.get_or_try_init::<Marker, ()>(|| Ok(i)).unwrap()
					})
				})
				.collect();
			handles.into_iter().map(|h| h.join().unwrap()).collect()
		});

		let winner = &results[0];
		assert!(results.iter().all(|r| Arc::ptr_eq(r, winner)));
		assert_eq!(cache.len(), 1);
	}
}
