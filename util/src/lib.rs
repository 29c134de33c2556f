//! Unopinionated standalone utilities.

mod geom;
pub use geom::{VecExt, DIR_4};

mod heap;
pub use heap::PriorityQueue;

mod path;
pub use path::{astar_path, bfs};

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;

/// Set with an efficient hash function.
pub use rustc_hash::FxHashSet as HashSet;

type DefaultHashBuilder = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Insertion order preserving map with an efficient hash function.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;
