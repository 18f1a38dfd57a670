//! Closures and their identity-keyed memo tables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use lam_ir::{ExprId, Name, SharedArena};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::Value;
use crate::environment::Frame;
use crate::Environment;

/// Dead keys are swept once a table grows past this many entries, and
/// again at every power of two after it.
const PRUNE_THRESHOLD: usize = 1024;

/// An abstraction together with the environment it was created in.
///
/// Cloning shares the closure; [`Closure::ptr_eq`] is the identity used for
/// memoization. Two closures built from the same abstraction are distinct
/// and each gets its own memo table.
#[derive(Clone)]
pub struct Closure(Arc<ClosureData>);

struct ClosureData {
    env: Environment,
    param: Name,
    body: ExprId,
    arena: SharedArena,
    memo: Mutex<FxHashMap<MemoKey, Value>>,
}

/// Memo key: the identity of an argument closure.
///
/// Holding a `Weak` keeps the allocation (and so its address) reserved
/// while the entry exists, without keeping the argument itself alive.
struct MemoKey(Weak<ClosureData>);

impl MemoKey {
    fn of(closure: &Closure) -> Self {
        MemoKey(Arc::downgrade(&closure.0))
    }

    fn is_live(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl PartialEq for MemoKey {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoKey {}

impl Hash for MemoKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0.as_ptr(), state);
    }
}

impl Closure {
    /// Create a closure with an empty memo table.
    pub fn new(env: Environment, param: Name, body: ExprId, arena: SharedArena) -> Self {
        Closure(Arc::new(ClosureData {
            env,
            param,
            body,
            arena,
            memo: Mutex::new(FxHashMap::default()),
        }))
    }

    /// The captured environment.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.0.env
    }

    #[inline]
    pub fn param(&self) -> Name {
        self.0.param
    }

    #[inline]
    pub fn body(&self) -> ExprId {
        self.0.body
    }

    /// The arena `body` lives in.
    #[inline]
    pub fn arena(&self) -> &SharedArena {
        &self.0.arena
    }

    /// Same closure instance?
    #[inline]
    pub fn ptr_eq(&self, other: &Closure) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Cached result of applying this closure to `arg`.
    pub fn memo_lookup(&self, arg: &Closure) -> Option<Value> {
        self.0.memo.lock().get(&MemoKey::of(arg)).cloned()
    }

    /// Record the result of applying this closure to `arg`.
    ///
    /// Overwrites an existing entry; racing writers store the same value.
    pub fn memoize(&self, arg: &Closure, value: Value) {
        let mut memo = self.0.memo.lock();
        memo.insert(MemoKey::of(arg), value);
        let len = memo.len();
        if len >= PRUNE_THRESHOLD && len.is_power_of_two() {
            memo.retain(|key, _| key.is_live());
        }
    }

    /// Number of memo entries, dead keys included.
    pub fn memo_len(&self) -> usize {
        self.0.memo.lock().len()
    }

    /// If this is the last handle, move the captured environment into
    /// `frames` and the memoized results into `values`.
    pub(super) fn detach(&mut self, frames: &mut Vec<Arc<Frame>>, values: &mut Vec<Value>) {
        if let Some(data) = Arc::get_mut(&mut self.0) {
            frames.extend(data.env.take_head());
            values.extend(data.memo.get_mut().drain().map(|(_, value)| value));
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("param", &self.0.param)
            .field("body", &self.0.body)
            .field("env_depth", &self.0.env.depth())
            .finish_non_exhaustive()
    }
}
