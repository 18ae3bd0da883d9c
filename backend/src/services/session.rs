//! In-memory store of per-session live AQI walks
//!
//! Each browser session owns one [`RandomWalk`]; nothing is shared between
//! sessions and nothing survives a restart.

use std::collections::{HashMap, VecDeque};

use shared::{NoiseSource, RandomWalk};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Bounded map of session id to live walk, evicting the oldest session first
pub struct SessionStore {
    inner: RwLock<Sessions>,
    max_sessions: usize,
}

#[derive(Default)]
struct Sessions {
    walks: HashMap<Uuid, RandomWalk>,
    /// Insertion order, oldest first
    order: VecDeque<Uuid>,
}

impl Sessions {
    /// Insert a fresh walk, evicting the oldest sessions to stay under `max`
    fn create(&mut self, max: usize) -> Uuid {
        while self.walks.len() >= max {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.walks.remove(&oldest);
                    tracing::debug!(session_id = %oldest, "Evicted live AQI session");
                }
                None => break,
            }
        }

        let id = Uuid::new_v4();
        self.walks.insert(id, RandomWalk::default());
        self.order.push_back(id);
        tracing::debug!(session_id = %id, "Started live AQI session");
        id
    }
}

/// Outcome of one live tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveTick {
    pub id: Uuid,
    /// `true` when the session was started by this tick
    pub created: bool,
    /// Reading after the tick
    pub aqi: f64,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: RwLock::new(Sessions::default()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Advance the requested session's walk by one tick, starting a fresh
    /// walk under a new id when the session is unknown or was evicted.
    ///
    /// Lookup, creation and the tick share one write lock.
    pub async fn tick_or_create<N: NoiseSource + ?Sized>(
        &self,
        requested: Option<Uuid>,
        noise: &mut N,
    ) -> LiveTick {
        let mut sessions = self.inner.write().await;

        let known = requested.filter(|id| sessions.walks.contains_key(id));
        let (id, created) = match known {
            Some(id) => (id, false),
            None => (sessions.create(self.max_sessions), true),
        };

        let aqi = match sessions.walks.get_mut(&id) {
            Some(walk) => walk.step(noise),
            // Unreachable while the lock is held; keeps the seed value
            None => RandomWalk::default().value(),
        };
        tracing::debug!(session_id = %id, aqi, created, "Live AQI tick");

        LiveTick { id, created, aqi }
    }

    /// Current reading of a session without advancing it
    pub async fn current(&self, id: Uuid) -> Option<f64> {
        self.inner.read().await.walks.get(&id).map(RandomWalk::value)
    }

    /// Number of tracked sessions
    pub async fn len(&self) -> usize {
        self.inner.read().await.walks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ZeroNoise, LIVE_AQI_SEED};
    use std::sync::Arc;

    struct Constant(f64);

    impl NoiseSource for Constant {
        fn gaussian(&mut self, _std_dev: f64) -> f64 {
            self.0
        }
    }

    #[tokio::test]
    async fn test_tick_creates_then_reuses() {
        let store = SessionStore::new(10);
        let first = store.tick_or_create(None, &mut ZeroNoise).await;
        assert!(first.created);
        assert_eq!(first.aqi, LIVE_AQI_SEED);

        let again = store.tick_or_create(Some(first.id), &mut Constant(3.0)).await;
        assert_eq!(again.id, first.id);
        assert!(!again.created);
        assert_eq!(again.aqi, LIVE_AQI_SEED + 3.0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_gets_fresh_session() {
        let store = SessionStore::new(10);
        let stale = Uuid::new_v4();
        let tick = store.tick_or_create(Some(stale), &mut ZeroNoise).await;
        assert!(tick.created);
        assert_ne!(tick.id, stale);
        assert_eq!(tick.aqi, LIVE_AQI_SEED);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(10);
        let a = store.tick_or_create(None, &mut ZeroNoise).await.id;
        let b = store.tick_or_create(None, &mut ZeroNoise).await.id;

        let moved = store.tick_or_create(Some(a), &mut Constant(5.0)).await;
        assert_eq!(moved.aqi, LIVE_AQI_SEED + 5.0);
        assert_eq!(store.current(b).await, Some(LIVE_AQI_SEED));
    }

    #[tokio::test]
    async fn test_oldest_session_evicted() {
        let store = SessionStore::new(2);
        let first = store.tick_or_create(None, &mut ZeroNoise).await.id;
        let second = store.tick_or_create(None, &mut ZeroNoise).await.id;
        let third = store.tick_or_create(None, &mut ZeroNoise).await.id;

        assert_eq!(store.len().await, 2);
        assert!(store.current(first).await.is_none());
        assert!(store.current(second).await.is_some());
        assert!(store.current(third).await.is_some());

        // An evicted session comes back as a new one
        let back = store.tick_or_create(Some(first), &mut ZeroNoise).await;
        assert!(back.created);
        assert_ne!(back.id, first);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_ticks_under_eviction_pressure() {
        let store = Arc::new(SessionStore::new(1));
        let tasks: Vec<_> = (0..500)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.tick_or_create(None, &mut ZeroNoise).await })
            })
            .collect();

        for task in tasks {
            let tick = task.await.unwrap();
            assert!(tick.created);
            assert_eq!(tick.aqi, LIVE_AQI_SEED);
        }
        assert_eq!(store.len().await, 1);
    }
}
