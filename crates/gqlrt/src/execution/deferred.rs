use futures::FutureExt;
use futures::future::LocalBoxFuture;

/// A value that is either available now or will be produced by a future.
///
/// Completion is built out of `Deferred`s so that a selection whose
/// resolvers are all synchronous never allocates a future: every
/// combinator keeps `Ready` inputs `Ready`.
pub enum Deferred<'a, T> {
    Ready(T),
    Pending(LocalBoxFuture<'a, T>),
}

impl<'a, T: 'a> Deferred<'a, T> {
    pub fn pending(future: impl Future<Output = T> + 'a) -> Self {
        Deferred::Pending(future.boxed_local())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Deferred::Pending(_))
    }

    pub fn map<U: 'a>(self, f: impl FnOnce(T) -> U + 'a) -> Deferred<'a, U> {
        match self {
            Deferred::Ready(value) => Deferred::Ready(f(value)),
            Deferred::Pending(future) => Deferred::Pending(future.map(f).boxed_local()),
        }
    }

    /// Chains a continuation that itself may be deferred. The continuation
    /// runs only once `self` has produced its value.
    pub fn then<U: 'a>(self, f: impl FnOnce(T) -> Deferred<'a, U> + 'a) -> Deferred<'a, U> {
        match self {
            Deferred::Ready(value) => f(value),
            Deferred::Pending(future) => Deferred::pending(async move {
                f(future.await).resolve().await
            }),
        }
    }

    pub async fn resolve(self) -> T {
        match self {
            Deferred::Ready(value) => value,
            Deferred::Pending(future) => future.await,
        }
    }

    /// Joins `items` in order. Pending items are driven concurrently; the
    /// result is `Ready` when every item is.
    pub fn join_all(items: impl IntoIterator<Item = Deferred<'a, T>>) -> Deferred<'a, Vec<T>> {
        let mut slots: Vec<Option<T>> = vec![];
        let mut pending: Vec<(usize, LocalBoxFuture<'a, T>)> = vec![];
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Deferred::Ready(value) => slots.push(Some(value)),
                Deferred::Pending(future) => {
                    slots.push(None);
                    pending.push((index, future));
                },
            }
        }

        if pending.is_empty() {
            return Deferred::Ready(slots.into_iter().flatten().collect());
        }

        Deferred::pending(async move {
            let (indices, futures): (Vec<usize>, Vec<_>) = pending.into_iter().unzip();
            let values = futures::future::join_all(futures).await;
            for (index, value) in indices.into_iter().zip(values) {
                slots[index] = Some(value);
            }
            slots.into_iter().flatten().collect()
        })
    }
}

impl<T> From<T> for Deferred<'_, T> {
    fn from(value: T) -> Self {
        Deferred::Ready(value)
    }
}
