use crate::execution::Arguments;
use crate::execution::FieldResult;
use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use std::sync::Arc;

pub(crate) type ResolveFn<'r> = &'r dyn Fn(&FieldValue, &Arguments, &ResolveInfo<'_>) -> FieldResult;

/// A wrapper around every resolver call of an execution.
///
/// Middleware run in the order they were added to the
/// [`ExecutionArgs`](crate::ExecutionArgs): the first one is the outermost
/// and decides whether (and with what) to call [`Next::run`].
pub trait Middleware {
    fn resolve(
        &self,
        next: Next<'_>,
        source: &FieldValue,
        args: &Arguments,
        info: &ResolveInfo<'_>,
    ) -> FieldResult;
}

/// The rest of the middleware chain, ending in the field's resolver.
pub struct Next<'r> {
    middleware: &'r [Arc<dyn Middleware>],
    resolver: ResolveFn<'r>,
}

impl<'r> Next<'r> {
    pub(crate) fn new(middleware: &'r [Arc<dyn Middleware>], resolver: ResolveFn<'r>) -> Self {
        Self { middleware, resolver }
    }

    pub fn run(self, source: &FieldValue, args: &Arguments, info: &ResolveInfo<'_>) -> FieldResult {
        match self.middleware.split_first() {
            Some((first, rest)) => first.resolve(Next::new(rest, self.resolver), source, args, info),
            None => (self.resolver)(source, args, info),
        }
    }
}
