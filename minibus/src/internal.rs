mod registry;
mod subscription;

pub(crate) use registry::Registry;
pub(crate) use subscription::{HandlerFn, Subscription};
