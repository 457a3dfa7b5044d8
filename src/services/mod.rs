pub(crate) mod consent;
pub(crate) mod export;
pub(crate) mod extract;
pub(crate) mod loader;
