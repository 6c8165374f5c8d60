pub(crate) mod panic_handler;
