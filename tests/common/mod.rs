pub mod json_server;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
